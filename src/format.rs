//! Pixel-format descriptors and their size arithmetic.
//!
//! A [`PixelDesc`] pairs a channel layout with a storage encoding and answers
//! every sizing question a codec or the mip machinery needs: bytes per
//! channel/pixel/block, mip-chain dimensions, and total pixel/block/byte
//! counts over a mip range. All queries are pure; out-of-domain combinations
//! (e.g. bytes-per-channel of a block-compressed encoding) answer 0 rather
//! than failing.

/// Channel layout of a pixel.
///
/// Discriminants are the wire values exchanged with codec plugins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelLayout {
    /// Single luminance channel.
    Luminance = 0,
    /// Red only.
    R = 1,
    /// Green only.
    G = 2,
    /// Blue only.
    B = 3,
    /// Alpha only.
    A = 4,
    /// Luminance + alpha.
    LuminanceAlpha = 5,
    /// Red, green, blue.
    Rgb = 6,
    /// Red, green, blue, alpha.
    Rgba = 7,
}

impl PixelLayout {
    /// Wire value (ordinal position in the plugin interface).
    pub const fn wire_value(self) -> u8 {
        self as u8
    }

    /// Create from a wire value. Returns `None` for out-of-range values.
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Luminance),
            1 => Some(Self::R),
            2 => Some(Self::G),
            3 => Some(Self::B),
            4 => Some(Self::A),
            5 => Some(Self::LuminanceAlpha),
            6 => Some(Self::Rgb),
            7 => Some(Self::Rgba),
            _ => None,
        }
    }
}

impl core::fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            PixelLayout::Luminance => "LUMINANCE",
            PixelLayout::R => "R",
            PixelLayout::G => "G",
            PixelLayout::B => "B",
            PixelLayout::A => "A",
            PixelLayout::LuminanceAlpha => "LUMINANCE_ALPHA",
            PixelLayout::Rgb => "RGB",
            PixelLayout::Rgba => "RGBA",
        })
    }
}

/// Storage encoding of a pixel.
///
/// Exactly one of plain / packed / compressed holds for every encoding.
/// Discriminants are the wire values exchanged with codec plugins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelType {
    /// 8-bit unsigned integer per channel.
    Int8 = 0,
    /// 16-bit unsigned integer per channel.
    Int16 = 1,
    /// 32-bit unsigned integer per channel.
    Int32 = 2,
    /// 16-bit float per channel.
    Float16 = 3,
    /// 32-bit float per channel.
    Float32 = 4,
    /// Packed 3-3-2 RGB in one byte.
    Int332 = 5,
    /// Packed 5-6-5 RGB in one 16-bit word.
    Int565 = 6,
    /// Packed 4-4-4-4 RGBA in one 16-bit word.
    Int4444 = 7,
    /// Packed 5-5-5-1 RGBA in one 16-bit word.
    Int5551 = 8,
    /// Packed 8-8-8-8 RGBA in one 32-bit word.
    Int8888 = 9,
    /// Packed 10-10-10-2 RGBA in one 32-bit word.
    Int1010102 = 10,
    /// DXT1 block compression (4x4 texels, 8 bytes).
    Dxt1 = 11,
    /// DXT3 block compression (4x4 texels, 16 bytes).
    Dxt3 = 12,
    /// DXT5 block compression (4x4 texels, 16 bytes).
    Dxt5 = 13,
    /// 3Dc two-channel block compression (4x4 texels, 16 bytes).
    ThreeDc = 14,
}

impl PixelType {
    /// Wire value (ordinal position in the plugin interface).
    pub const fn wire_value(self) -> u8 {
        self as u8
    }

    /// Create from a wire value. Returns `None` for out-of-range values.
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Int8),
            1 => Some(Self::Int16),
            2 => Some(Self::Int32),
            3 => Some(Self::Float16),
            4 => Some(Self::Float32),
            5 => Some(Self::Int332),
            6 => Some(Self::Int565),
            7 => Some(Self::Int4444),
            8 => Some(Self::Int5551),
            9 => Some(Self::Int8888),
            10 => Some(Self::Int1010102),
            11 => Some(Self::Dxt1),
            12 => Some(Self::Dxt3),
            13 => Some(Self::Dxt5),
            14 => Some(Self::ThreeDc),
            _ => None,
        }
    }
}

impl core::fmt::Display for PixelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            PixelType::Int8 => "INT_8",
            PixelType::Int16 => "INT_16",
            PixelType::Int32 => "INT_32",
            PixelType::Float16 => "FLOAT_16",
            PixelType::Float32 => "FLOAT_32",
            PixelType::Int332 => "INT_3_3_2",
            PixelType::Int565 => "INT_5_6_5",
            PixelType::Int4444 => "INT_4_4_4_4",
            PixelType::Int5551 => "INT_5_5_5_1",
            PixelType::Int8888 => "INT_8_8_8_8",
            PixelType::Int1010102 => "INT_10_10_10_2",
            PixelType::Dxt1 => "DXT1",
            PixelType::Dxt3 => "DXT3",
            PixelType::Dxt5 => "DXT5",
            PixelType::ThreeDc => "3DC",
        })
    }
}

/// Pixel-format descriptor: a channel layout plus a storage encoding.
///
/// Copied by value and immutable after construction. Invalid combinations
/// can be constructed; [`is_valid`](PixelDesc::is_valid) reports whether the
/// layout fits the encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelDesc {
    layout: PixelLayout,
    ty: PixelType,
}

impl Default for PixelDesc {
    fn default() -> Self {
        Self::new(PixelLayout::Rgba, PixelType::Int8)
    }
}

impl PixelDesc {
    /// Create a descriptor from a layout and a storage encoding.
    pub const fn new(layout: PixelLayout, ty: PixelType) -> Self {
        Self { layout, ty }
    }

    /// The channel layout.
    pub const fn layout(self) -> PixelLayout {
        self.layout
    }

    /// The storage encoding.
    pub const fn pixel_type(self) -> PixelType {
        self.ty
    }

    /// Whether the layout fits the encoding.
    ///
    /// Packed encodings up to 5-6-5 carry three channels and require RGB;
    /// wider packed encodings require RGBA. DXT1 stores RGB with an optional
    /// 1-bit alpha and accepts RGB or RGBA; the other compressed encodings
    /// require RGBA. Plain encodings are valid for any layout.
    pub const fn is_valid(self) -> bool {
        if self.is_packed() {
            match self.ty {
                PixelType::Int332 | PixelType::Int565 => {
                    matches!(self.layout, PixelLayout::Rgb)
                }
                _ => matches!(self.layout, PixelLayout::Rgba),
            }
        } else if self.is_compressed() {
            match self.ty {
                PixelType::Dxt1 => matches!(self.layout, PixelLayout::Rgb | PixelLayout::Rgba),
                _ => matches!(self.layout, PixelLayout::Rgba),
            }
        } else {
            true
        }
    }

    /// Whether the encoding is block-compressed.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self.ty,
            PixelType::Dxt1 | PixelType::Dxt3 | PixelType::Dxt5 | PixelType::ThreeDc
        )
    }

    /// Whether the encoding packs all channels into one machine word.
    pub const fn is_packed(self) -> bool {
        matches!(
            self.ty,
            PixelType::Int332
                | PixelType::Int565
                | PixelType::Int4444
                | PixelType::Int5551
                | PixelType::Int8888
                | PixelType::Int1010102
        )
    }

    /// Whether the encoding stores one addressable value per channel.
    pub const fn is_plain(self) -> bool {
        matches!(
            self.ty,
            PixelType::Int8
                | PixelType::Int16
                | PixelType::Int32
                | PixelType::Float16
                | PixelType::Float32
        )
    }

    /// Whether channels are floating point.
    pub const fn is_float(self) -> bool {
        matches!(self.ty, PixelType::Float16 | PixelType::Float32)
    }

    /// Number of channels in the layout.
    pub const fn num_channels(self) -> u32 {
        match self.layout {
            PixelLayout::Luminance
            | PixelLayout::R
            | PixelLayout::G
            | PixelLayout::B
            | PixelLayout::A => 1,
            PixelLayout::LuminanceAlpha => 2,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Byte size of one channel value. 0 unless the encoding is plain.
    pub const fn bytes_per_channel(self) -> usize {
        match self.ty {
            PixelType::Int8 => 1,
            PixelType::Int16 => 2,
            PixelType::Int32 => 4,
            PixelType::Float16 => 2,
            PixelType::Float32 => 4,
            _ => 0,
        }
    }

    /// Byte size of one pixel. 0 for compressed encodings (use
    /// [`bytes_per_block`](PixelDesc::bytes_per_block) instead).
    pub const fn bytes_per_pixel(self) -> usize {
        if self.is_plain() {
            self.num_channels() as usize * self.bytes_per_channel()
        } else {
            match self.ty {
                PixelType::Int332 => 1,
                PixelType::Int565 | PixelType::Int4444 | PixelType::Int5551 => 2,
                PixelType::Int8888 | PixelType::Int1010102 => 4,
                _ => 0,
            }
        }
    }

    /// Byte size of one 4x4 compressed block. 0 for non-compressed encodings.
    pub const fn bytes_per_block(self) -> usize {
        match self.ty {
            PixelType::Dxt1 => 8,
            PixelType::Dxt3 | PixelType::Dxt5 | PixelType::ThreeDc => 16,
            _ => 0,
        }
    }

    /// Dimension `d` reduced by `level` halvings, floored at 1.
    ///
    /// A dimension that shifts to exactly 0 becomes 1; other values
    /// (including negatives) pass through shifted.
    pub const fn mipmapped_dim(self, d: i32, level: u32) -> i32 {
        let a = match d.checked_shr(level) {
            Some(a) => a,
            None => 0,
        };
        if a == 0 { 1 } else { a }
    }

    /// Number of mip levels below the base that reduce `max(w, h, d)` to 1.
    pub const fn max_mipmaps(self, w: i32, h: i32, d: i32) -> i32 {
        let mut max = if w > h {
            if w > d { w } else { d }
        } else if h > d {
            h
        } else {
            d
        };
        let mut i = 0;
        while max > 0 {
            max >>= 1;
            i += 1;
        }
        i -= 1;
        if i <= 0 { 0 } else { i }
    }

    /// Total pixel count over `num_mips` levels starting at `first_mip`.
    ///
    /// `num_mips <= 0` walks until the chain collapses. `d <= 0` marks a cube
    /// map: the walk runs with depth 1 and the result is multiplied by 6.
    pub const fn num_pixels(self, w: i32, h: i32, d: i32, first_mip: u32, num_mips: i32) -> u64 {
        let cube = d <= 0;
        let d = if cube { 0 } else { d };
        let mut w = self.mipmapped_dim(w, first_mip);
        let mut h = self.mipmapped_dim(h, first_mip);
        let mut d = self.mipmapped_dim(d, first_mip);
        // 1024 iterations cover any chain a 32-bit dimension can produce.
        let mut remaining = if num_mips <= 0 { 1024 } else { num_mips };
        let mut size: u64 = 0;
        while remaining != 0 {
            size += w as u64 * h as u64 * d as u64;
            w >>= 1;
            h >>= 1;
            d >>= 1;
            if w + h + d == 0 {
                break;
            }
            if w == 0 {
                w = 1;
            }
            if h == 0 {
                h = 1;
            }
            if d == 0 {
                d = 1;
            }
            remaining -= 1;
        }
        if cube { 6 * size } else { size }
    }

    /// Total 4x4-block count over `num_mips` levels starting at `first_mip`.
    ///
    /// Blocks tile in two dimensions only; depth is forced to 1. `d <= 0`
    /// marks a cube map and multiplies the result by 6.
    pub const fn num_blocks(self, w: i32, h: i32, d: i32, first_mip: u32, num_mips: i32) -> u64 {
        let cube = d <= 0;
        let d = if cube { 0 } else { 1 };
        let mut w = self.mipmapped_dim(w, first_mip);
        let mut h = self.mipmapped_dim(h, first_mip);
        let mut d = self.mipmapped_dim(d, first_mip);
        let mut remaining = if num_mips <= 0 { 1024 } else { num_mips };
        let mut size: u64 = 0;
        while remaining != 0 {
            size += ((w + 3) >> 2) as u64 * ((h + 3) >> 2) as u64 * d as u64;
            w >>= 1;
            h >>= 1;
            d >>= 1;
            if w + h + d == 0 {
                break;
            }
            if w == 0 {
                w = 1;
            }
            if h == 0 {
                h = 1;
            }
            if d == 0 {
                d = 1;
            }
            remaining -= 1;
        }
        if cube { 6 * size } else { size }
    }

    /// Byte size of `num_mips` levels starting at `first_mip`.
    ///
    /// Counts blocks for compressed encodings and pixels otherwise.
    pub const fn bytes_size_for(
        self,
        w: i32,
        h: i32,
        d: i32,
        first_mip: u32,
        num_mips: i32,
    ) -> usize {
        if self.is_compressed() {
            (self.num_blocks(w, h, d, first_mip, num_mips) * self.bytes_per_block() as u64) as usize
        } else {
            (self.num_pixels(w, h, d, first_mip, num_mips) * self.bytes_per_pixel() as u64) as usize
        }
    }
}

impl core::fmt::Display for PixelDesc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.layout, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_mutually_exclusive() {
        for t in 0..=14u8 {
            let desc = PixelDesc::new(PixelLayout::Rgba, PixelType::from_wire(t).unwrap());
            let classes =
                desc.is_plain() as u8 + desc.is_packed() as u8 + desc.is_compressed() as u8;
            assert_eq!(classes, 1, "{desc} must be exactly one class");
        }
    }

    #[test]
    fn float_classification() {
        assert!(PixelDesc::new(PixelLayout::Rgb, PixelType::Float16).is_float());
        assert!(PixelDesc::new(PixelLayout::Rgb, PixelType::Float32).is_float());
        assert!(!PixelDesc::new(PixelLayout::Rgb, PixelType::Int8).is_float());
        assert!(!PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt5).is_float());
    }

    #[test]
    fn packed_validity() {
        // Three-channel packed encodings require RGB.
        assert!(PixelDesc::new(PixelLayout::Rgb, PixelType::Int332).is_valid());
        assert!(PixelDesc::new(PixelLayout::Rgb, PixelType::Int565).is_valid());
        assert!(!PixelDesc::new(PixelLayout::Rgba, PixelType::Int565).is_valid());
        // Wider packed encodings require RGBA.
        assert!(PixelDesc::new(PixelLayout::Rgba, PixelType::Int4444).is_valid());
        assert!(PixelDesc::new(PixelLayout::Rgba, PixelType::Int1010102).is_valid());
        assert!(!PixelDesc::new(PixelLayout::Rgb, PixelType::Int8888).is_valid());
        assert!(!PixelDesc::new(PixelLayout::Luminance, PixelType::Int5551).is_valid());
    }

    #[test]
    fn compressed_validity() {
        assert!(PixelDesc::new(PixelLayout::Rgb, PixelType::Dxt1).is_valid());
        assert!(PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt1).is_valid());
        assert!(!PixelDesc::new(PixelLayout::Luminance, PixelType::Dxt1).is_valid());
        assert!(PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt3).is_valid());
        assert!(!PixelDesc::new(PixelLayout::Rgb, PixelType::Dxt5).is_valid());
        assert!(!PixelDesc::new(PixelLayout::Rgb, PixelType::ThreeDc).is_valid());
    }

    #[test]
    fn plain_always_valid() {
        for l in 0..=7u8 {
            let layout = PixelLayout::from_wire(l).unwrap();
            assert!(PixelDesc::new(layout, PixelType::Int16).is_valid());
            assert!(PixelDesc::new(layout, PixelType::Float32).is_valid());
        }
    }

    #[test]
    fn channel_counts() {
        assert_eq!(
            PixelDesc::new(PixelLayout::Luminance, PixelType::Int8).num_channels(),
            1
        );
        assert_eq!(PixelDesc::new(PixelLayout::A, PixelType::Int8).num_channels(), 1);
        assert_eq!(
            PixelDesc::new(PixelLayout::LuminanceAlpha, PixelType::Int8).num_channels(),
            2
        );
        assert_eq!(PixelDesc::new(PixelLayout::Rgb, PixelType::Int8).num_channels(), 3);
        assert_eq!(PixelDesc::new(PixelLayout::Rgba, PixelType::Int8).num_channels(), 4);
    }

    #[test]
    fn bytes_per_channel() {
        let bytes = |t| PixelDesc::new(PixelLayout::Rgba, t).bytes_per_channel();
        assert_eq!(bytes(PixelType::Int8), 1);
        assert_eq!(bytes(PixelType::Int16), 2);
        assert_eq!(bytes(PixelType::Int32), 4);
        assert_eq!(bytes(PixelType::Float16), 2);
        assert_eq!(bytes(PixelType::Float32), 4);
        // Not applicable outside plain encodings.
        assert_eq!(bytes(PixelType::Int565), 0);
        assert_eq!(bytes(PixelType::Dxt1), 0);
    }

    #[test]
    fn bytes_per_pixel() {
        assert_eq!(
            PixelDesc::new(PixelLayout::Rgb, PixelType::Float32).bytes_per_pixel(),
            12
        );
        assert_eq!(PixelDesc::new(PixelLayout::Rgba, PixelType::Int16).bytes_per_pixel(), 8);
        assert_eq!(PixelDesc::new(PixelLayout::Rgb, PixelType::Int332).bytes_per_pixel(), 1);
        assert_eq!(PixelDesc::new(PixelLayout::Rgb, PixelType::Int565).bytes_per_pixel(), 2);
        assert_eq!(
            PixelDesc::new(PixelLayout::Rgba, PixelType::Int4444).bytes_per_pixel(),
            2
        );
        assert_eq!(
            PixelDesc::new(PixelLayout::Rgba, PixelType::Int5551).bytes_per_pixel(),
            2
        );
        assert_eq!(
            PixelDesc::new(PixelLayout::Rgba, PixelType::Int8888).bytes_per_pixel(),
            4
        );
        assert_eq!(
            PixelDesc::new(PixelLayout::Rgba, PixelType::Int1010102).bytes_per_pixel(),
            4
        );
        // Undefined for compressed encodings.
        assert_eq!(PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt5).bytes_per_pixel(), 0);
    }

    #[test]
    fn bytes_per_block() {
        assert_eq!(PixelDesc::new(PixelLayout::Rgb, PixelType::Dxt1).bytes_per_block(), 8);
        assert_eq!(PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt3).bytes_per_block(), 16);
        assert_eq!(PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt5).bytes_per_block(), 16);
        assert_eq!(
            PixelDesc::new(PixelLayout::Rgba, PixelType::ThreeDc).bytes_per_block(),
            16
        );
        assert_eq!(PixelDesc::new(PixelLayout::Rgba, PixelType::Int8).bytes_per_block(), 0);
    }

    #[test]
    fn mipmapped_dim_floors_at_one() {
        let desc = PixelDesc::default();
        assert_eq!(desc.mipmapped_dim(1024, 0), 1024);
        assert_eq!(desc.mipmapped_dim(1024, 3), 128);
        assert_eq!(desc.mipmapped_dim(5, 1), 2);
        assert_eq!(desc.mipmapped_dim(5, 10), 1);
        assert_eq!(desc.mipmapped_dim(1, 4), 1);
        assert_eq!(desc.mipmapped_dim(0, 2), 1);
    }

    #[test]
    fn max_mipmaps_counts_halvings() {
        let desc = PixelDesc::default();
        assert_eq!(desc.max_mipmaps(1024, 1024, 1024), 10);
        assert_eq!(desc.max_mipmaps(512, 512, 1), 9);
        assert_eq!(desc.max_mipmaps(256, 16, 1), 8);
        assert_eq!(desc.max_mipmaps(4, 4, 1), 2);
        assert_eq!(desc.max_mipmaps(1, 1, 1), 0);
        assert_eq!(desc.max_mipmaps(0, 0, 0), 0);
    }

    #[test]
    fn num_pixels_six_levels() {
        let desc = PixelDesc::new(PixelLayout::Rgba, PixelType::Float32);
        // 512^2 + 256^2 + 128^2 + 64^2 + 32^2 + 16^2
        assert_eq!(desc.num_pixels(512, 512, 1, 0, 6), 349_440);
    }

    #[test]
    fn num_pixels_walks_to_collapse() {
        let desc = PixelDesc::default();
        // 4x4 -> 2x2 -> 1x1, then the chain collapses.
        assert_eq!(desc.num_pixels(4, 4, 1, 0, -1), 16 + 4 + 1);
        // Starting below the base walks the remaining chain.
        assert_eq!(desc.num_pixels(4, 4, 1, 1, -1), 4 + 1);
        // num_mips == 0 also means unbounded.
        assert_eq!(desc.num_pixels(4, 4, 1, 0, 0), 21);
    }

    #[test]
    fn num_pixels_cube_multiplies_by_six() {
        let desc = PixelDesc::default();
        assert_eq!(desc.num_pixels(4, 4, 0, 0, 1), 6 * 16);
        assert_eq!(desc.num_pixels(4, 4, 0, 0, -1), 6 * 21);
    }

    #[test]
    fn num_pixels_3d_halves_depth() {
        let desc = PixelDesc::default();
        // 4x4x4 -> 2x2x2 -> 1x1x1
        assert_eq!(desc.num_pixels(4, 4, 4, 0, -1), 64 + 8 + 1);
    }

    #[test]
    fn num_blocks_rounds_up_to_block_grid() {
        let desc = PixelDesc::new(PixelLayout::Rgba, PixelType::Dxt5);
        assert_eq!(desc.num_blocks(4, 4, 1, 0, 1), 1);
        assert_eq!(desc.num_blocks(5, 5, 1, 0, 1), 4);
        assert_eq!(desc.num_blocks(8, 4, 1, 0, 1), 2);
        // Depth never tiles into blocks.
        assert_eq!(desc.num_blocks(8, 8, 4, 0, 1), 4);
        // Cube maps count all six faces.
        assert_eq!(desc.num_blocks(8, 8, 0, 0, 1), 6 * 4);
    }

    #[test]
    fn bytes_size_for_picks_pixels_or_blocks() {
        let plain = PixelDesc::new(PixelLayout::Rgba, PixelType::Float32);
        assert_eq!(plain.bytes_size_for(512, 512, 1, 0, 6), 349_440 * 16);

        let dxt1 = PixelDesc::new(PixelLayout::Rgb, PixelType::Dxt1);
        assert_eq!(dxt1.bytes_size_for(8, 8, 1, 0, 1), 4 * 8);

        let packed = PixelDesc::new(PixelLayout::Rgb, PixelType::Int565);
        assert_eq!(packed.bytes_size_for(16, 16, 1, 0, 1), 256 * 2);
    }

    #[test]
    fn wire_values_are_ordinal() {
        assert_eq!(PixelLayout::Luminance.wire_value(), 0);
        assert_eq!(PixelLayout::Rgba.wire_value(), 7);
        assert_eq!(PixelType::Int8.wire_value(), 0);
        assert_eq!(PixelType::Int332.wire_value(), 5);
        assert_eq!(PixelType::Dxt1.wire_value(), 11);
        assert_eq!(PixelType::ThreeDc.wire_value(), 14);
        for v in 0..=7u8 {
            assert_eq!(PixelLayout::from_wire(v).unwrap().wire_value(), v);
        }
        for v in 0..=14u8 {
            assert_eq!(PixelType::from_wire(v).unwrap().wire_value(), v);
        }
        assert_eq!(PixelLayout::from_wire(8), None);
        assert_eq!(PixelType::from_wire(15), None);
    }

    #[test]
    fn default_is_rgba_int8() {
        let desc = PixelDesc::default();
        assert_eq!(desc.layout(), PixelLayout::Rgba);
        assert_eq!(desc.pixel_type(), PixelType::Int8);
    }

    #[test]
    fn display_names() {
        assert_eq!(
            alloc::format!(
                "{}",
                PixelDesc::new(PixelLayout::LuminanceAlpha, PixelType::Float16)
            ),
            "LUMINANCE_ALPHA/FLOAT_16"
        );
        assert_eq!(alloc::format!("{}", PixelType::ThreeDc), "3DC");
    }
}
