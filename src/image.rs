//! Mip-pyramid image buffers.
//!
//! An [`Image`] owns the pixel memory of one image: one face for flat and 3D
//! images, six for cube maps, each face an ordered chain of mip levels from
//! the base resolution down. Every level is allocated up front at
//! construction; [`Image::clear_mipmaps`] drops the chain back to the base
//! and [`Image::build_mipmaps`] regenerates it by 2x2 reduction.

use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::channel::Channel;
use crate::error::Error;
use crate::format::PixelDesc;

/// Cube map faces, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face (index 0).
    XPlus = 0,
    /// +Y face.
    YPlus = 1,
    /// +Z face.
    ZPlus = 2,
    /// -X face.
    XMinus = 3,
    /// -Y face.
    YMinus = 4,
    /// -Z face.
    ZMinus = 5,
}

impl CubeFace {
    /// Number of faces in a cube map.
    pub const COUNT: usize = 6;

    /// Face index into [`Image`] accessors.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One mip level: its buffer and its dimensions.
#[derive(Debug)]
pub(crate) struct MipLevel {
    pub(crate) buffer: PixelBuffer,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) depth: i32,
}

/// A face's mip chain, base level first.
pub(crate) type Face = Vec<MipLevel>;

/// An owned mip-pyramid pixel buffer.
///
/// `depth <= 0` at construction selects a cube map (six faces), `depth == 1`
/// a 1D/2D image and `depth > 1` a 3D image. The image is the exclusive
/// owner of its pixel memory.
pub struct Image {
    pub(crate) desc: PixelDesc,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) depth: i32,
    pub(crate) num_mipmaps: i32,
    pub(crate) faces: Vec<Face>,
}

impl Image {
    /// Allocate an image with every requested mip level on every face.
    ///
    /// `num_mipmaps` counts levels below the base: 0 allocates the base only,
    /// a negative count builds down to 1x1x1, and a positive count is clipped
    /// to the format's maximum for the given dimensions. Level `i` is sized
    /// by the descriptor's byte accounting for the base dimensions halved `i`
    /// times. Fails with [`Error::Allocation`] if any level cannot be
    /// allocated; nothing is leaked in that case.
    pub fn new(
        desc: PixelDesc,
        width: i32,
        height: i32,
        depth: i32,
        num_mipmaps: i32,
    ) -> Result<Self, Error> {
        let max_mipmaps = desc.max_mipmaps(width, height, depth);
        let num_mipmaps = if num_mipmaps < 0 || num_mipmaps > max_mipmaps {
            max_mipmaps
        } else {
            num_mipmaps
        };

        let face_count = if depth <= 0 { CubeFace::COUNT } else { 1 };
        let mut faces: Vec<Face> = Vec::new();
        for _ in 0..face_count {
            faces.push(Vec::new());
        }

        for level in 0..=num_mipmaps as u32 {
            let bytes = desc.bytes_size_for(width, height, depth, level, 1);
            let level_width = desc.mipmapped_dim(width, level);
            let level_height = desc.mipmapped_dim(height, level);
            let level_depth = desc.mipmapped_dim(depth, level);
            log::trace!(
                "mip level {level}: {level_width}x{level_height}x{level_depth}, {bytes} bytes"
            );
            for face in faces.iter_mut() {
                face.push(MipLevel {
                    buffer: PixelBuffer::allocate(bytes)?,
                    width: level_width,
                    height: level_height,
                    depth: level_depth,
                });
            }
        }

        Ok(Self {
            desc,
            width,
            height,
            depth,
            num_mipmaps,
            faces,
        })
    }

    /// The pixel-format descriptor.
    pub fn desc(&self) -> PixelDesc {
        self.desc
    }

    /// Number of mip levels below the base.
    pub fn num_mipmaps(&self) -> i32 {
        self.num_mipmaps
    }

    /// Number of faces (6 for cube maps, 1 otherwise).
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    fn level(&self, mip_level: usize, face: usize) -> Option<&MipLevel> {
        self.faces.get(face).and_then(|f| f.get(mip_level))
    }

    /// Width of a mip level, or 0 when `mip_level`/`face` is out of range.
    pub fn width(&self, mip_level: usize, face: usize) -> i32 {
        self.level(mip_level, face).map_or(0, |l| l.width)
    }

    /// Height of a mip level, or 0 when `mip_level`/`face` is out of range.
    pub fn height(&self, mip_level: usize, face: usize) -> i32 {
        self.level(mip_level, face).map_or(0, |l| l.height)
    }

    /// Depth of a mip level, or 0 when `mip_level`/`face` is out of range.
    pub fn depth(&self, mip_level: usize, face: usize) -> i32 {
        self.level(mip_level, face).map_or(0, |l| l.depth)
    }

    /// Pixel bytes of a mip level, or `None` when out of range.
    pub fn pixels(&self, mip_level: usize, face: usize) -> Option<&[u8]> {
        self.level(mip_level, face).map(|l| l.buffer.as_bytes())
    }

    /// Mutable pixel bytes of a mip level, or `None` when out of range.
    pub fn pixels_mut(&mut self, mip_level: usize, face: usize) -> Option<&mut [u8]> {
        self.faces
            .get_mut(face)
            .and_then(|f| f.get_mut(mip_level))
            .map(|l| l.buffer.as_bytes_mut())
    }

    /// Whether the base level is one-dimensional.
    pub fn is_1d(&self) -> bool {
        self.height == 1 && self.depth == 1
    }

    /// Whether the base level is two-dimensional.
    pub fn is_2d(&self) -> bool {
        self.height > 1 && self.depth == 1
    }

    /// Whether the image is a 3D volume.
    pub fn is_3d(&self) -> bool {
        self.depth > 1
    }

    /// Whether the image is a cube map.
    pub fn is_cube(&self) -> bool {
        self.depth <= 0
    }

    /// Drop every mip level above the base on every face.
    pub fn clear_mipmaps(&mut self) {
        log::trace!("clear image mipmaps");
        for face in &mut self.faces {
            face.truncate(1);
        }
        self.num_mipmaps = 0;
    }

    /// Append mip levels by downsampling from the base.
    ///
    /// A no-op if the image already has mips or `num_mipmaps == 0`. Packed,
    /// compressed and half-float formats as well as 3D images are not
    /// supported for generation: those requests log a warning and leave the
    /// image unchanged. A negative count builds the full chain; a positive
    /// count is clipped to the format's maximum.
    ///
    /// Each new pixel is the nested pairwise average of its 2x2 source quad:
    /// `avg(avg(c0, c1), avg(c2, c3))`, truncating on each step for integer
    /// channels. New levels are sized with depth 1.
    pub fn build_mipmaps(&mut self, num_mipmaps: i32) -> Result<(), Error> {
        if self.num_mipmaps > 0 || num_mipmaps == 0 {
            return Ok(());
        }

        if self.desc.is_packed() || self.desc.is_compressed() {
            log::warn!("cannot build mipmaps for a packed or compressed pixel format");
            return Ok(());
        }

        if self.desc.is_float() && self.desc.bytes_per_channel() == 2 {
            log::warn!("cannot build mipmaps for a half-float pixel format");
            return Ok(());
        }

        if self.is_3d() {
            log::warn!("cannot build mipmaps for a 3D image");
            return Ok(());
        }

        let max_mipmaps = self.desc.max_mipmaps(self.width, self.height, self.depth);
        let num_mipmaps = if num_mipmaps < 0 {
            max_mipmaps
        } else {
            num_mipmaps.min(max_mipmaps)
        };

        if self.desc.is_float() {
            self.build_mip_levels::<f32>(num_mipmaps)?;
        } else {
            match self.desc.bytes_per_channel() {
                1 => self.build_mip_levels::<u8>(num_mipmaps)?,
                2 => self.build_mip_levels::<u16>(num_mipmaps)?,
                _ => self.build_mip_levels::<u32>(num_mipmaps)?,
            }
        }

        self.num_mipmaps = num_mipmaps;
        Ok(())
    }

    fn build_mip_levels<T: Channel>(&mut self, num_mipmaps: i32) -> Result<(), Error> {
        let desc = self.desc;
        let (width, height) = (self.width, self.height);
        let channels = desc.num_channels() as usize;

        for face in &mut self.faces {
            for level in 1..=num_mipmaps as u32 {
                let bytes = desc.bytes_size_for(width, height, 1, level, 1);
                let mut next = MipLevel {
                    buffer: PixelBuffer::allocate(bytes)?,
                    width: desc.mipmapped_dim(width, level),
                    height: desc.mipmapped_dim(height, level),
                    depth: 1,
                };
                log::trace!(
                    "mip level {level}: {}x{}, {bytes} bytes",
                    next.width,
                    next.height
                );
                let Some(prev) = face.last() else {
                    break;
                };
                downsample::<T>(prev, &mut next, channels);
                face.push(next);
            }
        }

        Ok(())
    }
}

impl core::fmt::Debug for Image {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Image({} {}x{}x{}, {} mips, {} faces)",
            self.desc,
            self.width,
            self.height,
            self.depth,
            self.num_mipmaps,
            self.faces.len()
        )
    }
}

/// Halve `src` into `dst` with the nested pairwise quad average.
///
/// Quad samples past the edge clamp to the last column/row once a source
/// dimension has collapsed to 1.
fn downsample<T: Channel>(src: &MipLevel, dst: &mut MipLevel, channels: usize) {
    let src_w = src.width as usize;
    let src_h = src.height as usize;
    let dst_w = dst.width as usize;
    let dst_h = dst.height as usize;
    let row = src_w * channels;

    let s = src.buffer.as_channels::<T>();
    let d = dst.buffer.as_channels_mut::<T>();

    for y in 0..dst_h {
        let y0 = 2 * y;
        let y1 = (2 * y + 1).min(src_h - 1);
        for x in 0..dst_w {
            let x0 = 2 * x;
            let x1 = (2 * x + 1).min(src_w - 1);
            let p0 = y0 * row + x0 * channels;
            let p1 = y0 * row + x1 * channels;
            let p2 = y1 * row + x0 * channels;
            let p3 = y1 * row + x1 * channels;
            let out = (y * dst_w + x) * channels;
            for c in 0..channels {
                let top = T::avg(s[p0 + c], s[p1 + c]);
                let bottom = T::avg(s[p2 + c], s[p3 + c]);
                d[out + c] = T::avg(top, bottom);
            }
        }
    }
}
