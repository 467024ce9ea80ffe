//! Separable image rescaling.
//!
//! [`Image::scale`] resamples every face's base level to a new size with two
//! one-dimensional passes over a per-axis weight table, then rebuilds the mip
//! pyramid. The four reconstruction kernels form a closed set on
//! [`ScaleMethod`]; each exposes its support (half-width) and its weight
//! function, and minification widens the support by the inverse scale so the
//! kernel doubles as a low-pass filter.

use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::channel::Channel;
use crate::error::Error;
use crate::image::Image;

/// Reconstruction filter for [`Image::scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleMethod {
    /// Box kernel (support 0.5): nearest-sample reconstruction.
    Nearest,
    /// Triangle kernel (support 1.0): bilinear reconstruction.
    Linear,
    /// Mitchell-Netravali cubic with blur = ringing = 1/3 (support 2.0).
    Cubic,
    /// Lanczos windowed sinc (support 3.0).
    Lanczos,
}

impl ScaleMethod {
    /// Kernel half-width, in source pixels.
    pub(crate) fn support(self) -> f64 {
        match self {
            ScaleMethod::Nearest => 0.5,
            ScaleMethod::Linear => 1.0,
            ScaleMethod::Cubic => 2.0,
            ScaleMethod::Lanczos => 3.0,
        }
    }

    /// Kernel weight at offset `pos` from the reconstruction center.
    pub(crate) fn weight(self, pos: f64) -> f64 {
        match self {
            ScaleMethod::Nearest => {
                if libm::fabs(pos) < 0.5 { 1.0 } else { 0.0 }
            }
            ScaleMethod::Linear => {
                let pos = libm::fabs(pos);
                if pos < 1.0 { 1.0 - pos } else { 0.0 }
            }
            ScaleMethod::Cubic => mitchell(pos),
            ScaleMethod::Lanczos => lanczos3(pos),
        }
    }
}

/// Mitchell-Netravali two-piece cubic, B (blur) = C (ringing) = 1/3.
fn mitchell(pos: f64) -> f64 {
    const B: f64 = 1.0 / 3.0;
    const C: f64 = 1.0 / 3.0;
    const S: f64 = 1.0 / 6.0;
    const P0: f64 = (6.0 - 2.0 * B) * S;
    const P2: f64 = (-18.0 + 12.0 * B + 6.0 * C) * S;
    const P3: f64 = (12.0 - 9.0 * B - 6.0 * C) * S;
    const Q0: f64 = (8.0 * B + 24.0 * C) * S;
    const Q1: f64 = (-12.0 * B - 48.0 * C) * S;
    const Q2: f64 = (6.0 * B + 30.0 * C) * S;
    const Q3: f64 = (-B - 6.0 * C) * S;

    let pos = libm::fabs(pos);
    if pos < 1.0 {
        P0 + pos * pos * (P2 + pos * P3)
    } else if pos < 2.0 {
        Q0 + pos * (Q1 + pos * (Q2 + pos * Q3))
    } else {
        0.0
    }
}

/// Lanczos windowed sinc with support 3: `3 sin(pi x) sin(pi x / 3) / (pi x)^2`.
fn lanczos3(pos: f64) -> f64 {
    const SUPPORT: f64 = 3.0;
    if (-SUPPORT..=SUPPORT).contains(&pos) {
        if libm::fabs(pos) < 1e-6 {
            1.0
        } else {
            let p = pos * core::f64::consts::PI;
            SUPPORT * libm::sin(p) * libm::sin(p / SUPPORT) / (p * p)
        }
    } else {
        0.0
    }
}

struct PixelWeights {
    weights: Vec<f64>,
    start: usize,
    length: usize,
}

/// Per-axis resampling weights: one window of contributions per destination
/// index, normalized to sum to 1 (barring degenerate windows).
pub(crate) struct FilterWeights {
    table: Vec<PixelWeights>,
}

impl FilterWeights {
    pub(crate) fn new(method: ScaleMethod, src_size: usize, dst_size: usize) -> Self {
        let scale = dst_size as f64 / src_size as f64;
        let mut width = method.support();
        let mut fscale = 1.0;

        if scale < 1.0 {
            // Minification: widen the kernel and squeeze its argument, a box
            // convolution that low-passes before decimating.
            width /= scale;
            fscale = scale;
        }

        let iscale = 1.0 / scale;
        let window_size = 2 * libm::ceil(width) as usize + 1;

        let mut table = Vec::with_capacity(dst_size);
        for i in 0..dst_size {
            let src_x = (i as f64 + 0.5) * iscale;
            let start = libm::floor(src_x - width).max(0.0) as usize;
            let stop = libm::ceil(src_x + width).min(src_size as f64 - 1.0) as usize;
            let length = window_size.min(stop - start);

            let mut pw = PixelWeights {
                weights: alloc::vec![0.0; window_size],
                start,
                length,
            };

            let mut total = 0.0;
            for j in 0..length {
                let filter_pos = (start + j) as f64 + 0.5 - src_x;
                let w = method.weight(filter_pos * fscale);
                pw.weights[j] = w;
                total += w;
            }

            if total > 0.0 && total != 1.0 {
                let norm = 1.0 / total;
                for w in pw.weights.iter_mut().take(pw.length) {
                    *w *= norm;
                }
                // Trim weights that normalized to nothing off the tail.
                let mut j = pw.length - 1;
                while libm::fabs(pw.weights[j]) < 1e-9 {
                    pw.length -= 1;
                    if pw.length == 0 {
                        break;
                    }
                    j -= 1;
                }
            }

            table.push(pw);
        }

        Self { table }
    }

    /// First contributing source index for destination index `dst`.
    pub(crate) fn first_pixel(&self, dst: usize) -> usize {
        self.table[dst].start
    }

    /// Number of contributing source pixels for destination index `dst`.
    pub(crate) fn num_pixels(&self, dst: usize) -> usize {
        self.table[dst].length
    }

    /// Weight of the `idx`-th contribution for destination index `dst`.
    pub(crate) fn weight(&self, dst: usize, idx: usize) -> f64 {
        self.table[dst].weights[idx]
    }
}

/// Resample every row of `src` to `new_width` columns.
fn scale_horizontal<T: Channel>(
    src: &PixelBuffer,
    width: usize,
    height: usize,
    channels: usize,
    method: ScaleMethod,
    new_width: usize,
) -> Result<PixelBuffer, Error> {
    let weights = FilterWeights::new(method, width, new_width);

    let mut dst = PixelBuffer::allocate(new_width * height * channels * size_of::<T>())?;
    let s = src.as_channels::<T>();
    let d = dst.as_channels_mut::<T>();
    let src_row = width * channels;
    let dst_row = new_width * channels;

    for y in 0..height {
        let srow = y * src_row;
        let drow = y * dst_row;
        for x in 0..new_width {
            let out = drow + x * channels;
            for c in 0..channels {
                d[out + c] = T::ZERO;
            }
            let first = weights.first_pixel(x);
            for k in 0..weights.num_pixels(x) {
                let w = weights.weight(x, k);
                let pix = srow + (first + k) * channels;
                for c in 0..channels {
                    d[out + c] = T::accumulate(d[out + c], w, s[pix + c]);
                }
            }
        }
    }

    Ok(dst)
}

/// Resample every column of `src` to `new_height` rows.
fn scale_vertical<T: Channel>(
    src: &PixelBuffer,
    width: usize,
    height: usize,
    channels: usize,
    method: ScaleMethod,
    new_height: usize,
) -> Result<PixelBuffer, Error> {
    let weights = FilterWeights::new(method, height, new_height);

    let mut dst = PixelBuffer::allocate(width * new_height * channels * size_of::<T>())?;
    let s = src.as_channels::<T>();
    let d = dst.as_channels_mut::<T>();
    let row = width * channels;

    for x in 0..width {
        let col = x * channels;
        for y in 0..new_height {
            let out = y * row + col;
            for c in 0..channels {
                d[out + c] = T::ZERO;
            }
            let first = weights.first_pixel(y);
            for k in 0..weights.num_pixels(y) {
                let w = weights.weight(y, k);
                let pix = (first + k) * row + col;
                for c in 0..channels {
                    d[out + c] = T::accumulate(d[out + c], w, s[pix + c]);
                }
            }
        }
    }

    Ok(dst)
}

impl Image {
    /// Resample the base level of every face to `new_width` x `new_height`.
    ///
    /// Packed, compressed and half-float formats as well as 3D images are not
    /// supported: those requests log a warning and leave the image unchanged,
    /// as do non-positive target dimensions. Otherwise the mip chain is
    /// cleared, each face's base level is resampled with two separable passes
    /// (the axis producing the smaller intermediate image goes first), the
    /// base dimensions are updated, and the previous number of mip levels is
    /// regenerated at the new resolution.
    pub fn scale(
        &mut self,
        new_width: i32,
        new_height: i32,
        method: ScaleMethod,
    ) -> Result<(), Error> {
        if self.desc.is_packed() || self.desc.is_compressed() {
            log::warn!("cannot scale a packed or compressed pixel format");
            return Ok(());
        }

        if self.desc.is_float() && self.desc.bytes_per_channel() == 2 {
            log::warn!("cannot scale a half-float pixel format");
            return Ok(());
        }

        if self.is_3d() {
            log::warn!("cannot scale a 3D image");
            return Ok(());
        }

        if new_width < 1 || new_height < 1 {
            log::warn!("cannot scale to {new_width}x{new_height}");
            return Ok(());
        }

        if self.desc.is_float() {
            self.scale_faces::<f32>(new_width, new_height, method)
        } else {
            match self.desc.bytes_per_channel() {
                1 => self.scale_faces::<u8>(new_width, new_height, method),
                2 => self.scale_faces::<u16>(new_width, new_height, method),
                _ => self.scale_faces::<u32>(new_width, new_height, method),
            }
        }
    }

    fn scale_faces<T: Channel>(
        &mut self,
        new_width: i32,
        new_height: i32,
        method: ScaleMethod,
    ) -> Result<(), Error> {
        let channels = self.desc.num_channels() as usize;
        let previous_mipmaps = self.num_mipmaps;
        self.clear_mipmaps();

        let (nw, nh) = (new_width as usize, new_height as usize);
        for face in &mut self.faces {
            if face.len() != 1 {
                continue;
            }
            let level = &mut face[0];
            let (w, h) = (level.width as usize, level.height as usize);

            let out = if nw * h < nh * w {
                let tmp = scale_horizontal::<T>(&level.buffer, w, h, channels, method, nw)?;
                scale_vertical::<T>(&tmp, nw, h, channels, method, nh)?
            } else {
                let tmp = scale_vertical::<T>(&level.buffer, w, h, channels, method, nh)?;
                scale_horizontal::<T>(&tmp, w, nh, channels, method, nw)?
            };

            level.buffer = out;
            level.width = new_width;
            level.height = new_height;
        }

        self.width = new_width;
        self.height = new_height;
        self.build_mipmaps(previous_mipmaps)
    }
}
