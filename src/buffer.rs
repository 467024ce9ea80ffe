//! Owned, aligned pixel storage for one mip level.

use alloc::vec::Vec;

use bytemuck::Pod;

use crate::error::Error;

/// Backing words of a [`PixelBuffer`].
///
/// Levels are stored in 8-byte words so reinterpreting the bytes as u16/u32/
/// f32 channel slices never trips over alignment.
type Word = u64;

const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Owned byte buffer for one mip level, aligned for any plain channel type.
///
/// Allocation is fallible: running out of memory surfaces as
/// [`Error::Allocation`] instead of aborting the process.
pub(crate) struct PixelBuffer {
    words: Vec<Word>,
    len: usize,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer of `bytes` bytes.
    pub(crate) fn allocate(bytes: usize) -> Result<Self, Error> {
        let n_words = bytes.div_ceil(WORD_BYTES);
        let mut words = Vec::new();
        words
            .try_reserve_exact(n_words)
            .map_err(|_| Error::Allocation { bytes })?;
        words.resize(n_words, 0);
        Ok(Self { words, len: bytes })
    }

    /// Byte length of the buffer.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The buffer contents as bytes.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(&self.words)[..self.len]
    }

    /// The buffer contents as mutable bytes.
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(&mut self.words)[..self.len]
    }

    /// The buffer contents as a channel slice.
    ///
    /// The byte length must be a multiple of `size_of::<T>()`; the level
    /// sizing arithmetic guarantees that for every plain encoding.
    pub(crate) fn as_channels<T: Pod>(&self) -> &[T] {
        bytemuck::cast_slice(self.as_bytes())
    }

    /// The buffer contents as a mutable channel slice.
    pub(crate) fn as_channels_mut<T: Pod>(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.as_bytes_mut())
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PixelBuffer({} bytes)", self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_zeroed() {
        let buf = PixelBuffer::allocate(10).unwrap();
        assert_eq!(buf.len(), 10);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn odd_byte_lengths_round_trip() {
        let mut buf = PixelBuffer::allocate(13).unwrap();
        assert_eq!(buf.as_bytes().len(), 13);
        buf.as_bytes_mut()[12] = 0xAB;
        assert_eq!(buf.as_bytes()[12], 0xAB);
    }

    #[test]
    fn typed_views_share_storage() {
        let mut buf = PixelBuffer::allocate(8).unwrap();
        buf.as_channels_mut::<u16>().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(buf.as_channels::<u16>(), &[1, 2, 3, 4]);
        assert_eq!(buf.as_bytes()[0..2], 1u16.to_ne_bytes());
    }

    #[test]
    fn f32_view_is_aligned() {
        let mut buf = PixelBuffer::allocate(12).unwrap();
        let floats = buf.as_channels_mut::<f32>();
        floats[2] = 0.5;
        assert_eq!(buf.as_channels::<f32>()[2], 0.5);
    }

    #[test]
    fn empty_buffer() {
        let buf = PixelBuffer::allocate(0).unwrap();
        assert_eq!(buf.len(), 0);
        assert!(buf.as_bytes().is_empty());
    }
}
