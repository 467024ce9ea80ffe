//! Crate error type.

use alloc::string::String;

/// Errors reported by image construction, resampling and registry dispatch.
///
/// Unsupported-configuration requests (scaling a compressed image, building
/// mips for a 3D image, ...) are not errors: they log a warning and leave the
/// image untouched. Errors are reserved for allocation failure and for
/// read/write dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Pixel memory of the given size could not be allocated.
    #[error("failed to allocate {bytes} bytes of pixel memory")]
    Allocation {
        /// Requested allocation size.
        bytes: usize,
    },

    /// No reader is registered for the path's extension.
    #[error("no reader registered for extension `{extension}`")]
    NoReader {
        /// Lowercased extension that missed the lookup.
        extension: String,
    },

    /// No writer is registered for the path's extension.
    #[error("no writer registered for extension `{extension}`")]
    NoWriter {
        /// Lowercased extension that missed the lookup.
        extension: String,
    },

    /// The dispatched codec failed to read the file.
    #[error("codec failed to read `{path}`")]
    Read {
        /// Path handed to the codec.
        path: String,
    },

    /// The dispatched codec failed to write the file.
    #[error("codec failed to write `{path}`")]
    Write {
        /// Path handed to the codec.
        path: String,
    },
}
