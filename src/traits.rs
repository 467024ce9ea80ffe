//! Codec plugin traits.
//!
//! [`Codec`] is the capability interface every image codec exposes to the
//! registry: the extensions it claims, whether it reads and/or writes, and
//! the two transfer operations. Failures stay inside the return values
//! (`None`/`false`); codecs never panic across this boundary.
//!
//! [`ModuleLoader`] is the injected module-loading capability: it enumerates
//! a plugin directory and binds one dynamic module to the [`Codec`]
//! interface. How modules are located and opened is platform business and
//! lives entirely behind this trait.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::image::Image;

/// The capability interface implemented by every codec plugin.
///
/// A codec declares one or more file extensions and serves read and/or
/// write requests for them. The registry claims one reader and one writer
/// slot per extension on a first-come basis, so a codec may end up serving
/// only part of what it declares.
pub trait Codec {
    /// Number of file extensions this codec declares.
    fn num_extensions(&self) -> usize;

    /// The extension at `index`, without the leading dot.
    ///
    /// Returns `None` for `index >= num_extensions()`.
    fn extension(&self, index: usize) -> Option<&str>;

    /// Whether this codec can decode files.
    fn can_read(&self) -> bool;

    /// Whether this codec can encode files.
    fn can_write(&self) -> bool;

    /// Decode the file at `path` into a freshly constructed [`Image`].
    ///
    /// Returns `None` on any failure.
    fn read_image(&self, path: &str) -> Option<Image>;

    /// Encode `image` to the file at `path`.
    ///
    /// Returns `false` on any failure.
    fn write_image(&self, image: &Image, path: &str) -> bool;
}

/// Injected capability that locates and loads codec plugin modules.
///
/// Implementations typically wrap the platform's dynamic-library machinery;
/// a test double can hand out in-process codecs instead.
pub trait ModuleLoader {
    /// List candidate plugin files in `directory`.
    ///
    /// The registry filters the candidates by the fixed plugin extension
    /// ([`PLUGIN_EXTENSION`](crate::PLUGIN_EXTENSION)); the loader is free to
    /// return every directory entry.
    fn enumerate(&self, directory: &str) -> Vec<String>;

    /// Load the module at `path` and bind it to the [`Codec`] interface.
    ///
    /// Returns `None` when the module cannot be opened or does not expose
    /// the capability interface.
    fn load(&self, path: &str) -> Option<Box<dyn Codec>>;
}
