//! Extension-based codec dispatch.
//!
//! A [`Registry`] maps file extensions (case-insensitively) to registered
//! codec plugins and routes read/write requests to them. It is an explicit
//! value, created, used and torn down by its owner, with the module-loading
//! capability injected at construction.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::Error;
use crate::image::Image;
use crate::traits::{Codec, ModuleLoader};

/// File extension that marks a loadable codec plugin module.
pub const PLUGIN_EXTENSION: &str = "ipl";

/// Handle to a registered codec, issued by [`Registry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodecId(u64);

/// Extension-to-codec dispatch table.
///
/// Per extension at most one reader and one writer are registered at any
/// time; a codec occupies only the slots it is first to claim. The registry
/// is not internally synchronized; callers that share one across threads
/// serialize access themselves.
pub struct Registry {
    readers: BTreeMap<String, CodecId>,
    writers: BTreeMap<String, CodecId>,
    codecs: Vec<(CodecId, Box<dyn Codec>)>,
    next_id: u64,
    loader: Option<Box<dyn ModuleLoader>>,
}

impl Registry {
    /// Create an empty registry without a module loader.
    ///
    /// [`load_plugins`](Registry::load_plugins) is inert on such a registry;
    /// codecs can still be registered directly.
    pub fn new() -> Self {
        Self {
            readers: BTreeMap::new(),
            writers: BTreeMap::new(),
            codecs: Vec::new(),
            next_id: 0,
            loader: None,
        }
    }

    /// Create an empty registry with an injected module loader.
    pub fn with_loader(loader: Box<dyn ModuleLoader>) -> Self {
        Self {
            loader: Some(loader),
            ..Self::new()
        }
    }

    /// Register a codec, claiming free reader/writer slots for its extensions.
    ///
    /// For every declared extension the codec takes the reader slot if it can
    /// read and the slot is free, and likewise the writer slot. Contested
    /// slots stay with their current owner; that is not an error. If no slot
    /// at all was claimed, registration fails, the codec is dropped and
    /// `None` is returned.
    pub fn register(&mut self, codec: Box<dyn Codec>) -> Option<CodecId> {
        let id = CodecId(self.next_id);
        let mut claimed = false;

        for index in 0..codec.num_extensions() {
            let Some(ext) = codec.extension(index) else {
                continue;
            };
            let key = ext.to_ascii_lowercase();

            if codec.can_read() && !self.readers.contains_key(&key) {
                self.readers.insert(key.clone(), id);
                claimed = true;
            }
            if codec.can_write() && !self.writers.contains_key(&key) {
                self.writers.insert(key, id);
                claimed = true;
            }
        }

        if !claimed {
            return None;
        }

        self.next_id += 1;
        self.codecs.push((id, codec));
        Some(id)
    }

    /// Unregister a codec, releasing every slot it occupies.
    ///
    /// Returns `false` when `id` is not currently registered.
    pub fn unregister(&mut self, id: CodecId) -> bool {
        let Some(position) = self.codecs.iter().position(|(cid, _)| *cid == id) else {
            return false;
        };

        self.readers.retain(|_, owner| *owner != id);
        self.writers.retain(|_, owner| *owner != id);
        self.codecs.remove(position);
        true
    }

    /// Number of currently registered codecs.
    pub fn num_codecs(&self) -> usize {
        self.codecs.len()
    }

    /// The codec registered to read `extension`, if any (case-insensitive).
    pub fn reader_for(&self, extension: &str) -> Option<&dyn Codec> {
        let id = self.readers.get(&extension.to_ascii_lowercase())?;
        self.codec(*id)
    }

    /// The codec registered to write `extension`, if any (case-insensitive).
    pub fn writer_for(&self, extension: &str) -> Option<&dyn Codec> {
        let id = self.writers.get(&extension.to_ascii_lowercase())?;
        self.codec(*id)
    }

    fn codec(&self, id: CodecId) -> Option<&dyn Codec> {
        self.codecs
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, codec)| codec.as_ref())
    }

    /// Read the image at `path` as the codec delivers it.
    ///
    /// Shorthand for [`read_with_mipmaps`](Registry::read_with_mipmaps) with
    /// no mip request: whatever chain the codec decoded is returned as is.
    pub fn read(&self, path: &str) -> Result<Image, Error> {
        self.read_with_mipmaps(path, -1)
    }

    /// Read the image at `path` via the reader registered for its extension.
    ///
    /// If the decoded image arrives without mip levels and `num_mips > 0`,
    /// that many levels are generated before returning (subject to the mip
    /// builder's format support).
    pub fn read_with_mipmaps(&self, path: &str, num_mips: i32) -> Result<Image, Error> {
        let extension = extension_of(path);
        let Some(codec) = self.reader_for(extension) else {
            return Err(Error::NoReader {
                extension: extension.to_ascii_lowercase(),
            });
        };

        let mut image = codec.read_image(path).ok_or_else(|| Error::Read {
            path: path.to_string(),
        })?;

        if image.num_mipmaps() <= 0 && num_mips > 0 {
            image.build_mipmaps(num_mips)?;
        }

        Ok(image)
    }

    /// Write `image` to `path` via the writer registered for its extension.
    pub fn write(&self, image: &Image, path: &str) -> Result<(), Error> {
        let extension = extension_of(path);
        let Some(codec) = self.writer_for(extension) else {
            return Err(Error::NoWriter {
                extension: extension.to_ascii_lowercase(),
            });
        };

        if codec.write_image(image, path) {
            Ok(())
        } else {
            Err(Error::Write {
                path: path.to_string(),
            })
        }
    }

    /// Discover and register codec plugins in `directory`.
    ///
    /// The injected loader enumerates the directory; entries carrying the
    /// fixed [`PLUGIN_EXTENSION`] are loaded and registered. Returns the
    /// number of codecs that claimed at least one slot. Inert (with a
    /// warning) when the registry has no loader.
    pub fn load_plugins(&mut self, directory: &str) -> usize {
        let Some(loader) = &self.loader else {
            log::warn!("no module loader injected, skipping plugin discovery");
            return 0;
        };

        let candidates = loader.enumerate(directory);
        let mut count = 0;

        for path in candidates {
            if !extension_of(&path).eq_ignore_ascii_case(PLUGIN_EXTENSION) {
                continue;
            }
            let Some(codec) = self.loader.as_ref().and_then(|l| l.load(&path)) else {
                continue;
            };
            if self.register(codec).is_some() {
                log::info!("loaded image plugin: {path}");
                count += 1;
            }
        }

        count
    }

    /// Unregister and drop every codec.
    pub fn unload_plugins(&mut self) {
        self.readers.clear();
        self.writers.clear();
        self.codecs.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Registry({} codecs, {} readers, {} writers)",
            self.codecs.len(),
            self.readers.len(),
            self.writers.len()
        )
    }
}

/// The extension of `path`'s final component, or `""` when it has none.
fn extension_of(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[dot + 1..],
        _ => "",
    }
}
