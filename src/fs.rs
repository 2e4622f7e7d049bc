//! Whole-document file access.
//!
//! [`IniConfig`](crate::IniConfig) never touches `std::fs` directly. It goes
//! through [`FileSystem`], so callers can substitute their own storage and
//! tests can inject failures.

use std::borrow::Cow;
use std::io;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::error::UcConfigError;

/// The three operations the config store needs from a file system.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the whole file with `contents`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    /// Creates missing parent directories first.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }
}

/// Read `path` through `fs` and decode it.
///
/// A UTF-8, UTF-16LE or UTF-16BE byte order mark selects the encoding and is
/// dropped; without one the file must be UTF-8. Malformed input is a
/// [`UcConfigError::Decode`], never replaced.
pub fn read_text<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<String, UcConfigError> {
    let bytes = fs.read(path).map_err(|e| UcConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (encoding, bom_len) = Encoding::for_bom(&bytes).unwrap_or((UTF_8, 0));
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(Cow::into_owned)
        .ok_or_else(|| UcConfigError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })
}

/// Write `contents` to `path` through `fs`.
pub fn write_text<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    contents: &str,
) -> Result<(), UcConfigError> {
    fs.write(path, contents).map_err(|e| UcConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
