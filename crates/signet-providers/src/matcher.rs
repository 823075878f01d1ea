//! Applicability matchers for signable providers.
//!
//! Providers decide applicability one of two ways:
//! - [`ExtensionMatcher`]: by filename suffix, without ever opening the file
//! - [`ContentMatcher`]: by sniffing a bounded prefix of the file's bytes,
//!   for formats without a reliable extension
//!
//! Both are pure predicates with respect to the matcher itself; neither
//! raises for malformed or unreadable paths.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Matches files by the suffix after the last dot of the file name.
///
/// Comparison is ordinal ASCII case folding, never locale-sensitive, so
/// `Script.PS1` and `script.ps1` match identically on every host.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    extensions: Vec<String>,
}

impl ExtensionMatcher {
    /// Build a matcher over one or more extensions.
    ///
    /// Extensions carry no leading dot ("ps1", not ".ps1") and are stored
    /// lowercase.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// The configured extensions, in declaration order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Extension of `path`: the suffix after the last `.` of its file name.
    ///
    /// `None` when the name has no dot, ends with a dot, or is not valid
    /// UTF-8. A leading dot counts (".ps1" has extension "ps1").
    pub fn extension_of(path: &Path) -> Option<&str> {
        let name = path.file_name()?.to_str()?;
        let dot = name.rfind('.')?;
        let ext = &name[dot + 1..];
        if ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    /// Whether the file name matches one of the configured extensions.
    ///
    /// Decides on the name only; the filesystem is never touched. A file
    /// with no extension never matches.
    pub fn supports(&self, path: &Path) -> bool {
        match Self::extension_of(path) {
            Some(ext) => self.extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)),
            None => false,
        }
    }
}

/// Matches files by sniffing a bounded prefix of their bytes.
///
/// The probe runs only when `supports` is called, and reads at most
/// `prefix_len` bytes. Unreadable or vanished files answer `false`, never an
/// error; the read handle is scoped to the call.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    prefix_len: usize,
    probe: fn(&[u8]) -> bool,
}

impl ContentMatcher {
    /// Build a matcher reading up to `prefix_len` bytes and applying `probe`
    /// to whatever was read (possibly fewer bytes for short files).
    pub fn new(prefix_len: usize, probe: fn(&[u8]) -> bool) -> Self {
        Self { prefix_len, probe }
    }

    /// Whether the file's prefix satisfies the probe.
    pub fn supports(&self, path: &Path) -> bool {
        let Ok(mut file) = File::open(path) else {
            return false;
        };
        let mut buf = vec![0u8; self.prefix_len];
        let mut filled = 0;
        while filled < buf.len() {
            match file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(_) => return false,
            }
        }
        (self.probe)(&buf[..filled])
    }
}
