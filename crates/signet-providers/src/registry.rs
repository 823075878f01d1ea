//! Provider registry and dispatch.
//!
//! The registry has exactly two states, with a distinct type for each: a
//! [`RegistryBuilder`] that accepts registrations during single-threaded
//! startup, and the sealed [`ProviderRegistry`] it turns into, which is
//! immutable and safe to share across threads without locking. The
//! transition is one-way; there is no way back from sealed to building.
//!
//! Precedence is registration order: when two providers claim the same file,
//! the earlier registration wins, deterministically, on every call. The
//! registry never guesses and never falls back to a default provider.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use signet_core::encoding::Encoding;
use signet_core::errors::SignetError;
use signet_core::signable::Signable;

use crate::matcher::ExtensionMatcher;
use crate::provider::SignableProvider;

/// Dispatch failure, distinguishing "nobody claims this file" from "the
/// matching provider could not build the signable".
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered provider recognizes the file.
    ///
    /// Carries the extension seen (lowercase, or `None` for extensionless
    /// files) so callers can produce an actionable message. This is a
    /// configuration or usage error; retrying cannot help.
    #[error("unsupported file type ({}): {}", extension_label(.extension), .path.display())]
    Unsupported {
        path: PathBuf,
        extension: Option<String>,
    },

    /// The resolved provider matched the file but failed to construct the
    /// signable. The underlying error is propagated verbatim; any retry
    /// policy belongs to the caller.
    #[error("provider {provider} failed to open {}", .path.display())]
    Construction {
        path: PathBuf,
        provider: String,
        #[source]
        source: SignetError,
    },
}

fn extension_label(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!(".{ext}"),
        None => "no extension".to_string(),
    }
}

/// The building state of the registry.
///
/// Registration is single-threaded and happens once, at startup. Order is
/// significant and preserved: no sorting, no deduplication. Registering two
/// providers with overlapping extensions is legal; the earlier one always
/// wins for overlapping files.
#[derive(Default)]
pub struct RegistryBuilder {
    providers: Vec<Box<dyn SignableProvider>>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider. Registration order is precedence order.
    pub fn register(&mut self, provider: Box<dyn SignableProvider>) {
        trace!(provider = provider.name(), "registering provider");
        self.providers.push(provider);
    }

    /// Seal the registry. One-way; the result is read-only and `Sync`.
    pub fn seal(self) -> ProviderRegistry {
        debug!(providers = self.providers.len(), "sealing provider registry");
        ProviderRegistry {
            providers: self.providers,
        }
    }
}

/// The sealed, read-only registry.
///
/// Lookups are pure functions of the fixed provider table, so `resolve` and
/// `dispatch` may run concurrently from any number of threads.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn SignableProvider>>,
}

impl ProviderRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in precedence order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// First provider in registration order whose `supports` answers true.
    ///
    /// Total: absence is `None`, never an error, and repeated calls on the
    /// same registry and file agree. A provider that panics in `supports` is
    /// a broken plugin; the panic propagates instead of silently skipping a
    /// possibly-correct provider.
    pub fn resolve(&self, file: &Path) -> Option<&dyn SignableProvider> {
        for provider in &self.providers {
            if provider.supports(file) {
                trace!(
                    provider = provider.name(),
                    file = %file.display(),
                    "resolved provider"
                );
                return Some(provider.as_ref());
            }
        }
        trace!(file = %file.display(), "no provider matched");
        None
    }

    /// Resolve `file` and construct its signable.
    ///
    /// Fails with [`DispatchError::Unsupported`] when no provider matches,
    /// naming the extension seen; otherwise delegates to the resolved
    /// provider's `create` and propagates its result or error unchanged,
    /// wrapped as [`DispatchError::Construction`].
    pub fn dispatch(
        &self,
        file: &Path,
        encoding: Option<Encoding>,
    ) -> Result<Box<dyn Signable>, DispatchError> {
        let provider = self.resolve(file).ok_or_else(|| DispatchError::Unsupported {
            path: file.to_path_buf(),
            extension: ExtensionMatcher::extension_of(file).map(|e| e.to_ascii_lowercase()),
        })?;

        debug!(
            provider = provider.name(),
            file = %file.display(),
            "dispatching to provider"
        );
        provider
            .create(file, encoding)
            .map_err(|source| DispatchError::Construction {
                path: file.to_path_buf(),
                provider: provider.name().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use signet_core::script::{ScriptSignable, ScriptStyle};

    struct ExtensionProvider {
        name: &'static str,
        matcher: ExtensionMatcher,
    }

    impl ExtensionProvider {
        fn new(name: &'static str, extensions: &[&str]) -> Self {
            Self {
                name,
                matcher: ExtensionMatcher::new(extensions.iter().copied()),
            }
        }
    }

    impl SignableProvider for ExtensionProvider {
        fn name(&self) -> &str {
            self.name
        }
        fn supports(&self, file: &Path) -> bool {
            self.matcher.supports(file)
        }
        fn create(
            &self,
            file: &Path,
            encoding: Option<Encoding>,
        ) -> signet_core::SignetResult<Box<dyn Signable>> {
            let script = ScriptSignable::open(file, encoding, ScriptStyle::powershell())?;
            Ok(Box::new(script))
        }
    }

    #[test]
    fn resolve_returns_none_on_empty_registry() {
        let registry = RegistryBuilder::new().seal();
        assert!(registry.is_empty());
        assert!(registry.resolve(Path::new("a.ps1")).is_none());
    }

    #[test]
    fn first_registered_wins_on_overlap() {
        let mut builder = ProviderRegistry::builder();
        builder.register(Box::new(ExtensionProvider::new("first", &["xyz"])));
        builder.register(Box::new(ExtensionProvider::new("second", &["xyz"])));
        let registry = builder.seal();

        for _ in 0..10 {
            let resolved = registry.resolve(Path::new("file.xyz")).unwrap();
            assert_eq!(resolved.name(), "first");
        }
    }

    #[test]
    fn resolve_is_repeatable() {
        let mut builder = ProviderRegistry::builder();
        builder.register(Box::new(ExtensionProvider::new("ps", &["ps1"])));
        let registry = builder.seal();

        let a = registry.resolve(Path::new("x.ps1")).map(|p| p.name());
        let b = registry.resolve(Path::new("x.ps1")).map(|p| p.name());
        assert_eq!(a, b);
        assert!(registry.resolve(Path::new("x.other")).is_none());
    }

    #[test]
    fn unsupported_error_names_the_extension() {
        let registry = RegistryBuilder::new().seal();

        let err = registry.dispatch(Path::new("archive.ZZZ"), None).err().unwrap();
        assert_matches!(
            &err,
            DispatchError::Unsupported { extension: Some(ext), .. } if ext.as_str() == "zzz"
        );
        assert!(err.to_string().contains(".zzz"));

        let err = registry.dispatch(Path::new("README"), None).err().unwrap();
        assert_matches!(&err, DispatchError::Unsupported { extension: None, .. });
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn construction_failure_carries_the_io_source() {
        let mut builder = ProviderRegistry::builder();
        builder.register(Box::new(ExtensionProvider::new("ps", &["ps1"])));
        let registry = builder.seal();

        // supports() is name-only, so a nonexistent path resolves but the
        // construction fails.
        let err = registry
            .dispatch(Path::new("/nonexistent/dir/a.ps1"), None)
            .err()
            .unwrap();
        assert_matches!(
            err,
            DispatchError::Construction {
                source: SignetError::Io { .. },
                ..
            }
        );
    }

    #[test]
    fn sealed_registry_is_shareable_across_threads() {
        let mut builder = ProviderRegistry::builder();
        builder.register(Box::new(ExtensionProvider::new("ps", &["ps1"])));
        let registry = std::sync::Arc::new(builder.seal());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(registry.resolve(Path::new("x.ps1")).is_some());
                        assert!(registry.resolve(Path::new("x.bin")).is_none());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
