//! The provider contract.
//!
//! A provider recognizes one file format family and constructs its signable.
//! Providers hold no per-dispatch state; everything a construction produces
//! lives in the returned signable, which is why a sealed registry can serve
//! concurrent lookups without locking.

use std::path::Path;

use signet_core::encoding::Encoding;
use signet_core::errors::SignetResult;
use signet_core::signable::Signable;

/// A unit that recognizes a file format and constructs its signable.
pub trait SignableProvider: Send + Sync {
    /// Stable provider id, used in catalogs and diagnostics.
    fn name(&self) -> &str;

    /// Whether this provider recognizes `file`.
    ///
    /// Must be free of side effects on the provider and must answer `false`
    /// for malformed or unreadable paths instead of failing. Content-sniffing
    /// providers may read file bytes here, lazily and scoped to the call.
    fn supports(&self, file: &Path) -> bool;

    /// Construct the signable for `file`.
    ///
    /// The registry only calls this after `supports(file)` answered true;
    /// a provider is never asked to construct for a file it rejected.
    /// Construction may still fail with a typed I/O error since the file can
    /// vanish or become unreadable between the check and the open. A failed
    /// construction leaks no file handle.
    ///
    /// `encoding` applies to text formats; binary formats ignore it.
    fn create(&self, file: &Path, encoding: Option<Encoding>)
        -> SignetResult<Box<dyn Signable>>;
}
