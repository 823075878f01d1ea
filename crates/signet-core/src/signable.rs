//! The signable abstraction.
//!
//! A [`Signable`] is a file ready for digest computation and signature
//! embedding, independent of the underlying format. Exactly one signable is
//! produced per successful dispatch; the caller owns it for the duration of
//! the signing operation and drops it afterwards.
//!
//! Resource discipline: implementations acquire file handles in scoped calls
//! so that a failed operation releases everything before the error surfaces.
//! A live signable may hold a reopenable reference to its file; closing it is
//! the caller's responsibility via drop.

use std::path::Path;

use crate::digest::DigestAlgorithm;
use crate::errors::SignetResult;

/// A file that can be digitally signed.
pub trait Signable: Send {
    /// Path of the underlying file.
    fn path(&self) -> &Path;

    /// Compute the digest of the signed content.
    ///
    /// The signed content excludes any signature already embedded in the
    /// file, so signing an already-signed file replaces the old signature
    /// instead of covering it.
    fn digest(&self, alg: DigestAlgorithm) -> SignetResult<Vec<u8>>;

    /// Embed an encoded signature and persist the result.
    ///
    /// `signature` is the DER-encoded signature blob produced by the signing
    /// engine; how it is stored (trailing comment block, certificate table,
    /// archive entry) is up to the format.
    fn embed_signature(&mut self, signature: &[u8]) -> SignetResult<()>;
}
