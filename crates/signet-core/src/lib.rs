//! signet-core
//!
//! Core primitives for Signet:
//! - the [`Signable`](signable::Signable) trait: digest computation and
//!   signature embedding over an opaque file format
//! - text encoding detection and conversion for script formats
//! - digest algorithm selection and hashing helpers
//! - script signables carrying comment-style signature blocks

pub mod digest;
pub mod encoding;
pub mod errors;
pub mod script;
pub mod signable;

pub use crate::errors::{SignetError, SignetResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::digest::{hash_bytes, hash_bytes_hex, DigestAlgorithm};
    pub use crate::encoding::Encoding;
    pub use crate::script::{ScriptSignable, ScriptStyle};
    pub use crate::signable::Signable;
    pub use crate::{SignetError, SignetResult};
}
