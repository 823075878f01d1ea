//! signet-providers
//!
//! Format recognition and dispatch for Signet:
//! - the [`SignableProvider`] contract: advertise applicability, construct
//!   the signable
//! - filename and content matchers for implementing `supports`
//! - the build/seal registry with deterministic first-registered-wins
//!   precedence
//! - the compiled-in provider catalog under [`builtin`]
//!
//! The registry resolves a candidate file to the first provider that
//! recognizes it and hands back that provider's signable. Computing and
//! embedding the actual signature belongs to the signing engine, not to this
//! crate.

pub mod builtin;
pub mod matcher;
pub mod provider;
pub mod registry;

pub use crate::matcher::{ContentMatcher, ExtensionMatcher};
pub use crate::provider::SignableProvider;
pub use crate::registry::{DispatchError, ProviderRegistry, RegistryBuilder};
