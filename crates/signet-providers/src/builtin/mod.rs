//! Built-in provider catalog.
//!
//! Providers ship compiled in: adding a format means adding a module here
//! and appending its `register` call to [`register_all`], without touching
//! the dispatch core. There is no runtime discovery and no hidden global
//! registry; hosts build their own registry explicitly and may interleave
//! their own providers with the built-in ones.
//!
//! Registration order is the documented precedence order. Extension-based
//! providers come first; the content-sniffing provider registers last so an
//! explicit extension always wins.

pub mod jscript;
pub mod powershell;
pub mod shebang;
pub mod vbscript;

use crate::registry::{ProviderRegistry, RegistryBuilder};

/// Built-in provider names, in registration (= precedence) order.
///
/// Keep this list append-only where possible; reordering changes which
/// provider wins for overlapping files.
pub const BUILTIN_PROVIDER_NAMES: [&str; 4] = ["powershell", "vbscript", "jscript", "shebang"];

/// Register every built-in provider, in catalog order.
pub fn register_all(builder: &mut RegistryBuilder) {
    powershell::register(builder);
    vbscript::register(builder);
    jscript::register(builder);
    shebang::register(builder);
}

/// A sealed registry holding exactly the built-in providers.
pub fn builtin_registry() -> ProviderRegistry {
    let mut builder = ProviderRegistry::builder();
    register_all(&mut builder);
    builder.seal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_registration_order() {
        let registry = builtin_registry();
        assert_eq!(registry.provider_names(), BUILTIN_PROVIDER_NAMES);
    }

    #[test]
    fn catalog_is_deterministic() {
        let a = builtin_registry();
        let b = builtin_registry();
        assert_eq!(a.provider_names(), b.provider_names());
        assert_eq!(a.len(), BUILTIN_PROVIDER_NAMES.len());
    }
}
