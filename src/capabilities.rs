//! Query capabilities the renderer consumes from the surrounding compiler.
//!
//! The renderer never owns a symbol table or an emulation table. It asks two narrow questions through the traits
//! below, so callers can plug in their own tables (or closures in tests). [`StaticBuiltIns`] and [`PrefixEmulator`]
//! are the defaults backed by the vocabulary in `glslout_core`.

use glslout_core::lang::builtins;
use glslout_core::names;

/// Built-in symbol lookup, scoped by source shading-language version.
pub trait BuiltInLookup {
    /// Whether `name` is a built-in variable, function or struct in `version`.
    fn is_built_in(&self, name: &str, version: u32) -> bool;
}

impl<F> BuiltInLookup for F
where
    F: Fn(&str, u32) -> bool,
{
    fn is_built_in(&self, name: &str, version: u32) -> bool {
        self(name, version)
    }
}

/// Lookup of the replacement name for a built-in function the target lacks.
pub trait FunctionEmulator {
    fn emulated_name(&self, name: &str) -> String;
}

impl<F> FunctionEmulator for F
where
    F: Fn(&str) -> String,
{
    fn emulated_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Built-in table backed by [`glslout_core::lang::builtins`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBuiltIns;

impl BuiltInLookup for StaticBuiltIns {
    fn is_built_in(&self, name: &str, version: u32) -> bool {
        builtins::find(name, version).is_some()
    }
}

/// Emulation lookup that spells every replacement as `webgl_<name>_emu`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixEmulator;

impl FunctionEmulator for PrefixEmulator {
    fn emulated_name(&self, name: &str) -> String {
        names::emulated_name(name)
    }
}

/// 64-bit FNV-1a, usable as a [`crate::config::HashFunction`].
pub fn fnv1a_64(name: &str) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    name.bytes()
        .fold(OFFSET_BASIS, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_builtins_are_version_scoped() {
        let table = StaticBuiltIns;
        assert!(table.is_built_in("gl_FragColor", 100));
        assert!(!table.is_built_in("gl_FragColor", 300));
        assert!(!table.is_built_in("color", 100));
    }

    #[test]
    fn test_closure_as_lookup() {
        let only_foo = |name: &str, _version: u32| name == "foo";
        assert!(only_foo.is_built_in("foo", 100));
        assert!(!only_foo.is_built_in("bar", 100));
    }

    #[test]
    fn test_prefix_emulator_spelling() {
        assert_eq!(PrefixEmulator.emulated_name("atan"), "webgl_atan_emu");
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a_64(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a_64("a"), 0xaf63_dc4c_8601_ec8c);
    }
}
