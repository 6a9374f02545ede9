//! Identifier renaming.
//!
//! Three rules, checked in order:
//! 1. built-in names pass through unchanged,
//! 2. internal (compiler-synthesized) names get the reserved `webgl_angle_` prefix,
//! 3. user names are hashed to `webgl_<hex>` when a hash function is configured, and pass through otherwise.
//!
//! Hashed names are memoized in a [`NameMap`] so that one original always maps to one rendered name per pass.

use std::collections::BTreeMap;

use glslout_core::lang::texture_compat;
use glslout_core::names::{self as reserved, ENTRY_POINT};
use tracing::debug;

use super::GlslEmitter;
use crate::ir::{FunctionName, Name};

/// Original → rendered identifier table.
///
/// Append-only: an entry, once recorded, is never replaced. Ordered so that dumps for tooling are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    entries: BTreeMap<String, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered name recorded for `original`
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Record a mapping. Returns `false` (and keeps the old entry) when `original` is already mapped.
    pub fn insert(&mut self, original: impl Into<String>, rendered: impl Into<String>) -> bool {
        let original = original.into();
        if self.entries.contains_key(&original) {
            return false;
        }
        self.entries.insert(original, rendered.into());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlslEmitter<'_> {
    /// Apply the internal-prefix and hashing rules (no built-in check).
    pub(crate) fn hash_name(&self, names: &mut NameMap, name: &Name) -> String {
        if name.is_empty() {
            return String::new();
        }
        if name.internal {
            return reserved::internal_name(&name.text);
        }
        self.hash_user_name(names, &name.text)
    }

    fn hash_user_name(&self, names: &mut NameMap, original: &str) -> String {
        let Some(hash) = self.config.hash_function else {
            return original.to_string();
        };
        if let Some(rendered) = names.get(original) {
            return rendered.to_string();
        }
        let rendered = reserved::hashed_name(hash(original));
        debug!(original, rendered = %rendered, "hashed identifier");
        names.insert(original, rendered.clone());
        rendered
    }

    /// Variable names: built-ins are never renamed.
    pub(crate) fn hash_variable_name(&self, names: &mut NameMap, name: &Name) -> String {
        if !name.internal && self.is_built_in(&name.text) {
            return name.text.clone();
        }
        self.hash_name(names, name)
    }

    /// Struct and interface-block type names.
    pub(crate) fn hash_type_name(&self, names: &mut NameMap, name: &str) -> String {
        if self.is_built_in(name) {
            return name.to_string();
        }
        self.hash_name(names, &Name::new(name))
    }

    /// Member names; members of built-in structs keep their spelling.
    pub(crate) fn hash_field_name(&self, names: &mut NameMap, owner: &str, field: &str) -> String {
        if self.is_built_in(owner) {
            return field.to_string();
        }
        self.hash_name(names, &Name::new(field))
    }

    /// Function names are unmangled first. Built-ins and the entry point go through the texture-function
    /// compatibility table instead of being hashed; internal helpers are written as-is.
    pub(crate) fn hash_function_name(&self, names: &mut NameMap, function: &FunctionName) -> String {
        let name = reserved::unmangle(&function.mangled);
        if name == ENTRY_POINT || self.is_built_in(name) {
            return texture_compat::translate(name, self.config.output).to_string();
        }
        if function.internal {
            return name.to_string();
        }
        self.hash_name(names, &Name::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use glslout_core::lang::dialect::OutputDialect;

    fn fixed_hash(_: &str) -> u64 {
        0xabc
    }

    fn length_hash(name: &str) -> u64 {
        name.len() as u64
    }

    // ========================================
    // NameMap tests
    // ========================================

    #[test]
    fn test_name_map_is_append_only() {
        let mut map = NameMap::new();
        assert!(map.insert("color", "webgl_1"));
        assert!(!map.insert("color", "webgl_2"));
        assert_eq!(map.get("color"), Some("webgl_1"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_name_map_iterates_in_order() {
        let mut map = NameMap::new();
        map.insert("b", "webgl_b");
        map.insert("a", "webgl_a");
        assert_eq!(map.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    // ========================================
    // Renaming rule tests
    // ========================================

    #[test]
    fn test_no_hash_function_passes_user_names_through() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default());
        let mut names = NameMap::new();
        assert_eq!(emitter.hash_name(&mut names, &Name::new("color")), "color");
        assert!(names.is_empty());
    }

    #[test]
    fn test_internal_names_are_prefixed_not_hashed() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        assert_eq!(emitter.hash_name(&mut names, &Name::internal("b")), "webgl_angle_b");
        assert!(names.is_empty());
    }

    #[test]
    fn test_hashed_names_are_memoized() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(length_hash));
        let mut names = NameMap::new();
        let first = emitter.hash_name(&mut names, &Name::new("color"));
        let second = emitter.hash_name(&mut names, &Name::new("color"));
        assert_eq!(first, "webgl_5");
        assert_eq!(first, second);
        assert_eq!(names.get("color"), Some("webgl_5"));
    }

    #[test]
    fn test_seeded_entries_win_over_hash() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        names.insert("color", "webgl_seeded");
        assert_eq!(emitter.hash_name(&mut names, &Name::new("color")), "webgl_seeded");
    }

    #[test]
    fn test_builtin_variables_never_hashed() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        assert_eq!(emitter.hash_variable_name(&mut names, &Name::new("gl_FragColor")), "gl_FragColor");
        assert_eq!(emitter.hash_variable_name(&mut names, &Name::new("color")), "webgl_abc");
    }

    #[test]
    fn test_empty_name_renders_empty() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        assert_eq!(emitter.hash_name(&mut names, &Name::new("")), "");
    }

    // ========================================
    // Function name tests
    // ========================================

    #[test]
    fn test_function_names_are_unmangled() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default());
        let mut names = NameMap::new();
        let f = FunctionName::new("shade(vf3;f1;");
        assert_eq!(emitter.hash_function_name(&mut names, &f), "shade");
    }

    #[test]
    fn test_main_is_never_hashed() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        assert_eq!(emitter.hash_function_name(&mut names, &FunctionName::new("main(")), "main");
    }

    #[test]
    fn test_texture_builtins_translated_for_core_profiles() {
        let config = RenderConfig::default().with_output(OutputDialect::Glsl330Core);
        let emitter = GlslEmitter::with_defaults(config);
        let mut names = NameMap::new();
        let f = FunctionName::new("texture2D(s21;vf2;");
        assert_eq!(emitter.hash_function_name(&mut names, &f), "texture");
    }

    #[test]
    fn test_internal_functions_written_as_is() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        let f = FunctionName::internal("webgl_int_clamp(i1;i1;i1;");
        assert_eq!(emitter.hash_function_name(&mut names, &f), "webgl_int_clamp");
    }

    #[test]
    fn test_builtin_struct_fields_keep_spelling() {
        let emitter = GlslEmitter::with_defaults(RenderConfig::default().with_hash_function(fixed_hash));
        let mut names = NameMap::new();
        assert_eq!(emitter.hash_field_name(&mut names, "gl_DepthRangeParameters", "near"), "near");
        assert_eq!(emitter.hash_field_name(&mut names, "Light", "near"), "webgl_abc");
    }
}
