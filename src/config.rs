//! Render configuration.
//!
//! One [`RenderConfig`] is supplied per pass and never changes while the pass runs. Everything that depends on the
//! target (keyword spellings, precision, bit-cast support, invariant removal) is derived from it through the query
//! methods below, so the renderer never inspects raw version numbers itself.

use glslout_core::lang::dialect::{OutputDialect, ShaderStage};

/// One-way identifier hash. Must be pure: the same input always yields the same output.
pub type HashFunction = fn(&str) -> u64;

/// How computed array / vector indices are kept in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampingStrategy {
    /// `[int(clamp(float(i), 0.0, float(max)))]`
    #[default]
    ClampIntrinsic,
    /// `[webgl_int_clamp(i, 0, max)]`, the helper is provided by the caller.
    HelperFunction,
}

/// Driver workarounds that change what the renderer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompatFlags {
    /// Strip `invariant` and `centroid` from ESSL 3 vertex shaders rendered to GLSL 4.10 or older.
    pub remove_invariant_and_centroid_for_essl3: bool,
    /// Keep `invariant` on fragment inputs even where GLSL 4.20+ would reject it.
    pub keep_fragment_input_invariant: bool,
}

/// Immutable per-pass configuration.
///
/// Not `PartialEq`; it holds a function pointer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Dialect the output is written in
    pub output: OutputDialect,
    /// Version of the source shader (100, 300, 310)
    pub shader_version: u32,
    /// Pipeline stage of the shader
    pub stage: ShaderStage,
    /// Index clamping output form
    pub clamping: ClampingStrategy,
    /// Identifier hash; `None` leaves user names unchanged
    pub hash_function: Option<HashFunction>,
    /// Driver workarounds
    pub compat: CompatFlags,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: OutputDialect::Essl,
            shader_version: 100,
            stage: ShaderStage::Fragment,
            clamping: ClampingStrategy::ClampIntrinsic,
            hash_function: None,
            compat: CompatFlags::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: OutputDialect) -> Self {
        self.output = output;
        self
    }

    pub fn with_shader_version(mut self, version: u32) -> Self {
        self.shader_version = version;
        self
    }

    pub fn with_stage(mut self, stage: ShaderStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_clamping(mut self, clamping: ClampingStrategy) -> Self {
        self.clamping = clamping;
        self
    }

    /// Enable identifier hashing
    pub fn with_hash_function(mut self, hash: HashFunction) -> Self {
        self.hash_function = Some(hash);
        self
    }

    pub fn with_compat(mut self, compat: CompatFlags) -> Self {
        self.compat = compat;
        self
    }

    /// Precision qualifiers are written for ESSL output only.
    pub fn writes_precision(&self) -> bool {
        self.output.writes_precision()
    }

    /// `floatBitsToUint` / `uintBitsToFloat` exist from ESSL 3.00 on.
    pub fn supports_bit_cast(&self) -> bool {
        self.shader_version >= 300
    }

    /// Whether `invariant` must be left out of declarations for this target.
    pub fn remove_invariant(&self) -> bool {
        let fragment_on_420 = self.stage == ShaderStage::Fragment
            && self.output.is_glsl420_or_newer()
            && !self.compat.keep_fragment_input_invariant;
        let essl3_vertex = self.compat.remove_invariant_and_centroid_for_essl3
            && self.shader_version >= 300
            && self.stage == ShaderStage::Vertex
            && self.output.is_glsl410_or_older();
        fragment_on_420 || essl3_vertex
    }

    /// ESSL 3 sources rendered for GLSL 4.10 or older lose `centroid` when the workaround is on.
    pub fn strips_centroid(&self) -> bool {
        self.compat.remove_invariant_and_centroid_for_essl3
            && self.shader_version >= 300
            && self.output.is_glsl410_or_older()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_config_targets_essl_100_fragment() {
        let config = RenderConfig::default();
        assert_eq!(config.output, OutputDialect::Essl);
        assert_eq!(config.shader_version, 100);
        assert_eq!(config.stage, ShaderStage::Fragment);
        assert_eq!(config.clamping, ClampingStrategy::ClampIntrinsic);
        assert!(config.hash_function.is_none());
    }

    #[test]
    fn test_new_matches_default() {
        let (new, default) = (RenderConfig::new(), RenderConfig::default());
        assert_eq!(new.output, default.output);
        assert_eq!(new.shader_version, default.shader_version);
        assert_eq!(new.stage, default.stage);
        assert_eq!(new.clamping, default.clamping);
        assert_eq!(new.compat, default.compat);
        assert_eq!(new.hash_function.is_some(), default.hash_function.is_some());
    }

    #[test]
    fn test_clone_keeps_hash_behavior() {
        fn length(name: &str) -> u64 {
            name.len() as u64
        }
        let config = RenderConfig::new().with_hash_function(length);
        let hash = config.clone().hash_function.unwrap();
        assert_eq!(hash("color"), 5);
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_builder_chain() {
        let config = RenderConfig::new()
            .with_output(OutputDialect::Glsl330Core)
            .with_shader_version(300)
            .with_clamping(ClampingStrategy::HelperFunction);
        assert_eq!(config.output, OutputDialect::Glsl330Core);
        assert_eq!(config.shader_version, 300);
        assert_eq!(config.clamping, ClampingStrategy::HelperFunction);
        // Other fields unchanged
        assert_eq!(config.stage, ShaderStage::Fragment);
    }

    #[test]
    fn test_builder_override() {
        let config = RenderConfig::new().with_shader_version(300).with_shader_version(310);
        assert_eq!(config.shader_version, 310);
    }

    // ========================================
    // Derived query tests
    // ========================================

    #[test]
    fn test_bit_cast_needs_essl3() {
        assert!(!RenderConfig::new().supports_bit_cast());
        assert!(RenderConfig::new().with_shader_version(300).supports_bit_cast());
    }

    #[test]
    fn test_precision_only_for_essl() {
        assert!(RenderConfig::new().writes_precision());
        assert!(!RenderConfig::new().with_output(OutputDialect::Glsl150Core).writes_precision());
    }

    #[test]
    fn test_fragment_invariant_removed_on_glsl420() {
        let config = RenderConfig::new().with_output(OutputDialect::Glsl420Core);
        assert!(config.remove_invariant());

        let kept = config.with_compat(CompatFlags {
            keep_fragment_input_invariant: true,
            ..CompatFlags::default()
        });
        assert!(!kept.remove_invariant());
    }

    #[test]
    fn test_vertex_essl3_invariant_removed_on_old_glsl() {
        let compat = CompatFlags {
            remove_invariant_and_centroid_for_essl3: true,
            ..CompatFlags::default()
        };
        let config = RenderConfig::new()
            .with_output(OutputDialect::Glsl410Core)
            .with_stage(ShaderStage::Vertex)
            .with_shader_version(300)
            .with_compat(compat);
        assert!(config.remove_invariant());
        assert!(config.strips_centroid());

        // ESSL 1.00 sources keep it
        assert!(!config.clone().with_shader_version(100).remove_invariant());
        // so do newer outputs
        assert!(!config.with_output(OutputDialect::Glsl420Core).remove_invariant());
    }

    #[test]
    fn test_centroid_stripped_in_any_stage() {
        let config = RenderConfig::new()
            .with_output(OutputDialect::Glsl330Core)
            .with_shader_version(300)
            .with_compat(CompatFlags {
                remove_invariant_and_centroid_for_essl3: true,
                ..CompatFlags::default()
            });
        assert!(config.strips_centroid());
        // invariant removal is vertex-only on this target
        assert!(!config.remove_invariant());
    }

    #[test]
    fn test_essl_output_keeps_invariant() {
        let config = RenderConfig::new().with_stage(ShaderStage::Vertex);
        assert!(!config.remove_invariant());
    }
}
