//! Texture-function compatibility renames.
//!
//! ESSL 1.00 texture lookups (and their extension variants) have different spellings in desktop GLSL. Core
//! profiles (1.30+) collapse them onto the overloaded `texture*` family; older compatibility profiles only need
//! the extension suffixes swapped for their ARB equivalents.

use super::dialect::OutputDialect;

/// Legacy and extension spellings mapped to the GLSL 1.30+ core family.
pub const LEGACY_TO_CORE: &[(&str, &str)] = &[
    ("texture2D", "texture"),
    ("texture2DProj", "textureProj"),
    ("texture2DLod", "textureLod"),
    ("texture2DProjLod", "textureProjLod"),
    ("texture2DRect", "texture"),
    ("textureCube", "texture"),
    ("textureCubeLod", "textureLod"),
    ("texture2DLodEXT", "textureLod"),
    ("texture2DProjLodEXT", "textureProjLod"),
    ("textureCubeLodEXT", "textureLod"),
    ("texture2DGradEXT", "textureGrad"),
    ("texture2DProjGradEXT", "textureProjGrad"),
    ("textureCubeGradEXT", "textureGrad"),
];

/// Extension spellings mapped to what a pre-1.30 desktop compiler accepts.
pub const EXTENSION_TO_ARB: &[(&str, &str)] = &[
    ("texture2DLodEXT", "texture2DLod"),
    ("texture2DProjLodEXT", "texture2DProjLod"),
    ("textureCubeLodEXT", "textureCubeLod"),
    ("texture2DGradEXT", "texture2DGradARB"),
    ("texture2DProjGradEXT", "texture2DProjGradARB"),
    ("textureCubeGradEXT", "textureCubeGradARB"),
];

/// Rename table that applies to a dialect; ESSL output renames nothing.
pub fn table_for(dialect: OutputDialect) -> &'static [(&'static str, &'static str)] {
    if dialect.is_essl() {
        &[]
    } else if dialect.is_glsl130_or_newer() {
        LEGACY_TO_CORE
    } else {
        EXTENSION_TO_ARB
    }
}

/// Spell a built-in function name for the target dialect.
///
/// ## Examples
/// ```rust
/// use glslout_core::lang::dialect::OutputDialect;
/// use glslout_core::lang::texture_compat::translate;
///
/// assert_eq!(translate("texture2D", OutputDialect::Glsl330Core), "texture");
/// assert_eq!(translate("texture2D", OutputDialect::Essl), "texture2D");
/// ```
pub fn translate(name: &str, dialect: OutputDialect) -> &str {
    table_for(dialect)
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}
