//! Built-in symbol registry.
//!
//! Built-in variables, functions and structs are never renamed by the renderer. Availability is scoped by the
//! *source* shading-language version (100, 300, 310): a name that is only built-in from 3.00 on is an ordinary
//! user identifier in a 1.00 shader.
//!
//! ## Notes
//! - Functions are keyed by their unmangled name; overloads share one entry.
//! - Lookup via [`find`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use glslout_core::lang::builtins::{self, BuiltInKind};
//!
//! assert_eq!(builtins::find("gl_Position", 100).map(|s| s.kind), Some(BuiltInKind::Variable));
//! assert!(builtins::find("gl_VertexID", 100).is_none());
//! assert!(builtins::find("gl_VertexID", 300).is_some());
//! ```

/// What kind of entity a built-in name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInKind {
    Variable,
    Function,
    Struct,
}

/// Metadata for one built-in symbol.
#[derive(Debug, Clone, Copy)]
pub struct BuiltInSymbol {
    pub name: &'static str,
    pub kind: BuiltInKind,
    /// First source version that defines the symbol.
    pub since: u32,
    /// First source version that no longer defines it.
    pub removed_in: Option<u32>,
}

impl BuiltInSymbol {
    pub fn available_in(&self, version: u32) -> bool {
        version >= self.since && self.removed_in.is_none_or(|removed| version < removed)
    }
}

const fn var(name: &'static str, since: u32) -> BuiltInSymbol {
    BuiltInSymbol {
        name,
        kind: BuiltInKind::Variable,
        since,
        removed_in: None,
    }
}

const fn legacy_var(name: &'static str, removed_in: u32) -> BuiltInSymbol {
    BuiltInSymbol {
        name,
        kind: BuiltInKind::Variable,
        since: 100,
        removed_in: Some(removed_in),
    }
}

const fn func(name: &'static str, since: u32) -> BuiltInSymbol {
    BuiltInSymbol {
        name,
        kind: BuiltInKind::Function,
        since,
        removed_in: None,
    }
}

const fn legacy_func(name: &'static str, removed_in: u32) -> BuiltInSymbol {
    BuiltInSymbol {
        name,
        kind: BuiltInKind::Function,
        since: 100,
        removed_in: Some(removed_in),
    }
}

/// Registry of all built-in symbols.
pub const BUILTIN_SYMBOLS: &[BuiltInSymbol] = &[
    // Structs
    BuiltInSymbol {
        name: "gl_DepthRangeParameters",
        kind: BuiltInKind::Struct,
        since: 100,
        removed_in: None,
    },
    // Variables
    var("gl_Position", 100),
    var("gl_PointSize", 100),
    var("gl_FragCoord", 100),
    var("gl_FrontFacing", 100),
    var("gl_PointCoord", 100),
    var("gl_DepthRange", 100),
    var("gl_MaxVertexAttribs", 100),
    var("gl_MaxVertexUniformVectors", 100),
    var("gl_MaxVaryingVectors", 100),
    var("gl_MaxVertexTextureImageUnits", 100),
    var("gl_MaxCombinedTextureImageUnits", 100),
    var("gl_MaxTextureImageUnits", 100),
    var("gl_MaxFragmentUniformVectors", 100),
    var("gl_MaxDrawBuffers", 100),
    legacy_var("gl_FragColor", 300),
    legacy_var("gl_FragData", 300),
    legacy_var("gl_FragDepthEXT", 300),
    var("gl_FragDepth", 300),
    var("gl_VertexID", 300),
    var("gl_InstanceID", 300),
    var("gl_NumWorkGroups", 310),
    var("gl_WorkGroupSize", 310),
    var("gl_WorkGroupID", 310),
    var("gl_LocalInvocationID", 310),
    var("gl_GlobalInvocationID", 310),
    var("gl_LocalInvocationIndex", 310),
    // Legacy texture functions
    legacy_func("texture2D", 300),
    legacy_func("texture2DProj", 300),
    legacy_func("texture2DLod", 300),
    legacy_func("texture2DProjLod", 300),
    legacy_func("textureCube", 300),
    legacy_func("textureCubeLod", 300),
    legacy_func("texture2DRect", 300),
    legacy_func("texture2DLodEXT", 300),
    legacy_func("texture2DProjLodEXT", 300),
    legacy_func("textureCubeLodEXT", 300),
    legacy_func("texture2DGradEXT", 300),
    legacy_func("texture2DProjGradEXT", 300),
    legacy_func("textureCubeGradEXT", 300),
    // Core texture and image functions
    func("texture", 300),
    func("textureProj", 300),
    func("textureLod", 300),
    func("textureProjLod", 300),
    func("textureOffset", 300),
    func("textureProjOffset", 300),
    func("textureLodOffset", 300),
    func("textureProjLodOffset", 300),
    func("textureGrad", 300),
    func("textureGradOffset", 300),
    func("textureProjGrad", 300),
    func("textureProjGradOffset", 300),
    func("textureSize", 300),
    func("texelFetch", 300),
    func("texelFetchOffset", 300),
    func("imageSize", 310),
    func("imageLoad", 310),
    func("imageStore", 310),
    func("memoryBarrier", 310),
    func("barrier", 310),
];

/// Find a built-in symbol available in the given source version.
pub fn find(name: &str, version: u32) -> Option<&'static BuiltInSymbol> {
    BUILTIN_SYMBOLS
        .iter()
        .find(|symbol| symbol.name == name && symbol.available_in(version))
}

/// Check whether `name` is a built-in struct in the given source version.
pub fn is_builtin_struct(name: &str, version: u32) -> bool {
    find(name, version).is_some_and(|symbol| symbol.kind == BuiltInKind::Struct)
}
