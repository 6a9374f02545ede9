//! Storage qualifiers and their canonical keywords.
//!
//! The canonical keyword is what a dialect that supports every qualifier natively would print. Dialect-specific
//! remapping (e.g. `attribute` → `in`) happens in the renderer on top of this table.
//!
//! ## Notes
//! - `Temporary` and `Global` have an empty keyword; declarations with those qualifiers print no storage keyword.
//! - Several qualifiers share a spelling (`VertexIn`, `FragmentIn` and `In` are all `in`); spellings are not unique.

/// Storage class of a type occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Qualifier {
    /// Function-local temporary.
    #[default]
    Temporary,
    /// Global variable without storage keyword.
    Global,
    Const,
    Attribute,
    VaryingIn,
    VaryingOut,
    Uniform,
    Buffer,
    VertexIn,
    FragmentOut,
    VertexOut,
    FragmentIn,
    In,
    Out,
    InOut,
    ConstReadOnly,
    Smooth,
    Flat,
    Centroid,
    SmoothOut,
    FlatOut,
    CentroidOut,
    SmoothIn,
    FlatIn,
    CentroidIn,
    ComputeIn,
    Shared,
}

/// Every qualifier with its canonical keyword.
pub const QUALIFIERS: &[(Qualifier, &str)] = &[
    (Qualifier::Temporary, ""),
    (Qualifier::Global, ""),
    (Qualifier::Const, "const"),
    (Qualifier::Attribute, "attribute"),
    (Qualifier::VaryingIn, "varying"),
    (Qualifier::VaryingOut, "varying"),
    (Qualifier::Uniform, "uniform"),
    (Qualifier::Buffer, "buffer"),
    (Qualifier::VertexIn, "in"),
    (Qualifier::FragmentOut, "out"),
    (Qualifier::VertexOut, "out"),
    (Qualifier::FragmentIn, "in"),
    (Qualifier::In, "in"),
    (Qualifier::Out, "out"),
    (Qualifier::InOut, "inout"),
    (Qualifier::ConstReadOnly, "const"),
    (Qualifier::Smooth, "smooth"),
    (Qualifier::Flat, "flat"),
    (Qualifier::Centroid, "centroid"),
    (Qualifier::SmoothOut, "smooth out"),
    (Qualifier::FlatOut, "flat out"),
    (Qualifier::CentroidOut, "centroid out"),
    (Qualifier::SmoothIn, "smooth in"),
    (Qualifier::FlatIn, "flat in"),
    (Qualifier::CentroidIn, "centroid in"),
    (Qualifier::ComputeIn, "in"),
    (Qualifier::Shared, "shared"),
];

/// Canonical keyword for a qualifier.
pub fn keyword(qualifier: Qualifier) -> &'static str {
    match qualifier {
        Qualifier::Temporary | Qualifier::Global => "",
        Qualifier::Const | Qualifier::ConstReadOnly => "const",
        Qualifier::Attribute => "attribute",
        Qualifier::VaryingIn | Qualifier::VaryingOut => "varying",
        Qualifier::Uniform => "uniform",
        Qualifier::Buffer => "buffer",
        Qualifier::VertexIn | Qualifier::FragmentIn | Qualifier::In | Qualifier::ComputeIn => "in",
        Qualifier::FragmentOut | Qualifier::VertexOut | Qualifier::Out => "out",
        Qualifier::InOut => "inout",
        Qualifier::Smooth => "smooth",
        Qualifier::Flat => "flat",
        Qualifier::Centroid => "centroid",
        Qualifier::SmoothOut => "smooth out",
        Qualifier::FlatOut => "flat out",
        Qualifier::CentroidOut => "centroid out",
        Qualifier::SmoothIn => "smooth in",
        Qualifier::FlatIn => "flat in",
        Qualifier::CentroidIn => "centroid in",
        Qualifier::Shared => "shared",
    }
}

/// Qualifiers that print nothing in a declaration.
pub fn is_storage_free(qualifier: Qualifier) -> bool {
    matches!(qualifier, Qualifier::Temporary | Qualifier::Global)
}

/// Qualifiers on which an explicit `location` may be written.
pub fn accepts_location(qualifier: Qualifier) -> bool {
    matches!(qualifier, Qualifier::FragmentOut | Qualifier::VertexIn)
}

/// Qualifiers under which an image format layout is legal.
pub fn accepts_image_format(qualifier: Qualifier) -> bool {
    matches!(qualifier, Qualifier::Temporary | Qualifier::Uniform)
}
