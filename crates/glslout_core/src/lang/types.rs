//! Basic types, precisions and built-in type names.
//!
//! ## Notes
//! - A vector or matrix is a scalar basic type plus a shape: `cols` is the vector size (or matrix column count) and
//!   `rows` is the matrix row count (1 for non-matrices).
//! - `Struct` and `InterfaceBlock` have no built-in spelling; their names come from the user program.

/// Basic kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasicType {
    #[default]
    Void,
    Float,
    Int,
    UInt,
    Bool,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    Sampler2DArray,
    SamplerExternalOes,
    Sampler2DRect,
    ISampler2D,
    ISampler3D,
    ISamplerCube,
    ISampler2DArray,
    USampler2D,
    USampler3D,
    USamplerCube,
    USampler2DArray,
    Sampler2DShadow,
    SamplerCubeShadow,
    Sampler2DArrayShadow,
    Image2D,
    IImage2D,
    UImage2D,
    Image3D,
    IImage3D,
    UImage3D,
    Image2DArray,
    IImage2DArray,
    UImage2DArray,
    ImageCube,
    IImageCube,
    UImageCube,
    Struct,
    InterfaceBlock,
}

impl BasicType {
    pub fn is_image(self) -> bool {
        matches!(
            self,
            BasicType::Image2D
                | BasicType::IImage2D
                | BasicType::UImage2D
                | BasicType::Image3D
                | BasicType::IImage3D
                | BasicType::UImage3D
                | BasicType::Image2DArray
                | BasicType::IImage2DArray
                | BasicType::UImage2DArray
                | BasicType::ImageCube
                | BasicType::IImageCube
                | BasicType::UImageCube
        )
    }
}

/// Spelling of opaque (sampler/image) and void types.
fn opaque_name(basic: BasicType) -> Option<&'static str> {
    let name = match basic {
        BasicType::Void => "void",
        BasicType::Sampler2D => "sampler2D",
        BasicType::Sampler3D => "sampler3D",
        BasicType::SamplerCube => "samplerCube",
        BasicType::Sampler2DArray => "sampler2DArray",
        BasicType::SamplerExternalOes => "samplerExternalOES",
        BasicType::Sampler2DRect => "sampler2DRect",
        BasicType::ISampler2D => "isampler2D",
        BasicType::ISampler3D => "isampler3D",
        BasicType::ISamplerCube => "isamplerCube",
        BasicType::ISampler2DArray => "isampler2DArray",
        BasicType::USampler2D => "usampler2D",
        BasicType::USampler3D => "usampler3D",
        BasicType::USamplerCube => "usamplerCube",
        BasicType::USampler2DArray => "usampler2DArray",
        BasicType::Sampler2DShadow => "sampler2DShadow",
        BasicType::SamplerCubeShadow => "samplerCubeShadow",
        BasicType::Sampler2DArrayShadow => "sampler2DArrayShadow",
        BasicType::Image2D => "image2D",
        BasicType::IImage2D => "iimage2D",
        BasicType::UImage2D => "uimage2D",
        BasicType::Image3D => "image3D",
        BasicType::IImage3D => "iimage3D",
        BasicType::UImage3D => "uimage3D",
        BasicType::Image2DArray => "image2DArray",
        BasicType::IImage2DArray => "iimage2DArray",
        BasicType::UImage2DArray => "uimage2DArray",
        BasicType::ImageCube => "imageCube",
        BasicType::IImageCube => "iimageCube",
        BasicType::UImageCube => "uimageCube",
        BasicType::Float
        | BasicType::Int
        | BasicType::UInt
        | BasicType::Bool
        | BasicType::Struct
        | BasicType::InterfaceBlock => return None,
    };
    Some(name)
}

/// Built-in type name for a basic type with the given shape.
///
/// Returns `None` for struct and interface-block types, and for shapes the language cannot spell (non-float
/// matrices, vectors wider than 4).
///
/// ## Examples
/// ```rust
/// use glslout_core::lang::types::{builtin_type_name, BasicType};
///
/// assert_eq!(builtin_type_name(BasicType::Float, 3, 1).as_deref(), Some("vec3"));
/// assert_eq!(builtin_type_name(BasicType::Float, 2, 3).as_deref(), Some("mat2x3"));
/// assert_eq!(builtin_type_name(BasicType::UInt, 1, 1).as_deref(), Some("uint"));
/// ```
pub fn builtin_type_name(basic: BasicType, cols: u8, rows: u8) -> Option<String> {
    if let Some(name) = opaque_name(basic) {
        return Some(name.to_string());
    }
    if !(1..=4).contains(&cols) || !(1..=4).contains(&rows) {
        return None;
    }
    let (scalar, vector_prefix) = match basic {
        BasicType::Float => ("float", "vec"),
        BasicType::Int => ("int", "ivec"),
        BasicType::UInt => ("uint", "uvec"),
        BasicType::Bool => ("bool", "bvec"),
        _ => return None,
    };
    if rows > 1 {
        if basic != BasicType::Float || cols < 2 {
            return None;
        }
        return Some(if cols == rows {
            format!("mat{cols}")
        } else {
            format!("mat{cols}x{rows}")
        });
    }
    Some(if cols == 1 {
        scalar.to_string()
    } else {
        format!("{vector_prefix}{cols}")
    })
}

/// Precision qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    #[default]
    Undefined,
    Low,
    Medium,
    High,
}

/// Precision keyword; `None` when the precision is undefined.
pub fn precision_keyword(precision: Precision) -> Option<&'static str> {
    match precision {
        Precision::Undefined => None,
        Precision::Low => Some("lowp"),
        Precision::Medium => Some("mediump"),
        Precision::High => Some("highp"),
    }
}
