//! Define error types for IR → GLSL rendering.
//!
//! Every variant is an upstream contract violation: the IR reaching the renderer was built or transformed
//! incorrectly. None of them describe bad end-user input, and a pass that hits one produces no output at all.

use thiserror::Error;

/// Error during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("malformed {construct}: {detail}")]
    Malformed { construct: &'static str, detail: String },

    #[error("zero-length array `{0}` reached index clamping")]
    ZeroLengthArray(String),

    #[error("constant of type `{ty}` needs {needed} values but only {available} remain")]
    ConstantUnderflow { ty: String, needed: usize, available: usize },

    #[error("field index {index} out of range for `{owner}` with {count} fields")]
    FieldIndexOutOfRange { owner: String, index: usize, count: usize },

    #[error("memory qualifier `{qualifier}` on a non-image type")]
    MemoryQualifierOnNonImage { qualifier: &'static str },

    #[error("image format layout on a `{qualifier}` declaration")]
    ImageFormatContext { qualifier: String },

    #[error("cannot unroll loop: {0}")]
    Unroll(String),

    #[error("type has no spelling: {0}")]
    UnnamedType(String),

    #[error("struct `{0}` is used as a member type before its declaration")]
    UndeclaredMemberStruct(String),
}

impl EmitError {
    pub(crate) fn malformed(construct: &'static str, detail: impl Into<String>) -> Self {
        EmitError::Malformed {
            construct,
            detail: detail.into(),
        }
    }
}
