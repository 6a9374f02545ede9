//! Reserved identifier spellings shared by the renderer and by tooling that reads its output.
//!
//! WebGL reserves the `webgl_` prefix, so user identifiers can never collide with anything spelled here.

/// Prefix for compiler-synthesized (internal) identifiers.
pub const INTERNAL_PREFIX: &str = "webgl_angle_";

/// Prefix for hashed user identifiers.
pub const HASHED_PREFIX: &str = "webgl_";

/// Helper function used by the helper-call index clamping strategy.
pub const INT_CLAMP_HELPER: &str = "webgl_int_clamp";

/// Entry point name. Never renamed.
pub const ENTRY_POINT: &str = "main";

/// Spell an internal identifier.
///
/// ## Examples
/// ```rust
/// assert_eq!(glslout_core::names::internal_name("b"), "webgl_angle_b");
/// ```
pub fn internal_name(name: &str) -> String {
    format!("{INTERNAL_PREFIX}{name}")
}

/// Spell a hashed identifier from its 64-bit hash.
///
/// ## Examples
/// ```rust
/// assert_eq!(glslout_core::names::hashed_name(0xbeef), "webgl_beef");
/// ```
pub fn hashed_name(hash: u64) -> String {
    format!("{HASHED_PREFIX}{hash:x}")
}

/// Spell the emulated replacement of a built-in function.
///
/// ## Examples
/// ```rust
/// assert_eq!(glslout_core::names::emulated_name("atan"), "webgl_atan_emu");
/// ```
pub fn emulated_name(name: &str) -> String {
    format!("{HASHED_PREFIX}{name}_emu")
}

/// Strip the parameter encoding from a mangled function name (`"foo(f1;vf3;"` → `"foo"`).
///
/// Names without an encoded signature are returned unchanged.
pub fn unmangle(mangled: &str) -> &str {
    match mangled.find('(') {
        Some(idx) => &mangled[..idx],
        None => mangled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmangle_strips_signature() {
        assert_eq!(unmangle("foo(f1;vf3;"), "foo");
        assert_eq!(unmangle("main("), "main");
    }

    #[test]
    fn test_unmangle_plain_name_unchanged() {
        assert_eq!(unmangle("foo"), "foo");
        assert_eq!(unmangle(""), "");
    }

    #[test]
    fn test_hashed_name_is_lower_hex() {
        assert_eq!(hashed_name(0xABCDEF), "webgl_abcdef");
        assert_eq!(hashed_name(0), "webgl_0");
    }
}
