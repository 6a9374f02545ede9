//! Constant values.
//!
//! A constant carries its values flattened depth-first. [`GlslEmitter::render_constant`] renders the prefix that
//! belongs to one type and hands back the remaining slice, so nested struct and array constants compose by
//! threading the slice through.

use glslout_core::lang::types::BasicType;

use super::types::{array_brackets, struct_def};
use super::{EmitError, GlslEmitter, NameMap};
use crate::ir::{ConstValue, Type};

/// Magnitude from which finite floats switch to exponent notation.
const EXPONENT_THRESHOLD: f32 = 1.0e7;

impl GlslEmitter<'_> {
    /// Render the constant of type `ty` at the front of `values`, returning the text and the unconsumed values.
    pub(crate) fn render_constant<'v>(
        &self,
        names: &mut NameMap,
        ty: &Type,
        values: &'v [ConstValue],
    ) -> Result<(String, &'v [ConstValue]), EmitError> {
        if let Some(count) = ty.array_size {
            let element = ty.element_type();
            let mut text = format!("{}{}(", self.type_name(names, &element)?, array_brackets(ty));
            let mut rest = values;
            for i in 0..count {
                if i > 0 {
                    text.push_str(", ");
                }
                let (item, remaining) = self.render_constant(names, &element, rest)?;
                text.push_str(&item);
                rest = remaining;
            }
            text.push(')');
            return Ok((text, rest));
        }

        if ty.basic == BasicType::Struct {
            let def = struct_def(ty)?;
            let mut text = format!("{}(", self.hash_type_name(names, &def.name));
            let mut rest = values;
            for (i, field) in def.fields.iter().enumerate() {
                if i > 0 {
                    text.push_str(", ");
                }
                let (item, remaining) = self.render_constant(names, &field.ty, rest)?;
                text.push_str(&item);
                rest = remaining;
            }
            text.push(')');
            return Ok((text, rest));
        }

        let size = ty.element_component_count();
        if values.len() < size {
            return Err(EmitError::ConstantUnderflow {
                ty: self.type_name(names, ty)?,
                needed: size,
                available: values.len(),
            });
        }
        let (head, rest) = values.split_at(size);
        let items: Vec<String> = head.iter().map(|value| self.scalar_literal(*value)).collect();
        let text = if size > 1 {
            format!("{}({})", self.type_name(names, ty)?, items.join(", "))
        } else {
            items.concat()
        };
        Ok((text, rest))
    }

    fn scalar_literal(&self, value: ConstValue) -> String {
        match value {
            ConstValue::Float(f) => self.float_literal(f),
            ConstValue::Int(i) => i.to_string(),
            ConstValue::UInt(u) => format!("{u}u"),
            ConstValue::Bool(b) => b.to_string(),
        }
    }

    /// Float literal. NaN and infinities are bit-cast when the target can, and clamped to the finite range
    /// otherwise (NaN lands on `-FLT_MAX`).
    pub(crate) fn float_literal(&self, value: f32) -> String {
        if !value.is_finite() && self.config.supports_bit_cast() {
            return format!("uintBitsToFloat({}u)", value.to_bits());
        }
        let clamped = if value.is_nan() {
            -f32::MAX
        } else {
            value.clamp(-f32::MAX, f32::MAX)
        };
        format_finite(clamped)
    }
}

/// Finite float spelling that always parses back as a float (`1.0`, `0.25`, `3.4028235e38`).
fn format_finite(value: f32) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        format!("{value:e}")
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::ir::{Field, StructDef, StructId};
    use std::sync::Arc;

    fn emitter(version: u32) -> GlslEmitter<'static> {
        GlslEmitter::with_defaults(RenderConfig::default().with_shader_version(version))
    }

    fn floats(values: &[f32]) -> Vec<ConstValue> {
        values.iter().copied().map(ConstValue::Float).collect()
    }

    // ========================================
    // Scalar and vector tests
    // ========================================

    #[test]
    fn test_vec3_constant() {
        let values = floats(&[1.0, 2.0, 3.0]);
        let (text, rest) = emitter(100)
            .render_constant(&mut NameMap::new(), &Type::vector(BasicType::Float, 3), &values)
            .unwrap();
        assert_eq!(text, "vec3(1.0, 2.0, 3.0)");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_scalar_kinds() {
        let e = emitter(300);
        let mut names = NameMap::new();
        let cases = [
            (Type::scalar(BasicType::Int), ConstValue::Int(-4), "-4"),
            (Type::scalar(BasicType::UInt), ConstValue::UInt(7), "7u"),
            (Type::scalar(BasicType::Bool), ConstValue::Bool(true), "true"),
            (Type::scalar(BasicType::Float), ConstValue::Float(0.5), "0.5"),
        ];
        for (ty, value, expected) in cases {
            let (text, _) = e.render_constant(&mut names, &ty, &[value]).unwrap();
            assert_eq!(text, expected);
        }
    }

    #[test]
    fn test_matrix_consumes_all_components() {
        let values = floats(&[1.0, 0.0, 0.0, 1.0, 9.0]);
        let (text, rest) = emitter(100)
            .render_constant(&mut NameMap::new(), &Type::matrix(2, 2), &values)
            .unwrap();
        assert_eq!(text, "mat2(1.0, 0.0, 0.0, 1.0)");
        assert_eq!(rest, &[ConstValue::Float(9.0)]);
    }

    #[test]
    fn test_underflow_is_an_error() {
        let values = floats(&[1.0, 2.0]);
        let err = emitter(100)
            .render_constant(&mut NameMap::new(), &Type::vector(BasicType::Float, 3), &values)
            .unwrap_err();
        assert_eq!(
            err,
            EmitError::ConstantUnderflow {
                ty: "vec3".to_string(),
                needed: 3,
                available: 2
            }
        );
    }

    // ========================================
    // Aggregate tests
    // ========================================

    #[test]
    fn test_struct_constant_threads_values() {
        let def = StructDef::new(
            StructId(1),
            "Pair",
            vec![
                Field::new("a", Type::vector(BasicType::Float, 2)),
                Field::new("b", Type::scalar(BasicType::Int)),
            ],
        );
        let values = vec![ConstValue::Float(1.0), ConstValue::Float(2.5), ConstValue::Int(3)];
        let (text, rest) = emitter(100)
            .render_constant(&mut NameMap::new(), &Type::structure(Arc::clone(&def)), &values)
            .unwrap();
        assert_eq!(text, "Pair(vec2(1.0, 2.5), 3)");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_array_constant() {
        let values = vec![ConstValue::Int(1), ConstValue::Int(2), ConstValue::Int(3)];
        let ty = Type::scalar(BasicType::Int).with_array_size(3);
        let (text, _) = emitter(300).render_constant(&mut NameMap::new(), &ty, &values).unwrap();
        assert_eq!(text, "int[3](1, 2, 3)");
    }

    // ========================================
    // Float edge case tests
    // ========================================

    #[test]
    fn test_special_floats_bit_cast_on_essl3() {
        let e = emitter(300);
        assert_eq!(e.float_literal(f32::INFINITY), "uintBitsToFloat(2139095040u)");
        assert_eq!(e.float_literal(f32::NEG_INFINITY), "uintBitsToFloat(4286578688u)");
        assert_eq!(e.float_literal(f32::NAN), format!("uintBitsToFloat({}u)", f32::NAN.to_bits()));
    }

    #[test]
    fn test_special_floats_clamped_on_essl1() {
        let e = emitter(100);
        assert_eq!(e.float_literal(f32::INFINITY), "3.4028235e38");
        assert_eq!(e.float_literal(f32::NEG_INFINITY), "-3.4028235e38");
        assert_eq!(e.float_literal(f32::NAN), "-3.4028235e38");
    }

    #[test]
    fn test_float_spelling_always_float() {
        let e = emitter(100);
        assert_eq!(e.float_literal(1.0), "1.0");
        assert_eq!(e.float_literal(-2.0), "-2.0");
        assert_eq!(e.float_literal(0.25), "0.25");
        assert_eq!(e.float_literal(1.0e8), "1e8");
    }
}
