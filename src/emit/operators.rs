//! Operator lowering table.
//!
//! Every operator code maps to exactly one output form. The `match`es below are exhaustive over the closed
//! operator enums, so a new operator cannot be added without deciding how it renders.
//!
//! ## Notes
//! - Inline operators are fully parenthesized (`(a + b)`); the output never relies on precedence.
//! - The multiply family (vector/matrix/scalar products and their assigning forms) collapses onto ` * ` and
//!   ` *= `: GLSL does not distinguish them syntactically.

use crate::ir::{BinaryOp, BuiltInOp, UnaryOp};

/// Prefix, separator and suffix written around an operator's operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Triplet {
    pub(crate) pre: &'static str,
    pub(crate) sep: &'static str,
    pub(crate) post: &'static str,
}

const fn triplet(pre: &'static str, sep: &'static str, post: &'static str) -> Triplet {
    Triplet { pre, sep, post }
}

const fn infix(sep: &'static str) -> BinaryLowering {
    BinaryLowering::Inline(triplet("(", sep, ")"))
}

/// How a unary operator is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lowering {
    /// Operand wrapped in a triplet.
    Inline(Triplet),
    /// Call of a built-in function; the name may be replaced by its emulation.
    Function(&'static str),
}

/// How a binary operator is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryLowering {
    /// `pre left sep right post`
    Inline(Triplet),
    /// `left.field`, with the field chosen by a constant index.
    FieldSelect,
}

pub(crate) fn lower_unary(op: UnaryOp) -> Lowering {
    use UnaryOp::*;
    match op {
        Negative => Lowering::Inline(triplet("(-", "", ")")),
        Positive => Lowering::Inline(triplet("(+", "", ")")),
        LogicalNot => Lowering::Inline(triplet("(!", "", ")")),
        BitwiseNot => Lowering::Inline(triplet("(~", "", ")")),
        PostIncrement => Lowering::Inline(triplet("(", "", "++)")),
        PostDecrement => Lowering::Inline(triplet("(", "", "--)")),
        PreIncrement => Lowering::Inline(triplet("(++", "", ")")),
        PreDecrement => Lowering::Inline(triplet("(--", "", ")")),
        VectorLogicalNot => Lowering::Function("not"),

        Radians => Lowering::Function("radians"),
        Degrees => Lowering::Function("degrees"),
        Sin => Lowering::Function("sin"),
        Cos => Lowering::Function("cos"),
        Tan => Lowering::Function("tan"),
        Asin => Lowering::Function("asin"),
        Acos => Lowering::Function("acos"),
        Atan => Lowering::Function("atan"),
        Sinh => Lowering::Function("sinh"),
        Cosh => Lowering::Function("cosh"),
        Tanh => Lowering::Function("tanh"),
        Asinh => Lowering::Function("asinh"),
        Acosh => Lowering::Function("acosh"),
        Atanh => Lowering::Function("atanh"),

        Exp => Lowering::Function("exp"),
        Log => Lowering::Function("log"),
        Exp2 => Lowering::Function("exp2"),
        Log2 => Lowering::Function("log2"),
        Sqrt => Lowering::Function("sqrt"),
        InverseSqrt => Lowering::Function("inversesqrt"),

        Abs => Lowering::Function("abs"),
        Sign => Lowering::Function("sign"),
        Floor => Lowering::Function("floor"),
        Trunc => Lowering::Function("trunc"),
        Round => Lowering::Function("round"),
        RoundEven => Lowering::Function("roundEven"),
        Ceil => Lowering::Function("ceil"),
        Fract => Lowering::Function("fract"),
        IsNan => Lowering::Function("isnan"),
        IsInf => Lowering::Function("isinf"),

        FloatBitsToInt => Lowering::Function("floatBitsToInt"),
        FloatBitsToUint => Lowering::Function("floatBitsToUint"),
        IntBitsToFloat => Lowering::Function("intBitsToFloat"),
        UintBitsToFloat => Lowering::Function("uintBitsToFloat"),

        PackSnorm2x16 => Lowering::Function("packSnorm2x16"),
        PackUnorm2x16 => Lowering::Function("packUnorm2x16"),
        PackHalf2x16 => Lowering::Function("packHalf2x16"),
        UnpackSnorm2x16 => Lowering::Function("unpackSnorm2x16"),
        UnpackUnorm2x16 => Lowering::Function("unpackUnorm2x16"),
        UnpackHalf2x16 => Lowering::Function("unpackHalf2x16"),

        Length => Lowering::Function("length"),
        Normalize => Lowering::Function("normalize"),

        DFdx => Lowering::Function("dFdx"),
        DFdy => Lowering::Function("dFdy"),
        Fwidth => Lowering::Function("fwidth"),

        Transpose => Lowering::Function("transpose"),
        Determinant => Lowering::Function("determinant"),
        Inverse => Lowering::Function("inverse"),

        Any => Lowering::Function("any"),
        All => Lowering::Function("all"),
    }
}

/// Lowering of a binary operator. Indirect indexing may additionally get a clamp, see `expressions`.
pub(crate) fn lower_binary(op: BinaryOp) -> BinaryLowering {
    use BinaryOp::*;
    match op {
        Comma => infix(", "),

        Assign => infix(" = "),
        AddAssign => infix(" += "),
        SubAssign => infix(" -= "),
        DivAssign => infix(" /= "),
        IModAssign => infix(" %= "),
        MulAssign | VectorTimesMatrixAssign | VectorTimesScalarAssign | MatrixTimesScalarAssign
        | MatrixTimesMatrixAssign => infix(" *= "),
        BitShiftLeftAssign => infix(" <<= "),
        BitShiftRightAssign => infix(" >>= "),
        BitwiseAndAssign => infix(" &= "),
        BitwiseXorAssign => infix(" ^= "),
        BitwiseOrAssign => infix(" |= "),

        IndexDirect | IndexIndirect => BinaryLowering::Inline(triplet("", "[", "]")),
        IndexDirectStruct | IndexDirectInterfaceBlock => BinaryLowering::FieldSelect,

        Add => infix(" + "),
        Sub => infix(" - "),
        Mul | VectorTimesScalar | VectorTimesMatrix | MatrixTimesVector | MatrixTimesScalar
        | MatrixTimesMatrix => infix(" * "),
        Div => infix(" / "),
        IMod => infix(" % "),
        BitShiftLeft => infix(" << "),
        BitShiftRight => infix(" >> "),
        BitwiseAnd => infix(" & "),
        BitwiseXor => infix(" ^ "),
        BitwiseOr => infix(" | "),

        Equal => infix(" == "),
        NotEqual => infix(" != "),
        LessThan => infix(" < "),
        GreaterThan => infix(" > "),
        LessThanEqual => infix(" <= "),
        GreaterThanEqual => infix(" >= "),

        LogicalOr => infix(" || "),
        LogicalXor => infix(" ^^ "),
        LogicalAnd => infix(" && "),
    }
}

/// Function name of a multi-argument intrinsic.
pub(crate) fn builtin_function_name(op: BuiltInOp) -> &'static str {
    use BuiltInOp::*;
    match op {
        OuterProduct => "outerProduct",
        LessThan => "lessThan",
        GreaterThan => "greaterThan",
        LessThanEqual => "lessThanEqual",
        GreaterThanEqual => "greaterThanEqual",
        VectorEqual => "equal",
        VectorNotEqual => "notEqual",
        Mod => "mod",
        Modf => "modf",
        Pow => "pow",
        Atan => "atan",
        Min => "min",
        Max => "max",
        Clamp => "clamp",
        Mix => "mix",
        Step => "step",
        SmoothStep => "smoothstep",
        Distance => "distance",
        Dot => "dot",
        Cross => "cross",
        FaceForward => "faceforward",
        Reflect => "reflect",
        Refract => "refract",
        MatrixCompMult => "matrixCompMult",
    }
}
