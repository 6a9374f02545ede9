//! IR operator codes.
//!
//! Operator codes are closed enums so that the lowering table in `emit::operators` is checked for exhaustiveness
//! at compile time. Variants that the output language does not distinguish syntactically (the multiply family)
//! are still kept apart here: they are distinct operations to the type checker that produced the tree.

/// One-operand operators and intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negative,
    Positive,
    LogicalNot,
    VectorLogicalNot,
    BitwiseNot,
    PostIncrement,
    PostDecrement,
    PreIncrement,
    PreDecrement,

    Radians,
    Degrees,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,

    Exp,
    Log,
    Exp2,
    Log2,
    Sqrt,
    InverseSqrt,

    Abs,
    Sign,
    Floor,
    Trunc,
    Round,
    RoundEven,
    Ceil,
    Fract,
    IsNan,
    IsInf,

    FloatBitsToInt,
    FloatBitsToUint,
    IntBitsToFloat,
    UintBitsToFloat,

    PackSnorm2x16,
    PackUnorm2x16,
    PackHalf2x16,
    UnpackSnorm2x16,
    UnpackUnorm2x16,
    UnpackHalf2x16,

    Length,
    Normalize,

    DFdx,
    DFdy,
    Fwidth,

    Transpose,
    Determinant,
    Inverse,

    Any,
    All,
}

/// Two-operand operators, including assignments and indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Comma,

    Assign,
    AddAssign,
    SubAssign,
    DivAssign,
    IModAssign,
    MulAssign,
    VectorTimesMatrixAssign,
    VectorTimesScalarAssign,
    MatrixTimesScalarAssign,
    MatrixTimesMatrixAssign,
    BitShiftLeftAssign,
    BitShiftRightAssign,
    BitwiseAndAssign,
    BitwiseXorAssign,
    BitwiseOrAssign,

    /// `a[<constant>]`
    IndexDirect,
    /// `a[<expression>]`, optionally clamped
    IndexIndirect,
    /// `s.field` where the right operand is the constant field index
    IndexDirectStruct,
    /// `block.field` where the right operand is the constant field index
    IndexDirectInterfaceBlock,

    Add,
    Sub,
    Mul,
    Div,
    IMod,
    BitShiftLeft,
    BitShiftRight,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,

    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,

    VectorTimesScalar,
    VectorTimesMatrix,
    MatrixTimesVector,
    MatrixTimesScalar,
    MatrixTimesMatrix,

    LogicalOr,
    LogicalXor,
    LogicalAnd,
}

/// Multi-argument built-in intrinsics carried by aggregate nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInOp {
    OuterProduct,

    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    VectorEqual,
    VectorNotEqual,

    Mod,
    Modf,
    Pow,
    Atan,
    Min,
    Max,
    Clamp,
    Mix,
    Step,
    SmoothStep,

    Distance,
    Dot,
    Cross,
    FaceForward,
    Reflect,
    Refract,
    MatrixCompMult,
}
