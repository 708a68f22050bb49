use num_bigint::BigInt;
use ordered_float::OrderedFloat;

use crate::frontend::token::TokenKind;

/// A numeric literal value, kept exactly as written.
///
/// Integers are arbitrary precision. Floats are wrapped in [`OrderedFloat`]
/// so that whole trees can be compared and hashed structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    /// An integer literal of any size.
    Int(BigInt),
    /// A 64-bit floating-point literal.
    Float(OrderedFloat<f64>),
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{:?}", n.0),
        }
    }
}

/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Name of the variable.
    pub name: String,
}

impl Variable {
    /// Creates a variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An abstract syntax tree node.
///
/// A program is a `Vec<Ast>` of top-level statements in source order. Every
/// node owns its children, so a tree is always finite and unshared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
    /// An integer or floating-point literal.
    NumberLiteral {
        /// The literal value.
        value: Number,
    },
    /// A string literal with escapes already decoded.
    StringLiteral {
        /// The decoded text.
        value: String,
    },
    /// A variable reference.
    Variable(Variable),
    /// A prefix operator applied to one operand.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operator applied to two operands.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Plain (`=`) or augmented (`+=`, `<<=`, ...) assignment to a variable.
    Assignment {
        /// The variable being assigned.
        target: Variable,
        /// Which assignment operator was used.
        op:     AssignOperator,
        /// The assigned (or combined) value.
        value:  Box<Self>,
    },
}

impl Ast {
    /// Builds a numeric literal node.
    ///
    /// ```
    /// use nokch::ast::{Ast, Number};
    ///
    /// assert_eq!(Ast::number(3), Ast::NumberLiteral { value: Number::Int(3.into()) });
    /// ```
    #[must_use]
    pub fn number(value: impl Into<Number>) -> Self {
        Self::NumberLiteral { value: value.into() }
    }

    /// Builds a variable reference node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds an assignment node.
    #[must_use]
    pub fn assignment(target: impl Into<String>, op: AssignOperator, value: Self) -> Self {
        Self::Assignment { target: Variable::new(target),
                           op,
                           value: Box::new(value) }
    }
}

/// Renders the tree as a fully parenthesised prefix expression.
///
/// ```
/// use nokch::ast::{Ast, BinaryOperator};
///
/// let tree = Ast::binary(Ast::number(1),
///                        BinaryOperator::Add,
///                        Ast::binary(Ast::number(2), BinaryOperator::Mul, Ast::number(3)));
///
/// assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
/// ```
impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "{value:?}"),
            Self::Variable(variable) => write!(f, "{}", variable.name),
            Self::UnaryOp { op, operand } => write!(f, "({op} {operand})"),
            Self::BinaryOp { left, op, right } => write!(f, "({op} {left} {right})"),
            Self::Assignment { target, op, value } => {
                write!(f, "({op} {} {value})", target.name)
            },
        }
    }
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`).
    BitNot,
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise or (`|`)
    BitOr,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents an assignment operator: plain `=` or one of the augmented forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
    /// `%=`
    Mod,
    /// `**=`
    Pow,
    /// `//=`
    FloorDiv,
    /// `&=`
    BitAnd,
    /// `|=`
    BitOr,
    /// `^=`
    BitXor,
    /// `<<=`
    ShiftLeft,
    /// `>>=`
    ShiftRight,
}

impl AssignOperator {
    /// The binary operator an augmented assignment combines with, or `None`
    /// for plain `=`.
    ///
    /// ```
    /// use nokch::ast::{AssignOperator, BinaryOperator};
    ///
    /// assert_eq!(AssignOperator::Pow.binary_operator(), Some(BinaryOperator::Pow));
    /// assert_eq!(AssignOperator::Assign.binary_operator(), None);
    /// ```
    #[must_use]
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::Add => Some(BinaryOperator::Add),
            Self::Sub => Some(BinaryOperator::Sub),
            Self::Mul => Some(BinaryOperator::Mul),
            Self::Div => Some(BinaryOperator::Div),
            Self::Mod => Some(BinaryOperator::Mod),
            Self::Pow => Some(BinaryOperator::Pow),
            Self::FloorDiv => Some(BinaryOperator::FloorDiv),
            Self::BitAnd => Some(BinaryOperator::BitAnd),
            Self::BitOr => Some(BinaryOperator::BitOr),
            Self::BitXor => Some(BinaryOperator::BitXor),
            Self::ShiftLeft => Some(BinaryOperator::ShiftLeft),
            Self::ShiftRight => Some(BinaryOperator::ShiftRight),
        }
    }

    /// Maps an assignment-family token to its operator.
    #[must_use]
    pub const fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equals => Some(Self::Assign),
            TokenKind::PlusAssign => Some(Self::Add),
            TokenKind::MinusAssign => Some(Self::Sub),
            TokenKind::StarAssign => Some(Self::Mul),
            TokenKind::SlashAssign => Some(Self::Div),
            TokenKind::PercentAssign => Some(Self::Mod),
            TokenKind::DoubleStarAssign => Some(Self::Pow),
            TokenKind::DoubleSlashAssign => Some(Self::FloorDiv),
            TokenKind::AmpersandAssign => Some(Self::BitAnd),
            TokenKind::PipeAssign => Some(Self::BitOr),
            TokenKind::CaretAssign => Some(Self::BitXor),
            TokenKind::ShiftLeftAssign => Some(Self::ShiftLeft),
            TokenKind::ShiftRightAssign => Some(Self::ShiftRight),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Pow, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            BitAnd => "&",
            BitXor => "^",
            BitOr => "|",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.binary_operator() {
            Some(op) => write!(f, "{op}="),
            None => write!(f, "="),
        }
    }
}
