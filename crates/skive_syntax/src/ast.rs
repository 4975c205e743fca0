//! Abstract Syntax Tree definitions for Skive
//!
//! Every node kind is a closed enum case so the emitter's `match`es are exhaustive. Nodes own their children
//! (`Box`/`Vec`, no sharing) and are never mutated after the parser builds them.

use std::fmt;

use skive_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifier spelling
pub type Ident = String;

/// A program is the top-level statement sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `struct Name fields end`
    Struct(StructDecl),
    /// `fn name(params) -> T body end`
    Func(FuncDecl),
    /// `return expr`
    Return(Expr),
    /// `if cond then ... else ... end`
    If(IfStmt),
    /// `while cond do ... end`
    While(WhileStmt),
    /// `let name: T = expr`
    Let(LetStmt),
    /// `target op value`
    Assign(AssignStmt),
    /// Bare expression statement
    Expr(Expr),
}

/// `identifier (: type)?`, used for struct fields and parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Ident,
    pub fields: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Statement>,
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: Ident,
    pub ty: Option<Type>,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Expr,
    pub op: AssignOp,
    pub value: Expr,
}

/// Assignment operators; emitted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
}

impl AssignOp {
    /// Map an assignment operator token to its AST form.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Eq => Some(AssignOp::Assign),
            OperatorId::PlusEq => Some(AssignOp::AddAssign),
            OperatorId::MinusEq => Some(AssignOp::SubAssign),
            OperatorId::StarEq => Some(AssignOp::MulAssign),
            _ => None,
        }
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            AssignOp::Assign => OperatorId::Eq,
            AssignOp::AddAssign => OperatorId::PlusEq,
            AssignOp::SubAssign => OperatorId::MinusEq,
            AssignOp::MulAssign => OperatorId::StarEq,
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `if cond then a else b` in expression position
    Ternary(Box<TernaryExpr>),
    /// `fn [captures](params) -> T do ... end` or `fn (params) => expr`
    Closure(Box<ClosureExpr>),
    /// `callee(args)`
    Call(Box<Expr>, Vec<Expr>),
    /// `value[index]`
    Index(Box<Expr>, Box<Expr>),
    /// `value.field`
    Member(Box<Expr>, Ident),
    /// `left op right`
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    /// `-x`, `not x`
    Unary(UnaryOp, Box<Expr>),
    Literal(Literal),
    Ident(Ident),
}

impl Expr {
    /// Build a binary node.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: Expr,
    pub then_expr: Expr,
    pub else_expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosureExpr {
    /// `None` when no `[...]` capture list was written (distinct from an empty list).
    pub captures: Option<Vec<Ident>>,
    pub params: Vec<Param>,
    pub return_type: Option<Type>,
    pub body: ClosureBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClosureBody {
    /// `do statements end`
    Block(Vec<Statement>),
    /// `=> expr`
    Expr(Expr),
}

/// Literal values keep their source text; interpretation happens at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `0x1F`
    Hex(String),
    /// `42`
    Int(String),
    /// `3.14`, or `3.` with no fractional digits
    Float(String),
    /// `'a'`, `'\''` (quotes included)
    Char(String),
    /// `"text"` (quotes and escapes included)
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOp {
    /// Map an operator id to a binary operator, if it is one.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Mod,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::And => BinaryOp::And,
            OperatorId::Or => BinaryOp::Or,
            OperatorId::Not | OperatorId::Eq | OperatorId::PlusEq | OperatorId::MinusEq | OperatorId::StarEq => {
                return None;
            }
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Mod => OperatorId::Percent,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::And => OperatorId::And,
            BinaryOp::Or => OperatorId::Or,
        }
    }

    /// Binding strength from the operator registry. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        operators::info_for(self.operator_id()).precedence
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "not"),
        }
    }
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Simple type: `int`, `Point`
    Simple(Ident),
    /// Generic type: `Own<Point>`, `Vec<int>`
    Generic(Ident, Vec<Type>),
}

impl Type {
    /// The base name of the type, without parameters.
    pub fn name(&self) -> &str {
        match self {
            Type::Simple(name) | Type::Generic(name, _) => name,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Simple(name) => write!(f, "{}", name),
            Type::Generic(name, args) => {
                write!(f, "{}<", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_precedence_comes_from_registry() {
        assert_eq!(BinaryOp::Mul.precedence(), 12);
        assert_eq!(BinaryOp::Add.precedence(), 11);
        assert_eq!(BinaryOp::Lt.precedence(), 9);
        assert_eq!(BinaryOp::Eq.precedence(), 8);
        assert_eq!(BinaryOp::And.precedence(), 4);
        assert_eq!(BinaryOp::Or.precedence(), 3);
    }

    #[test]
    fn test_binary_op_operator_round_trip() {
        for op in [
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Mod,
            BinaryOp::Lt,
            BinaryOp::LtEq,
            BinaryOp::Gt,
            BinaryOp::GtEq,
            BinaryOp::Eq,
            BinaryOp::NotEq,
            BinaryOp::And,
            BinaryOp::Or,
        ] {
            assert_eq!(BinaryOp::from_operator(op.operator_id()), Some(op));
        }
        assert_eq!(BinaryOp::from_operator(OperatorId::PlusEq), None);
    }

    #[test]
    fn test_type_display() {
        let ty = Type::Generic(
            "Own".into(),
            vec![Type::Generic("Vec".into(), vec![Type::Simple("int".into())])],
        );
        assert_eq!(ty.to_string(), "Own<Vec<int>>");
        assert_eq!(ty.name(), "Own");
    }

    #[test]
    fn test_assign_op_display() {
        assert_eq!(AssignOp::Assign.to_string(), "=");
        assert_eq!(AssignOp::MulAssign.to_string(), "*=");
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(1, 6).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        assert_eq!(Span::new(4, 2).len(), 0);
    }
}
