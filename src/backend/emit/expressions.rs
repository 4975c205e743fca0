//! Expression lowering.
//!
//! Expressions lower to a single C expression string. Every binary, unary and ternary node is
//! parenthesized, so the output never depends on C's precedence table.

use skive_core::lang::runtime;
use skive_syntax::ast::{BinaryOp, Expr, Literal, UnaryOp};

use super::{EmitError, EmitResult, Emitter};

impl Emitter {
    pub(super) fn lower_expr(&self, expr: &Expr) -> EmitResult<String> {
        match expr {
            Expr::Ternary(ternary) => Ok(format!(
                "({} ? {} : {})",
                self.lower_expr(&ternary.condition)?,
                self.lower_expr(&ternary.then_expr)?,
                self.lower_expr(&ternary.else_expr)?
            )),
            Expr::Closure(_) => Err(EmitError::unsupported("closures")),
            Expr::Call(callee, args) => self.lower_call(callee, args),
            Expr::Index(value, index) => Ok(format!(
                "{}({}, {})",
                runtime::VEC_GET,
                self.lower_expr(value)?,
                self.lower_expr(index)?
            )),
            Expr::Member(value, field) => Ok(format!("{}->{field}", self.lower_expr(value)?)),
            Expr::Binary(left, op, right) => Ok(format!(
                "({} {} {})",
                self.lower_expr(left)?,
                binary_op_str(*op),
                self.lower_expr(right)?
            )),
            Expr::Unary(op, value) => {
                let op = match op {
                    UnaryOp::Neg => "-",
                    UnaryOp::Not => "!",
                };
                Ok(format!("({op}{})", self.lower_expr(value)?))
            }
            Expr::Literal(literal) => lower_literal(literal),
            Expr::Ident(name) => Ok(name.clone()),
        }
    }

    /// `recv.method(args)` becomes `method(recv, args)`; any other callee is lowered as-is.
    fn lower_call(&self, callee: &Expr, args: &[Expr]) -> EmitResult<String> {
        let (function, receiver) = match callee {
            Expr::Member(receiver, method) => (method.clone(), Some(receiver.as_ref())),
            other => (self.lower_expr(other)?, None),
        };
        let args = receiver
            .into_iter()
            .chain(args)
            .map(|arg| self.lower_expr(arg))
            .collect::<EmitResult<Vec<_>>>()?;
        Ok(format!("{function}({})", args.join(", ")))
    }
}

fn binary_op_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::Lt => "<",
        BinaryOp::LtEq => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::GtEq => ">=",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "!=",
    }
}

/// Numbers are re-rendered in decimal; chars stay verbatim; strings become runtime `String`s.
fn lower_literal(literal: &Literal) -> EmitResult<String> {
    let invalid = |text: &str| EmitError::InvalidLiteral { text: text.to_string() };
    match literal {
        Literal::Hex(text) => {
            let digits = text.get(2..).unwrap_or_default();
            u64::from_str_radix(digits, 16)
                .map(|value| value.to_string())
                .map_err(|_| invalid(text))
        }
        Literal::Int(text) => text
            .parse::<u64>()
            .map(|value| value.to_string())
            .map_err(|_| invalid(text)),
        Literal::Float(text) => {
            // The appended digit keeps a bare trailing dot (`3.`) parseable.
            match format!("{text}0").parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value.to_string()),
                _ => Err(invalid(text)),
            }
        }
        Literal::Char(text) => Ok(text.clone()),
        Literal::String(text) => Ok(format!("{}({text})", runtime::VEC_FROM_STRING)),
    }
}
