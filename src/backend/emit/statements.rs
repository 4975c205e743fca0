//! Statement lowering.
//!
//! Every statement becomes one or more lines in the current region. Top-level `let` is split: the declaration
//! goes to the global table and the initializer (if any) stays in the entry-point body as an assignment.

use skive_syntax::ast::{AssignStmt, IfStmt, LetStmt, Statement, WhileStmt};

use super::{EmitError, EmitResult, Emitter};

impl Emitter {
    pub(super) fn lower_statements(&mut self, statements: &[Statement]) -> EmitResult<()> {
        statements.iter().try_for_each(|stmt| self.lower_statement(stmt))
    }

    fn lower_statement(&mut self, stmt: &Statement) -> EmitResult<()> {
        match stmt {
            Statement::Struct(decl) => self.lower_struct(decl),
            Statement::Func(decl) => self.lower_func(decl),
            Statement::Return(value) => {
                let value = self.lower_expr(value)?;
                self.line(&format!("return {value};"));
                Ok(())
            }
            Statement::If(stmt) => self.lower_if(stmt),
            Statement::While(stmt) => self.lower_while(stmt),
            Statement::Let(stmt) => self.lower_let(stmt),
            Statement::Assign(stmt) => self.lower_assign(stmt),
            Statement::Expr(expr) => {
                let expr = self.lower_expr(expr)?;
                self.line(&format!("{expr};"));
                Ok(())
            }
        }
    }

    fn lower_if(&mut self, stmt: &IfStmt) -> EmitResult<()> {
        let condition = self.lower_expr(&stmt.condition)?;
        self.line(&format!("if ({condition}) {{"));
        self.block(|e| e.lower_statements(&stmt.then_body))?;
        if let Some(else_body) = &stmt.else_body {
            self.line("} else {");
            self.block(|e| e.lower_statements(else_body))?;
        }
        self.line("}");
        Ok(())
    }

    fn lower_while(&mut self, stmt: &WhileStmt) -> EmitResult<()> {
        let condition = self.lower_expr(&stmt.condition)?;
        self.line(&format!("while ({condition}) {{"));
        self.block(|e| e.lower_statements(&stmt.body))?;
        self.line("}");
        Ok(())
    }

    fn lower_let(&mut self, stmt: &LetStmt) -> EmitResult<()> {
        let Some(ty) = &stmt.ty else {
            return Err(EmitError::unsupported(format!(
                "type inference (`let {}` needs a type annotation)",
                stmt.name
            )));
        };
        let ty = self.lower_type(Some(ty))?;
        let value = stmt.value.as_ref().map(|v| self.lower_expr(v)).transpose()?;

        if self.at_top_level() {
            tracing::debug!(name = %stmt.name, ty = %ty, "registered global");
            self.globals.push(format!("{ty} {}", stmt.name));
            if let Some(value) = value {
                self.line(&format!("{} = {value};", stmt.name));
            }
        } else {
            match value {
                Some(value) => self.line(&format!("{ty} {} = {value};", stmt.name)),
                None => self.line(&format!("{ty} {};", stmt.name)),
            }
        }
        Ok(())
    }

    fn lower_assign(&mut self, stmt: &AssignStmt) -> EmitResult<()> {
        let target = self.lower_expr(&stmt.target)?;
        let value = self.lower_expr(&stmt.value)?;
        self.line(&format!("({target} {} {value});", stmt.op));
        Ok(())
    }
}
