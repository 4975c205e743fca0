/// Statement parsing methods.
///
/// Dispatch is on the current token: `struct`, `fn`, `return`, `if`, `while` and `let` each select
/// a dedicated form. Anything else is an expression, which becomes an assignment target when an
/// assignment operator follows it.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse statements until end of input or a closing `end` / `else` (which is not consumed).
    fn statements(&mut self) -> PResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !self.at_block_end() {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    fn statement(&mut self) -> PResult<Statement> {
        match self.peek().kind.keyword_id() {
            Some(KeywordId::Struct) => Ok(Statement::Struct(self.struct_decl()?)),
            Some(KeywordId::Fn) => Ok(Statement::Func(self.func_decl()?)),
            Some(KeywordId::Return) => self.return_stmt(),
            Some(KeywordId::If) => self.if_stmt(),
            Some(KeywordId::While) => self.while_stmt(),
            Some(KeywordId::Let) => self.let_stmt(),
            _ => self.assign_or_expr_stmt(),
        }
    }

    /// `return expr`
    fn return_stmt(&mut self) -> PResult<Statement> {
        self.expect_keyword(KeywordId::Return)?;
        Ok(Statement::Return(self.expression()?))
    }

    /// `if cond then stmts (end | else stmts end)`
    fn if_stmt(&mut self) -> PResult<Statement> {
        self.expect_keyword(KeywordId::If)?;
        let condition = self.expression()?;
        self.expect_keyword(KeywordId::Then)?;
        let then_body = self.statements()?;

        let else_body = if self.match_keyword(KeywordId::End) {
            None
        } else if self.match_keyword(KeywordId::Else) {
            let body = self.statements()?;
            self.expect_keyword(KeywordId::End)?;
            Some(body)
        } else {
            return Err(self.expected("'else' or 'end'"));
        };

        Ok(Statement::If(IfStmt {
            condition,
            then_body,
            else_body,
        }))
    }

    /// `while cond do stmts end`
    fn while_stmt(&mut self) -> PResult<Statement> {
        self.expect_keyword(KeywordId::While)?;
        let condition = self.expression()?;
        self.expect_keyword(KeywordId::Do)?;
        let body = self.statements()?;
        self.expect_keyword(KeywordId::End)?;
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// `let identifier (: type)? (= expr)?`
    fn let_stmt(&mut self) -> PResult<Statement> {
        self.expect_keyword(KeywordId::Let)?;
        let Param { name, ty } = self.param()?;
        let value = if self.match_op(OperatorId::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        Ok(Statement::Let(LetStmt { name, ty, value }))
    }

    /// `target (= | += | -= | *=) value`, or a bare expression.
    fn assign_or_expr_stmt(&mut self) -> PResult<Statement> {
        let target = self.expression()?;
        let Some(op) = self.peek().kind.operator_id().and_then(AssignOp::from_operator) else {
            return Ok(Statement::Expr(target));
        };
        self.advance();
        let value = self.expression()?;
        Ok(Statement::Assign(AssignStmt { target, op, value }))
    }
}
