/// Declaration parsing methods.
///
/// This chunk parses the two definition forms, `struct` and `fn`, together with the parameter
/// and return-type pieces shared with closures. Whether a definition sits at top level is
/// checked at emission time, not here.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `struct Name (field (, field)* ,?)? end`
    fn struct_decl(&mut self) -> PResult<StructDecl> {
        self.expect_keyword(KeywordId::Struct)?;
        let name = self.identifier()?;
        let fields = self.comma_separated(|p| p.check_keyword(KeywordId::End), |p| p.param())?;
        self.expect_keyword(KeywordId::End)?;
        Ok(StructDecl { name, fields })
    }

    /// `fn Name (params) (-> type | : type)? statements end`
    fn func_decl(&mut self) -> PResult<FuncDecl> {
        self.expect_keyword(KeywordId::Fn)?;
        let name = self.identifier()?;
        let params = self.params()?;
        let return_type = self.return_type()?;
        let body = self.statements()?;
        self.expect_keyword(KeywordId::End)?;
        Ok(FuncDecl {
            name,
            params,
            return_type,
            body,
        })
    }

    /// `( param (, param)* ,? )`
    fn params(&mut self) -> PResult<Vec<Param>> {
        self.expect_punct(PunctuationId::LParen)?;
        let params = self.comma_separated(|p| p.check_punct(PunctuationId::RParen), |p| p.param())?;
        self.expect_punct(PunctuationId::RParen)?;
        Ok(params)
    }

    /// `identifier (: type)?`
    fn param(&mut self) -> PResult<Param> {
        let name = self.identifier()?;
        let ty = if self.match_punct(PunctuationId::Colon) {
            Some(self.type_expr()?)
        } else {
            None
        };
        Ok(Param { name, ty })
    }

    /// Optional `-> type` or `: type` after a parameter list.
    fn return_type(&mut self) -> PResult<Option<Type>> {
        if self.match_punct(PunctuationId::Arrow) || self.match_punct(PunctuationId::Colon) {
            Ok(Some(self.type_expr()?))
        } else {
            Ok(None)
        }
    }
}
