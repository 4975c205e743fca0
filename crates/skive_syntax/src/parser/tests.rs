#[cfg(test)]
/// Parser unit tests.
///
/// These cover each syntactic form, operator grouping, and the error reported at the first
/// token that fails to fit.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, ParseError> {
        let tokens = lexer::lex(source).unwrap_or_else(|err| panic!("lex({source:?}) failed: {err}"));
        parse(&tokens)
    }

    fn expr_str(source: &str) -> Expr {
        let tokens = lexer::lex(source).unwrap();
        parse_expression(&tokens).unwrap_or_else(|err| panic!("parse_expression({source:?}) failed: {err}"))
    }

    fn ident(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    fn int(text: &str) -> Expr {
        Expr::Literal(Literal::Int(text.to_string()))
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let expr = expr_str("a + b * c");
        assert_eq!(
            expr,
            Expr::binary(ident("a"), BinaryOp::Add, Expr::binary(ident("b"), BinaryOp::Mul, ident("c")))
        );
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        let expr = expr_str("a + b - c");
        assert_eq!(
            expr,
            Expr::binary(Expr::binary(ident("a"), BinaryOp::Add, ident("b")), BinaryOp::Sub, ident("c"))
        );
    }

    #[test]
    fn test_long_equal_precedence_chain() {
        let expr = expr_str("a - b - c - d");
        let expected = Expr::binary(
            Expr::binary(Expr::binary(ident("a"), BinaryOp::Sub, ident("b")), BinaryOp::Sub, ident("c")),
            BinaryOp::Sub,
            ident("d"),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_low_precedence_operator_then_equal_run() {
        let expr = expr_str("a or b + c - d");
        let expected = Expr::binary(
            ident("a"),
            BinaryOp::Or,
            Expr::binary(Expr::binary(ident("b"), BinaryOp::Add, ident("c")), BinaryOp::Sub, ident("d")),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_mixed_precedence_ladder() {
        // (a * b) + c < d and e == f
        let expr = expr_str("a * b + c < d and e == f");
        let lhs = Expr::binary(
            Expr::binary(Expr::binary(ident("a"), BinaryOp::Mul, ident("b")), BinaryOp::Add, ident("c")),
            BinaryOp::Lt,
            ident("d"),
        );
        let rhs = Expr::binary(ident("e"), BinaryOp::Eq, ident("f"));
        assert_eq!(expr, Expr::binary(lhs, BinaryOp::And, rhs));
    }

    #[test]
    fn test_grouping_overrides_precedence() {
        let expr = expr_str("(a + b) * c");
        assert_eq!(
            expr,
            Expr::binary(Expr::binary(ident("a"), BinaryOp::Add, ident("b")), BinaryOp::Mul, ident("c"))
        );
    }

    #[test]
    fn test_unary_is_right_recursive() {
        let expr = expr_str("not - x");
        assert_eq!(
            expr,
            Expr::Unary(UnaryOp::Not, Box::new(Expr::Unary(UnaryOp::Neg, Box::new(ident("x")))))
        );
    }

    #[test]
    fn test_unary_binds_tighter_than_binary() {
        let expr = expr_str("-a * b");
        assert_eq!(
            expr,
            Expr::binary(Expr::Unary(UnaryOp::Neg, Box::new(ident("a"))), BinaryOp::Mul, ident("b"))
        );
    }

    #[test]
    fn test_postfix_chain_in_written_order() {
        let expr = expr_str("a.b(1, 2,)[0].c");
        let call = Expr::Call(
            Box::new(Expr::Member(Box::new(ident("a")), "b".into())),
            vec![int("1"), int("2")],
        );
        let index = Expr::Index(Box::new(call), Box::new(int("0")));
        assert_eq!(expr, Expr::Member(Box::new(index), "c".into()));
    }

    #[test]
    fn test_empty_call() {
        assert_eq!(expr_str("f()"), Expr::Call(Box::new(ident("f")), vec![]));
    }

    #[test]
    fn test_number_literals() {
        assert_eq!(expr_str("0x1F"), Expr::Literal(Literal::Hex("0x1F".into())));
        assert_eq!(expr_str("3.14"), Expr::Literal(Literal::Float("3.14".into())));
        assert_eq!(expr_str("3."), Expr::Literal(Literal::Float("3.".into())));
        assert_eq!(expr_str("42"), int("42"));
    }

    #[test]
    fn test_split_float_with_spaced_fraction() {
        assert_eq!(expr_str("3. 5"), Expr::Literal(Literal::Float("3.5".into())));
    }

    #[test]
    fn test_char_and_string_literals() {
        assert_eq!(expr_str("'a'"), Expr::Literal(Literal::Char("'a'".into())));
        assert_eq!(expr_str(r#""hi""#), Expr::Literal(Literal::String(r#""hi""#.into())));
    }

    #[test]
    fn test_ternary() {
        let expr = expr_str("if a then b else c");
        assert_eq!(
            expr,
            Expr::Ternary(Box::new(TernaryExpr {
                condition: ident("a"),
                then_expr: ident("b"),
                else_expr: ident("c"),
            }))
        );
    }

    #[test]
    fn test_closure_with_block_body() {
        let expr = expr_str("fn [a, b,] (x: int) -> int do return x + a end");
        let Expr::Closure(closure) = expr else {
            panic!("expected closure");
        };
        assert_eq!(closure.captures, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(closure.params.len(), 1);
        assert_eq!(closure.return_type, Some(Type::Simple("int".into())));
        assert!(matches!(&closure.body, ClosureBody::Block(stmts) if stmts.len() == 1));
    }

    #[test]
    fn test_closure_with_expression_body() {
        let expr = expr_str("fn (x) => x * 2");
        let Expr::Closure(closure) = expr else {
            panic!("expected closure");
        };
        assert_eq!(closure.captures, None);
        assert_eq!(
            closure.body,
            ClosureBody::Expr(Expr::binary(ident("x"), BinaryOp::Mul, int("2")))
        );
    }

    #[test]
    fn test_closure_needs_a_body() {
        let tokens = lexer::lex("fn (x) x").unwrap();
        let err = parse_expression(&tokens).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ExpectedToken { ref expected, found: TokenKind::Ident(ref name), .. }
                if expected == "'do' or '=>'" && name == "x"
        ));
    }

    #[test]
    fn test_parse_struct() {
        let program = parse_str("struct Point x: int, y: int, end").unwrap();
        assert_eq!(
            program.statements,
            vec![Statement::Struct(StructDecl {
                name: "Point".into(),
                fields: vec![
                    Param {
                        name: "x".into(),
                        ty: Some(Type::Simple("int".into())),
                    },
                    Param {
                        name: "y".into(),
                        ty: Some(Type::Simple("int".into())),
                    },
                ],
            })]
        );
    }

    #[test]
    fn test_parse_untyped_and_empty_structs() {
        let program = parse_str("struct Point x, y end struct Unit end").unwrap();
        let Statement::Struct(point) = &program.statements[0] else {
            panic!("expected struct");
        };
        assert!(point.fields.iter().all(|f| f.ty.is_none()));
        assert!(matches!(&program.statements[1], Statement::Struct(s) if s.fields.is_empty()));
    }

    #[test]
    fn test_parse_function() {
        let program = parse_str("fn add(a: int, b: int) -> int return a + b end").unwrap();
        let Statement::Func(func) = &program.statements[0] else {
            panic!("expected function");
        };
        assert_eq!(func.name, "add");
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.return_type, Some(Type::Simple("int".into())));
        assert_eq!(func.body.len(), 1);
    }

    #[test]
    fn test_colon_return_type() {
        let program = parse_str("fn f(): Own<Point> end").unwrap();
        let Statement::Func(func) = &program.statements[0] else {
            panic!("expected function");
        };
        assert_eq!(
            func.return_type,
            Some(Type::Generic("Own".into(), vec![Type::Simple("Point".into())]))
        );
    }

    #[test]
    fn test_nested_generic_types() {
        let program = parse_str("let m: Map<K, Vec<Own<V>>,>").unwrap();
        let Statement::Let(stmt) = &program.statements[0] else {
            panic!("expected let");
        };
        assert_eq!(stmt.ty.as_ref().map(ToString::to_string).as_deref(), Some("Map<K, Vec<Own<V>>>"));
    }

    #[test]
    fn test_generic_closer_glued_to_initializer() {
        let program = parse_str("let v: Vec<int>= 1 let w: Vec<Vec<int>>= 2").unwrap();
        assert_eq!(
            program.statements,
            vec![
                Statement::Let(LetStmt {
                    name: "v".into(),
                    ty: Some(Type::Generic("Vec".into(), vec![Type::Simple("int".into())])),
                    value: Some(int("1")),
                }),
                Statement::Let(LetStmt {
                    name: "w".into(),
                    ty: Some(Type::Generic(
                        "Vec".into(),
                        vec![Type::Generic("Vec".into(), vec![Type::Simple("int".into())])]
                    )),
                    value: Some(int("2")),
                }),
            ]
        );
    }

    #[test]
    fn test_split_equals_keeps_its_own_span() {
        let err = parse_str("let v: Vec<Vec<int>= 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedToken {
                expected: "'>'".into(),
                found: TokenKind::Operator(OperatorId::Eq),
                span: Span::new(19, 20),
            }
        );
    }

    #[test]
    fn test_split_equals_outside_let_is_rejected() {
        let err = parse_str("fn f(v: Vec<int>= 1) end").unwrap_err();
        assert_eq!(err.to_string(), "expected ')', found '='");
    }

    #[test]
    fn test_if_else_end() {
        let program = parse_str("if a then b else c end").unwrap();
        assert_eq!(
            program.statements,
            vec![Statement::If(IfStmt {
                condition: ident("a"),
                then_body: vec![Statement::Expr(ident("b"))],
                else_body: Some(vec![Statement::Expr(ident("c"))]),
            })]
        );
    }

    #[test]
    fn test_if_without_else_or_end() {
        let err = parse_str("if a then b").unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedToken {
                expected: "'else' or 'end'".into(),
                found: TokenKind::Eof,
                span: Span::new(11, 11),
            }
        );
    }

    #[test]
    fn test_while_loop() {
        let program = parse_str("while i < 10 do i += 1 end").unwrap();
        let Statement::While(stmt) = &program.statements[0] else {
            panic!("expected while");
        };
        assert_eq!(stmt.condition, Expr::binary(ident("i"), BinaryOp::Lt, int("10")));
        assert_eq!(
            stmt.body,
            vec![Statement::Assign(AssignStmt {
                target: ident("i"),
                op: AssignOp::AddAssign,
                value: int("1"),
            })]
        );
    }

    #[test]
    fn test_while_needs_do() {
        let err = parse_str("while x i end").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedToken { ref expected, .. } if expected == "'do'"));
    }

    #[test]
    fn test_let_forms() {
        let program = parse_str("let a: int = 1 let b: int let c = 2").unwrap();
        assert_eq!(
            program.statements,
            vec![
                Statement::Let(LetStmt {
                    name: "a".into(),
                    ty: Some(Type::Simple("int".into())),
                    value: Some(int("1")),
                }),
                Statement::Let(LetStmt {
                    name: "b".into(),
                    ty: Some(Type::Simple("int".into())),
                    value: None,
                }),
                Statement::Let(LetStmt {
                    name: "c".into(),
                    ty: None,
                    value: Some(int("2")),
                }),
            ]
        );
    }

    #[test]
    fn test_assignment_operators() {
        let program = parse_str("p.x = 1 v[0] -= 2 n *= 3").unwrap();
        let ops: Vec<AssignOp> = program
            .statements
            .iter()
            .map(|s| match s {
                Statement::Assign(a) => a.op,
                other => panic!("expected assignment, got {other:?}"),
            })
            .collect();
        assert_eq!(ops, vec![AssignOp::Assign, AssignOp::SubAssign, AssignOp::MulAssign]);
    }

    #[test]
    fn test_newlines_do_not_terminate_expressions() {
        let program = parse_str("x = 1 +\n 2\nprint(x)").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_reserved_word_as_identifier() {
        let err = parse_str("let end: int").unwrap_err();
        assert_eq!(
            err,
            ParseError::ReservedWordAsIdentifier {
                word: "end".into(),
                span: Span::new(4, 7),
            }
        );
    }

    #[test]
    fn test_reserved_word_in_expression() {
        let err = parse_str("x = then").unwrap_err();
        assert!(matches!(err, ParseError::ReservedWordAsIdentifier { ref word, .. } if word == "then"));
    }

    #[test]
    fn test_stray_end_at_top_level() {
        let err = parse_str("x end").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Keyword(KeywordId::End),
                context: "program",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_operand() {
        let err = parse_str("x = 1 +").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Eof,
                context: "expression",
                ..
            }
        ));
    }

    #[test]
    fn test_unclosed_call() {
        let err = parse_str("f(1, 2").unwrap_err();
        assert!(matches!(err, ParseError::ExpectedToken { ref expected, .. } if expected == "')'"));
    }

    #[test]
    fn test_parse_expression_rejects_trailing_tokens() {
        let tokens = lexer::lex("a b").unwrap();
        assert!(matches!(parse_expression(&tokens), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn test_empty_token_slice() {
        assert_eq!(parse(&[]).unwrap(), Program::default());
    }

    #[test]
    fn test_nested_bodies() {
        let source = "fn main() while a do if b then return 1 end end end";
        let program = parse_str(source).unwrap();
        let Statement::Func(func) = &program.statements[0] else {
            panic!("expected function");
        };
        let Statement::While(w) = &func.body[0] else {
            panic!("expected while");
        };
        assert!(matches!(&w.body[0], Statement::If(i) if i.else_body.is_none()));
    }

    #[test]
    fn test_error_messages() {
        let messages: Vec<String> = ["if a then b", "let end: int", "x end", "f(1, 2", "fn (x) x"]
            .iter()
            .map(|source| parse_str(source).unwrap_err().to_string())
            .collect();
        insta::assert_snapshot!(messages.join("\n"), @r"
        expected 'else' or 'end', found end of input
        'end' is a reserved word and cannot be used as an identifier
        unexpected 'end' in program
        expected ')', found end of input
        expected identifier, found '('
        ");
    }
}
