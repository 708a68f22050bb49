use std::fs;

use nokch::{
    ast::{AssignOperator, Ast, BinaryOperator, UnaryOperator},
    error::{DiagnosticKind, ParseError},
    frontend::{
        parser::{MAX_NESTING_DEPTH, Parser},
        token::TokenKind,
    },
    parse_source, parse_tokens, run, tokenize,
    util::source::validate_source_path,
};
use num_bigint::BigInt;
use walkdir::WalkDir;

#[test]
fn demo_scripts_parse() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "nkch"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = parse_source(&content) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"))
                 .into_iter()
                 .map(|token| token.kind)
                 .collect()
}

fn parse(src: &str) -> Vec<Ast> {
    parse_source(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"))
}

fn render(src: &str) -> Vec<String> {
    parse(src).iter().map(ToString::to_string).collect()
}

fn assert_success(src: &str) {
    if let Err(e) = parse_source(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> ParseError {
    match parse_source(src) {
        Ok(program) => panic!("Script succeeded but was expected to fail: {program:?}"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals_lex_to_a_single_token() {
    for n in [0, 7, 42, 1_234_567_890, i64::MAX] {
        assert_eq!(kinds(&n.to_string()), vec![TokenKind::Int(BigInt::from(n)), TokenKind::Eof]);
    }
}

#[test]
fn float_literals() {
    assert_eq!(kinds("3.25"), vec![TokenKind::Float(3.25), TokenKind::Eof]);
    assert_eq!(kinds("7."), vec![TokenKind::Float(7.0), TokenKind::Eof]);
    assert_eq!(parse("0.5"), vec![Ast::number(0.5)]);
}

#[test]
fn second_dot_ends_a_number() {
    let err = tokenize("1.2.3").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedCharacter { character: '.',
                                                 line:      1,
                                                 column:    3, });
}

#[test]
fn integer_literals_keep_their_exact_value() {
    let big = "99999999999999999999";
    let value: BigInt = big.parse().unwrap();
    assert_eq!(kinds(big), vec![TokenKind::Int(value.clone()), TokenKind::Eof]);
    assert_eq!(parse(&format!("x = {big}")),
               vec![Ast::assignment("x", AssignOperator::Assign, Ast::number(value))]);
    assert_eq!(render("2 ** 123456789012345678901234567890"),
               vec!["(** 2 123456789012345678901234567890)"]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("if true else false null"),
               vec![TokenKind::If,
                    TokenKind::True,
                    TokenKind::Else,
                    TokenKind::False,
                    TokenKind::Null,
                    TokenKind::Eof]);
    assert_eq!(kinds("iffy elsewhere _tmp1"),
               vec![TokenKind::Ident("iffy".to_string()),
                    TokenKind::Ident("elsewhere".to_string()),
                    TokenKind::Ident("_tmp1".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn identifiers_may_use_unicode_letters() {
    assert_eq!(kinds("café = 1"),
               vec![TokenKind::Ident("café".to_string()),
                    TokenKind::Equals,
                    TokenKind::Int(BigInt::from(1)),
                    TokenKind::Eof]);
    assert_eq!(kinds("_größe2 π"),
               vec![TokenKind::Ident("_größe2".to_string()),
                    TokenKind::Ident("π".to_string()),
                    TokenKind::Eof]);
    assert_eq!(render("Δx += 1"), vec!["(+= Δx 1)"]);
}

#[test]
fn unicode_whitespace_is_skipped() {
    assert_eq!(kinds("x\u{a0}= 1"),
               vec![TokenKind::Ident("x".to_string()),
                    TokenKind::Equals,
                    TokenKind::Int(BigInt::from(1)),
                    TokenKind::Eof]);
    assert_eq!(kinds("else\u{3000}if"), vec![TokenKind::ElseIf, TokenKind::Eof]);

    let err = tokenize("é\u{2003}$").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedCharacter { character: '$',
                                                 line:      1,
                                                 column:    2, });
}

#[test]
fn else_if_is_one_token() {
    assert_eq!(kinds("else if"), vec![TokenKind::ElseIf, TokenKind::Eof]);
    assert_eq!(kinds("else \t   if"), vec![TokenKind::ElseIf, TokenKind::Eof]);
    assert_eq!(kinds("} else if x {"),
               vec![TokenKind::RBrace,
                    TokenKind::ElseIf,
                    TokenKind::Ident("x".to_string()),
                    TokenKind::LBrace,
                    TokenKind::Eof]);
}

#[test]
fn else_if_lookahead_stays_on_one_line() {
    let tokens = tokenize("else\nif").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Else);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!((tokens[1].line, tokens[1].column), (2, 0));
}

#[test]
fn else_if_lookahead_only_checks_two_characters() {
    assert_eq!(kinds("else iffy"),
               vec![TokenKind::ElseIf, TokenKind::Ident("fy".to_string()), TokenKind::Eof]);
}

#[test]
fn string_escapes_are_decoded() {
    assert_eq!(kinds(r#""a\nb""#), vec![TokenKind::Str("a\nb".to_string()), TokenKind::Eof]);
    assert_eq!(kinds(r"'it\'s\t\\'"),
               vec![TokenKind::Str("it's\t\\".to_string()), TokenKind::Eof]);
    assert_eq!(kinds(r#""\q""#), vec![TokenKind::Str("q".to_string()), TokenKind::Eof]);
}

#[test]
fn string_lexeme_keeps_the_raw_text() {
    let src = r#"name = "a\"b""#;
    let tokens = tokenize(src).unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Str("a\"b".to_string()));
    assert_eq!(tokens[2].lexeme(src), r#""a\"b""#);
}

#[test]
fn unterminated_string_is_a_syntax_error() {
    let err = tokenize("\"abc").unwrap_err();
    assert_eq!(err, ParseError::UnterminatedString { line: 1, column: 0 });
    assert_eq!(err.message(), "Unterminated string literal");

    let err = tokenize("x = 'abc\ny = 1").unwrap_err();
    assert_eq!(err, ParseError::UnterminatedString { line: 1, column: 4 });
}

#[test]
fn unknown_character_is_a_syntax_error() {
    let err = tokenize("abc$").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedCharacter { character: '$',
                                                 line:      1,
                                                 column:    3, });
    assert_eq!(err.to_diagnostic().kind, DiagnosticKind::Syntax);
    assert_eq!(err.to_diagnostic().message, "unexpected $");
}

#[test]
fn bare_bang_is_rejected() {
    assert!(matches!(tokenize("!x").unwrap_err(),
                     ParseError::UnexpectedCharacter { character: '!', .. }));
    assert_eq!(kinds("a != b"),
               vec![TokenKind::Ident("a".to_string()),
                    TokenKind::BangEqual,
                    TokenKind::Ident("b".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn operators_take_the_longest_match() {
    assert_eq!(kinds("**="), vec![TokenKind::DoubleStarAssign, TokenKind::Eof]);
    assert_eq!(kinds("+ ++ += - -- -= * ** *= **= / // /= //= % %="),
               vec![TokenKind::Plus,
                    TokenKind::PlusPlus,
                    TokenKind::PlusAssign,
                    TokenKind::Minus,
                    TokenKind::MinusMinus,
                    TokenKind::MinusAssign,
                    TokenKind::Star,
                    TokenKind::DoubleStar,
                    TokenKind::StarAssign,
                    TokenKind::DoubleStarAssign,
                    TokenKind::Slash,
                    TokenKind::DoubleSlash,
                    TokenKind::SlashAssign,
                    TokenKind::DoubleSlashAssign,
                    TokenKind::Percent,
                    TokenKind::PercentAssign,
                    TokenKind::Eof]);
    assert_eq!(kinds("= == != < <= << <<= > >= >> >>="),
               vec![TokenKind::Equals,
                    TokenKind::EqualEqual,
                    TokenKind::BangEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::ShiftLeft,
                    TokenKind::ShiftLeftAssign,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::ShiftRight,
                    TokenKind::ShiftRightAssign,
                    TokenKind::Eof]);
    assert_eq!(kinds("& &= | |= ^ ^= ~ ( ) [ ] { } ; ,"),
               vec![TokenKind::Ampersand,
                    TokenKind::AmpersandAssign,
                    TokenKind::Pipe,
                    TokenKind::PipeAssign,
                    TokenKind::Caret,
                    TokenKind::CaretAssign,
                    TokenKind::Tilde,
                    TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::LBracket,
                    TokenKind::RBracket,
                    TokenKind::LBrace,
                    TokenKind::RBrace,
                    TokenKind::Semicolon,
                    TokenKind::Comma,
                    TokenKind::Eof]);
    assert_eq!(kinds("a<<=b"),
               vec![TokenKind::Ident("a".to_string()),
                    TokenKind::ShiftLeftAssign,
                    TokenKind::Ident("b".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = tokenize("x = 1\n  y = 22\n").unwrap();
    let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions, vec![(1, 0), (1, 2), (1, 4), (2, 2), (2, 4), (2, 6), (2, 8)]);
    assert!(tokens.last().unwrap().is_eof());
    assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\n\t"), vec![TokenKind::Eof]);
    assert!(parse("").is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("1+2*3"),
               vec![Ast::binary(Ast::number(1),
                                BinaryOperator::Add,
                                Ast::binary(Ast::number(2), BinaryOperator::Mul, Ast::number(3)))]);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_eq!(parse("1-2-3"),
               vec![Ast::binary(Ast::binary(Ast::number(1), BinaryOperator::Sub, Ast::number(2)),
                                BinaryOperator::Sub,
                                Ast::number(3))]);
    assert_eq!(render("8 / 4 // 2 % 3"), vec!["(% (// (/ 8 4) 2) 3)"]);
    assert_eq!(render("a < b < c"), vec!["(< (< a b) c)"]);
}

#[test]
fn exponentiation_folds_left() {
    assert_eq!(render("2 ** 3 ** 2"), vec!["(** (** 2 3) 2)"]);
    assert_eq!(render("-2 ** 2"), vec!["(- (** 2 2))"]);
    assert_eq!(render("2 * 3 ** 2"), vec!["(* 2 (** 3 2))"]);
}

#[test]
fn exponent_must_be_a_plain_factor() {
    let err = assert_failure("2 ** -1");
    assert!(matches!(err, ParseError::UnexpectedToken { token: "SUB", column: 5, .. }));
    assert_success("2 ** (-1)");
}

#[test]
fn precedence_tiers_from_comparison_to_additive() {
    assert_eq!(render("a | b ^ c & d << e + f"),
               vec!["(| a (^ b (& c (<< d (+ e f)))))"]);
    assert_eq!(render("a == b | c"), vec!["(== a (| b c))"]);
    assert_eq!(render("1 << 2 >> 3"), vec!["(>> (<< 1 2) 3)"]);
    assert_eq!(render("(1 + 2) * 3"), vec!["(* (+ 1 2) 3)"]);
}

#[test]
fn unary_operators_stack() {
    assert_eq!(parse("-~+x"),
               vec![Ast::unary(UnaryOperator::Negate,
                               Ast::unary(UnaryOperator::BitNot,
                                          Ast::unary(UnaryOperator::Plus,
                                                     Ast::variable("x"))))]);
    assert_eq!(render("-2 * 3"), vec!["(* (- 2) 3)"]);
}

#[test]
fn increment_and_decrement_tokens_stack_as_prefixes() {
    assert_eq!(parse("--x"),
               vec![Ast::unary(UnaryOperator::Negate,
                               Ast::unary(UnaryOperator::Negate, Ast::variable("x")))]);
    assert_eq!(render("++1"), vec!["(+ (+ 1))"]);
    assert_eq!(render("a; --b"), vec!["a", "(- (- b))"]);
}

#[test]
fn increment_and_decrement_after_an_operand_are_rejected() {
    assert_eq!(assert_failure("a--b"),
               ParseError::UnexpectedToken { token:  "DEC",
                                             line:   1,
                                             column: 1,
                                             span:   2, });
    assert!(matches!(assert_failure("x = 1 ++ 2"),
                     ParseError::UnexpectedToken { token: "INC", column: 6, .. }));
    assert!(matches!(assert_failure("x ++"),
                     ParseError::UnexpectedToken { token: "INC", column: 2, .. }));
    assert!(matches!(assert_failure("y = 2\n--y"),
                     ParseError::UnexpectedToken { token: "DEC", line: 2, column: 0, .. }));
}

#[test]
fn simple_assignment() {
    assert_eq!(parse("x = 5;"),
               vec![Ast::assignment("x", AssignOperator::Assign, Ast::number(5))]);
}

#[test]
fn augmented_assignments() {
    let cases = [("+=", AssignOperator::Add),
                 ("-=", AssignOperator::Sub),
                 ("*=", AssignOperator::Mul),
                 ("/=", AssignOperator::Div),
                 ("%=", AssignOperator::Mod),
                 ("**=", AssignOperator::Pow),
                 ("//=", AssignOperator::FloorDiv),
                 ("&=", AssignOperator::BitAnd),
                 ("|=", AssignOperator::BitOr),
                 ("^=", AssignOperator::BitXor),
                 ("<<=", AssignOperator::ShiftLeft),
                 (">>=", AssignOperator::ShiftRight)];

    for (text, op) in cases {
        let src = format!("total {text} step + 1");
        assert_eq!(parse(&src),
                   vec![Ast::assignment("total",
                                        op,
                                        Ast::binary(Ast::variable("step"),
                                                    BinaryOperator::Add,
                                                    Ast::number(1)))],
                   "{src}");
        assert_eq!(op.to_string(), text);
    }
}

#[test]
fn identifier_without_assignment_is_an_expression() {
    assert_eq!(parse("x"), vec![Ast::variable("x")]);
    assert_eq!(render("x + 1; x == 1"), vec!["(+ x 1)", "(== x 1)"]);
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(render("x = 1; y = x * 2\nz = 3"),
               vec!["(= x 1)", "(= y (* x 2))", "(= z 3)"]);
    assert_eq!(render("1 2"), vec!["1", "2"]);
}

#[test]
fn chained_assignment_is_rejected() {
    let err = assert_failure("x = y = 1");
    assert!(matches!(err, ParseError::UnexpectedToken { token: "ASSIGN", column: 6, .. }));
}

#[test]
fn lone_semicolon_is_rejected() {
    assert!(matches!(assert_failure(";"),
                     ParseError::UnexpectedToken { token: "SEMI", .. }));
}

#[test]
fn literals_without_a_grammar_rule_are_rejected() {
    assert!(matches!(assert_failure("x = \"hi\""),
                     ParseError::UnexpectedToken { token: "STRING", span: 4, .. }));
    assert!(matches!(assert_failure("true"),
                     ParseError::UnexpectedToken { token: "TRUE", .. }));
}

#[test]
fn missing_closing_paren() {
    let err = assert_failure("x = (1 + 2");
    assert_eq!(err,
               ParseError::Expected { expected: "RPAREN",
                                      found:    "EOF",
                                      line:     1,
                                      column:   10,
                                      span:     1, });
    assert_eq!(err.message(), "expected RPAREN, got EOF");

    let err = assert_failure("(1 2)");
    assert_eq!(err.message(), "expected RPAREN, got INT");
    assert_eq!((err.line(), err.column()), (1, 3));
}

#[test]
fn missing_operand_at_end_of_input() {
    let err = assert_failure("x = 1 +\n\n");
    assert_eq!(err, ParseError::UnexpectedEof { line: 1, column: 7 });
    assert_eq!(err.message(), "unexpected EOF");
}

#[test]
fn misplaced_token() {
    let err = assert_failure("1 + )");
    assert_eq!(err,
               ParseError::UnexpectedToken { token:  "RPAREN",
                                             line:   1,
                                             column: 4,
                                             span:   1, });
    assert_eq!(err.message(), "unexpected token");
}

#[test]
fn truncated_token_slice_reports_the_last_position() {
    let tokens = tokenize("(1").unwrap();
    let without_eof = &tokens[..tokens.len() - 1];
    let err = Parser::new(without_eof).parse_program().unwrap_err();
    assert_eq!(err.message(), "expected RPAREN, got EOF");
    assert_eq!((err.line(), err.column()), (1, 1));

    let err = Parser::new(&tokens[..1]).parse_program().unwrap_err();
    assert_eq!(err, ParseError::UnexpectedEof { line: 1, column: 0 });
}

#[test]
fn empty_token_slice_is_an_empty_program() {
    assert!(Parser::new(&[]).parse_program().unwrap().is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let tokens = tokenize("a = (1 + b) * -c ** 2 >> 1; a != 3").unwrap();
    let first = parse_tokens(&tokens).unwrap();
    let second = parse_tokens(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nesting_within_the_limit_parses() {
    let depth = MAX_NESTING_DEPTH / 2;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&src), vec![Ast::number(1)]);
}

#[test]
fn nesting_beyond_the_limit_is_an_error() {
    let src = format!("{}x", "~".repeat(40));
    let tokens = tokenize(&src).unwrap();
    let err = Parser::new(&tokens).with_max_depth(16).parse_program().unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 16, line: 1, column: 17 }));

    let src = format!("{}1{}",
                      "(".repeat(MAX_NESTING_DEPTH + 1),
                      ")".repeat(MAX_NESTING_DEPTH + 1));
    assert!(matches!(assert_failure(&src), ParseError::NestingTooDeep { .. }));
}

#[test]
fn run_reports_one_syntax_diagnostic() {
    let diagnostic = run("demo.nkch", "x = 1 +\n").unwrap_err();
    assert_eq!(diagnostic.kind, DiagnosticKind::Syntax);
    assert_eq!(diagnostic.render("demo.nkch", "x = 1 +\n", false),
               "[SYNTAX]: demo.nkch:1:7: unexpected EOF\n 1 | x = 1 +\n   |        ^\n");
}

#[test]
fn diagnostic_underlines_the_whole_token() {
    let src = "a = 1\nb = (2 + 3 4)";
    let diagnostic = run("demo.nkch", src).unwrap_err();
    assert_eq!(diagnostic.message, "expected RPAREN, got INT");
    assert_eq!(diagnostic.render("demo.nkch", src, false),
               "[SYNTAX]: demo.nkch:2:11: expected RPAREN, got INT\n 2 | b = (2 + 3 4)\n   |            ^\n");

    let src = "value = (1 12345678901234567890)";
    let diagnostic = run("demo.nkch", src).unwrap_err();
    assert_eq!(diagnostic.span, 20);
    assert!(diagnostic.render("demo.nkch", src, false)
                      .ends_with(&format!("|            ^{}\n", "~".repeat(19))));
}

#[test]
fn underline_width_counts_characters() {
    let src = "x = \"héllo\" ";
    let diagnostic = run("demo.nkch", src).unwrap_err();
    assert_eq!(diagnostic.span, 7);
    assert_eq!(diagnostic.render("demo.nkch", src, false),
               "[SYNTAX]: demo.nkch:1:4: unexpected token\n 1 | x = \"héllo\"\n   |     ^~~~~~\n");

    let tokens = tokenize("ünï + 1").unwrap();
    assert_eq!(tokens.iter().map(|token| token.width).collect::<Vec<_>>(), vec![3, 1, 1, 0]);
}

#[test]
fn source_paths_are_validated() {
    assert_eq!(validate_source_path("demos").unwrap_err(), "demos is not a file");
    assert!(validate_source_path("Cargo.toml").unwrap_err()
                                              .ends_with("must have .nkch extension"));
    assert!(validate_source_path("demos/missing.nkch").unwrap_err()
                                                      .ends_with("does not exist"));
    assert!(validate_source_path("demos/arithmetic.nkch").is_ok());
}

#[test]
fn colored_diagnostic_wraps_parts_in_ansi_escapes() {
    let diagnostic = run("demo.nkch", "$").unwrap_err();
    let rendered = diagnostic.render("demo.nkch", "$", true);
    assert!(rendered.contains("\x1b[1m\x1b[91m[SYNTAX]\x1b[0m"));
    assert!(rendered.contains("\x1b[91m^\x1b[0m"));
}
