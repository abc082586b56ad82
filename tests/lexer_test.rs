//! レキサーテスト
//!
//! Ahoyレキサー（字句解析器）のテストスイート。
//! 正常系、異常系、エッジケースを網羅する。

#[cfg(test)]
mod tests {
    use ahoy_tokenizer::lexer::{LexedToken, Lexer, TokenKind};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// トークンの種別のみを比較するヘルパー関数
    fn extract_kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|token| token.kind).collect()
    }

    /// 行番号付きトークンを取得するヘルパー関数
    fn extract_tokens(source: &str) -> Vec<LexedToken> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_keywords() {
        let source = "program import if anif else then switch on loop to till in do when return halt next struct type enum function end";
        let expected = vec![
            TokenKind::Program,
            TokenKind::Import,
            TokenKind::If,
            TokenKind::Anif,
            TokenKind::Else,
            TokenKind::Then,
            TokenKind::Switch,
            TokenKind::On,
            TokenKind::Loop,
            TokenKind::To,
            TokenKind::Till,
            TokenKind::In,
            TokenKind::Do,
            TokenKind::When,
            TokenKind::Return,
            TokenKind::Halt,
            TokenKind::Next,
            TokenKind::Struct,
            TokenKind::Type,
            TokenKind::Enum,
            TokenKind::Function,
            TokenKind::End,
        ];

        assert_eq!(extract_kinds(source), expected);
    }

    #[test]
    fn test_word_operators() {
        let source = "and or not is plus minus times div mod greater_than less_than true false";
        let expected = vec![
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Is,
            TokenKind::PlusWord,
            TokenKind::MinusWord,
            TokenKind::Times,
            TokenKind::Div,
            TokenKind::Mod,
            TokenKind::GreaterThan,
            TokenKind::LessThan,
            TokenKind::True,
            TokenKind::False,
        ];

        assert_eq!(extract_kinds(source), expected);
    }

    #[test]
    fn test_basic_types() {
        let source = "int float string bool dict vector2 color";
        let expected = vec![
            TokenKind::IntType,
            TokenKind::FloatType,
            TokenKind::StringType,
            TokenKind::BoolType,
            TokenKind::DictType,
            TokenKind::Vector2Type,
            TokenKind::ColorType,
        ];

        assert_eq!(extract_kinds(source), expected);
    }

    #[test]
    fn test_operators_and_delimiters() {
        let source = ":: : ; , . | ?? + - * / % < > <= >= = ( ) [ ] { } $";
        let expected = vec![
            TokenKind::DoubleColon,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Pipe,
            TokenKind::Ternary,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Assign,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Dollar,
        ];

        assert_eq!(extract_kinds(source), expected);
    }

    #[test]
    fn test_assignment_operator() {
        let tokens = extract_tokens("x = 1");
        let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

        assert_eq!(
            summary,
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Assign, "="),
                (TokenKind::Number, "1"),
            ]
        );
        assert_eq!(TokenKind::Assign.as_i32(), 33);
    }

    // キーワードを接頭辞に持つ識別子
    #[test_case("index" ; "starts with in")]
    #[test_case("integer" ; "starts with int")]
    #[test_case("ending" ; "starts with end")]
    #[test_case("_private" ; "leading underscore")]
    #[test_case("is_ready2" ; "starts with is")]
    fn test_identifiers_not_split(source: &str) {
        let tokens = extract_tokens(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, source);
    }

    #[test_case("42", TokenKind::Number, "42" ; "integer")]
    #[test_case("3.14", TokenKind::Number, "3.14" ; "float")]
    #[test_case(r#""hello""#, TokenKind::String, "hello" ; "string")]
    #[test_case(r#""say \"hi\"""#, TokenKind::String, r#"say \"hi\""# ; "escapes kept verbatim")]
    #[test_case("'a'", TokenKind::Char, "a" ; "char")]
    #[test_case(r"'\n'", TokenKind::Char, r"\n" ; "escaped char")]
    fn test_literals(source: &str, kind: TokenKind, text: &str) {
        let tokens = extract_tokens(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].text, text);
    }

    #[test]
    fn test_line_tracking() {
        let source = "program demo\n\nmain :: ||:\n    print|\"hi\"|\n$\n";
        let tokens = extract_tokens(source);

        let lines: Vec<_> = tokens
            .iter()
            .filter(|t| !t.kind.is_layout())
            .map(|t| (t.text.as_str(), t.line))
            .collect();

        assert_eq!(
            lines,
            vec![
                ("program", 1),
                ("demo", 1),
                ("main", 3),
                ("::", 3),
                ("|", 3),
                ("|", 3),
                (":", 3),
                ("print", 4),
                ("|", 4),
                ("hi", 4),
                ("|", 4),
                ("$", 5),
            ]
        );
    }

    #[test]
    fn test_complete_example() {
        let source = r#"program shapes

? a rectangle
struct rect:
    w: int
    h: int
$

area :: |r: rect| int:
    return r.w * r.h
$

loop i:0 to 10 do print|area|rect<w: i, h: 2>||
"#;

        let tokens = extract_tokens(source);

        // エラーなしでトークン化できることを確認
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));

        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, 2);
        assert_eq!(indents, dedents);

        assert_eq!(tokens[0].kind, TokenKind::Program);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Struct));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Return));
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Newline));
    }

    #[test]
    fn test_unrecognized_characters() {
        let tokens = extract_tokens("x @ # y");
        let illegal: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .map(|t| t.text.as_str())
            .collect();

        assert_eq!(illegal, vec!["@", "#"]);
        assert_eq!(tokens.len(), 4);
    }
}
