//! トークン定義

use logos::Logos;
use std::fmt;

/// Ahoy言語のトークン種別
///
/// The discriminants are the values that cross the C boundary in
/// `Token::token_type`. Consumers hard-code some of them (NEWLINE, INDENT and
/// DEDENT in particular), so they must never be renumbered.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\f\r]+")] // 空白文字をスキップ（改行以外）
#[logos(skip r"\?(?:[^?\n][^\n]*)?")] // `?`から行末までのコメント
#[repr(i32)]
pub enum TokenKind {
    /// 認識できない入力
    Illegal = 0,

    #[regex(r"\n")]
    Newline = 3,

    // 識別子（キーワードの後に来る必要がある）
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 1)]
    Identifier = 4,

    // リテラル
    #[regex(r"[0-9]+(?:\.[0-9]+)?")]
    Number = 5,
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    String = 6,
    #[regex(r"'(?:[^'\\]|\\.)'")]
    Char = 7,

    // 演算子・区切り文字
    #[token("::")]
    DoubleColon = 10,
    #[token(":")]
    Colon = 11,
    #[token(";")]
    Semicolon = 12,
    #[token(",")]
    Comma = 13,
    #[token(".")]
    Dot = 14,
    #[token("|")]
    Pipe = 15,
    #[token("??")]
    Ternary = 16,
    #[token("+")]
    Plus = 17,
    #[token("-")]
    Minus = 18,
    #[token("*")]
    Star = 19,
    #[token("/")]
    Slash = 20,
    #[token("%")]
    Percent = 21,
    #[token("<")]
    Less = 22,
    #[token(">")]
    Greater = 23,
    #[token("<=")]
    LessEqual = 24,
    #[token(">=")]
    GreaterEqual = 25,
    #[token("(")]
    LeftParen = 26,
    #[token(")")]
    RightParen = 27,
    #[token("[")]
    LeftBracket = 28,
    #[token("]")]
    RightBracket = 29,
    #[token("{")]
    LeftBrace = 30,
    #[token("}")]
    RightBrace = 31,
    #[token("$")]
    Dollar = 32,
    #[token("=")]
    Assign = 33,

    // キーワード
    #[token("program")]
    Program = 40,
    #[token("import")]
    Import = 41,
    #[token("if")]
    If = 42,
    #[token("anif")]
    Anif = 43,
    #[token("else")]
    Else = 44,
    #[token("then")]
    Then = 45,
    #[token("switch")]
    Switch = 46,
    #[token("on")]
    On = 47,
    #[token("loop")]
    Loop = 48,
    #[token("to")]
    To = 49,
    #[token("till")]
    Till = 50,
    #[token("in")]
    In = 51,
    #[token("do")]
    Do = 52,
    #[token("when")]
    When = 53,
    #[token("return")]
    Return = 54,
    #[token("halt")]
    Halt = 55,
    #[token("next")]
    Next = 56,
    #[token("struct")]
    Struct = 57,
    #[token("type")]
    Type = 58,
    #[token("enum")]
    Enum = 59,
    #[token("function")]
    Function = 60,
    #[token("end")]
    End = 61,
    #[token("and")]
    And = 62,
    #[token("or")]
    Or = 63,
    #[token("not")]
    Not = 64,
    #[token("is")]
    Is = 65,
    #[token("plus")]
    PlusWord = 66,
    #[token("minus")]
    MinusWord = 67,
    #[token("times")]
    Times = 68,
    #[token("div")]
    Div = 69,
    #[token("mod")]
    Mod = 70,

    // インデント（レキサーが行頭で合成する）
    Indent = 71,
    Dedent = 72,

    #[token("greater_than")]
    GreaterThan = 73,
    #[token("less_than")]
    LessThan = 74,

    // 真偽値リテラル
    #[token("true")]
    True = 75,
    #[token("false")]
    False = 76,

    // 基本型
    #[token("int")]
    IntType = 80,
    #[token("float")]
    FloatType = 81,
    #[token("string")]
    StringType = 82,
    #[token("bool")]
    BoolType = 83,
    #[token("dict")]
    DictType = 84,
    #[token("vector2")]
    Vector2Type = 85,
    #[token("color")]
    ColorType = 86,
}

macro_rules! kind_names {
    ($($variant:ident => $name:literal,)*) => {
        impl TokenKind {
            /// Every kind, in discriminant order
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Upper-case name used in dumps and by C consumers
            pub fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }

            /// Same as [`TokenKind::name`], with a trailing NUL byte
            pub fn nul_terminated_name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => concat!($name, "\0"),)*
                }
            }
        }
    };
}

kind_names! {
    Illegal => "ILLEGAL",
    Newline => "NEWLINE",
    Identifier => "IDENTIFIER",
    Number => "NUMBER",
    String => "STRING",
    Char => "CHAR",
    DoubleColon => "DOUBLE_COLON",
    Colon => "COLON",
    Semicolon => "SEMICOLON",
    Comma => "COMMA",
    Dot => "DOT",
    Pipe => "PIPE",
    Ternary => "TERNARY",
    Plus => "PLUS",
    Minus => "MINUS",
    Star => "MULTIPLY",
    Slash => "DIVIDE",
    Percent => "MODULO",
    Less => "LESS",
    Greater => "GREATER",
    LessEqual => "LESS_EQUAL",
    GreaterEqual => "GREATER_EQUAL",
    LeftParen => "LPAREN",
    RightParen => "RPAREN",
    LeftBracket => "LBRACKET",
    RightBracket => "RBRACKET",
    LeftBrace => "LBRACE",
    RightBrace => "RBRACE",
    Dollar => "DOLLAR",
    Assign => "ASSIGN",
    Program => "PROGRAM",
    Import => "IMPORT",
    If => "IF",
    Anif => "ANIF",
    Else => "ELSE",
    Then => "THEN",
    Switch => "SWITCH",
    On => "ON",
    Loop => "LOOP",
    To => "TO",
    Till => "TILL",
    In => "IN",
    Do => "DO",
    When => "WHEN",
    Return => "RETURN",
    Halt => "HALT",
    Next => "NEXT",
    Struct => "STRUCT",
    Type => "TYPE",
    Enum => "ENUM",
    Function => "FUNCTION",
    End => "END",
    And => "AND",
    Or => "OR",
    Not => "NOT",
    Is => "IS",
    PlusWord => "PLUS_WORD",
    MinusWord => "MINUS_WORD",
    Times => "TIMES",
    Div => "DIV",
    Mod => "MOD",
    Indent => "INDENT",
    Dedent => "DEDENT",
    GreaterThan => "GREATER_THAN_WORD",
    LessThan => "LESS_THAN_WORD",
    True => "TRUE",
    False => "FALSE",
    IntType => "INT_TYPE",
    FloatType => "FLOAT_TYPE",
    StringType => "STRING_TYPE",
    BoolType => "BOOL_TYPE",
    DictType => "DICT_TYPE",
    Vector2Type => "VECTOR2_TYPE",
    ColorType => "COLOR_TYPE",
}

impl TokenKind {
    /// Wire value of this kind
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Look a wire value back up; `None` for values outside the vocabulary
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_i32() == value)
    }

    /// Kinds that the lexer synthesizes from layout rather than matching text
    pub fn is_layout(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
