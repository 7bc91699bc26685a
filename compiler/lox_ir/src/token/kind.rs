use std::fmt;

/// Token kinds for Lox.
///
/// Fieldless: literal payloads live in [`Literal`](crate::Literal) so the
/// kind stays `Copy` and can be compared without touching token data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Reserved words
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Canonical upper-case name, as used in the textual token rendering.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "END_OF_FILE",
        }
    }

    /// If this token is a reserved word, return its spelling.
    pub const fn keyword_str(self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("and"),
            TokenKind::Class => Some("class"),
            TokenKind::Else => Some("else"),
            TokenKind::False => Some("false"),
            TokenKind::Fun => Some("fun"),
            TokenKind::For => Some("for"),
            TokenKind::If => Some("if"),
            TokenKind::Nil => Some("nil"),
            TokenKind::Or => Some("or"),
            TokenKind::Print => Some("print"),
            TokenKind::Return => Some("return"),
            TokenKind::Super => Some("super"),
            TokenKind::This => Some("this"),
            TokenKind::True => Some("true"),
            TokenKind::Var => Some("var"),
            TokenKind::While => Some("while"),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    /// Whether tokens of this kind carry a [`Literal`](crate::Literal) payload.
    #[inline]
    pub const fn has_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
