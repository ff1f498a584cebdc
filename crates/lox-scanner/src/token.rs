//! Token types produced by the Lox scanner.
//!
//! A [`Token`] couples a [`TokenKind`] with the exact source text it was
//! scanned from, the decoded [`Literal`] value when one exists, and the
//! 1-based line it ended on.

use std::fmt;

/// A token from the source code.
///
/// Tokens own their lexeme: the scanner reads from a forward-only character
/// stream, so there is no source buffer left to borrow from once scanning
/// moves on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of token.
    pub kind: TokenKind,
    /// The source text this token was scanned from.
    pub lexeme: String,
    /// The decoded value, present only for string and number tokens.
    pub literal: Option<Literal>,
    /// 1-based line the token ends on.
    pub line: u32,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }
}

/// Tokens print as `KIND lexeme literal`, with `null` standing in for a
/// missing literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => literal.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// A literal value carried by a string or number token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String contents, without the surrounding quotes.
    String(String),
    /// Numeric value; every Lox number is a double.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            // Whole numbers keep a trailing `.0` when printed.
            Literal::Number(n) if n.trunc() == *n => write!(f, "{n:.1}"),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

/// All token types in Lox's lexical grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Single-character tokens
    // =========================================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `*`
    Star,
    /// `/`
    Slash,

    // =========================================
    // One- or two-character tokens
    // =========================================
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // =========================================
    // Literals
    // =========================================
    /// String literal: `"hello"`
    String,
    /// Number literal: `123`, `123.456`
    Number,

    // =========================================
    // Special
    // =========================================
    /// End of input
    Eof,
}

impl TokenKind {
    /// The upper-snake name used when printing tokens.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Star => "STAR",
            Slash => "SLASH",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            String => "STRING",
            Number => "NUMBER",
            Eof => "EOF",
        }
    }

    /// Check if this token kind carries a literal value.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// Check if this token kind is an operator or punctuation character.
    pub fn is_operator(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            LeftParen
                | RightParen
                | LeftBrace
                | RightBrace
                | Comma
                | Dot
                | Minus
                | Plus
                | Semicolon
                | Star
                | Slash
                | Bang
                | BangEqual
                | Equal
                | EqualEqual
                | Less
                | LessEqual
                | Greater
                | GreaterEqual
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new() {
        let token = Token::new(TokenKind::Plus, "+", None, 3);
        assert_eq!(token.kind, TokenKind::Plus);
        assert_eq!(token.lexeme, "+");
        assert_eq!(token.literal, None);
        assert_eq!(token.line, 3);
    }

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
        assert_eq!(TokenKind::BangEqual.name(), "BANG_EQUAL");
        assert_eq!(TokenKind::Semicolon.name(), "SEMICOLON");
        assert_eq!(TokenKind::String.name(), "STRING");
        assert_eq!(TokenKind::Number.name(), "NUMBER");
        assert_eq!(TokenKind::Eof.name(), "EOF");
    }

    #[test]
    fn kind_categories() {
        assert!(TokenKind::String.is_literal());
        assert!(TokenKind::Number.is_literal());
        assert!(!TokenKind::Plus.is_literal());
        assert!(!TokenKind::Eof.is_literal());

        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::LessEqual.is_operator());
        assert!(!TokenKind::String.is_operator());
        assert!(!TokenKind::Eof.is_operator());
    }

    #[test]
    fn display_operator_token() {
        let token = Token::new(TokenKind::LeftParen, "(", None, 1);
        assert_eq!(token.to_string(), "LEFT_PAREN ( null");
    }

    #[test]
    fn display_string_token() {
        let token = Token::new(
            TokenKind::String,
            "\"hi\"",
            Some(Literal::String("hi".to_string())),
            1,
        );
        assert_eq!(token.to_string(), "STRING \"hi\" hi");
    }

    #[test]
    fn display_whole_number_token() {
        let token = Token::new(TokenKind::Number, "123", Some(Literal::Number(123.0)), 1);
        assert_eq!(token.to_string(), "NUMBER 123 123.0");
    }

    #[test]
    fn display_fractional_number_token() {
        let token = Token::new(TokenKind::Number, "123.456", Some(Literal::Number(123.456)), 1);
        assert_eq!(token.to_string(), "NUMBER 123.456 123.456");
    }

    #[test]
    fn display_eof_token() {
        // The empty lexeme leaves two spaces between the name and the null.
        let token = Token::new(TokenKind::Eof, "", None, 7);
        assert_eq!(token.to_string(), "EOF  null");
    }

    #[test]
    fn display_empty_string_literal() {
        let token = Token::new(TokenKind::String, "\"\"", Some(Literal::String(String::new())), 1);
        assert_eq!(token.to_string(), "STRING \"\" ");
    }
}
