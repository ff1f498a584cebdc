//! Scanner for Lox source code.
//!
//! The [`Scanner`] converts a stream of characters into [`Token`]s, pushing
//! lexical errors out through an [`ErrorReporter`] as it goes. It reads the
//! source strictly forward through a [`Lookahead`] window that never needs
//! more than two characters.

use crate::error::ScanError;
use crate::lookahead::Lookahead;
use crate::report::ErrorReporter;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source code.
///
/// Implements [`Iterator`], yielding each token in source order followed by
/// exactly one [`TokenKind::Eof`] token. The pass is single-shot: once the
/// EOF token is out, only `None` remains.
pub struct Scanner<'r, I: Iterator<Item = char>> {
    /// Source characters with two-deep peeking.
    chars: Lookahead<I>,
    /// Error sink; reports go out the moment an error is found.
    reporter: &'r mut dyn ErrorReporter,
    /// Current 1-based line, counting every newline consumed so far.
    line: u32,
    /// Set once the EOF token has been produced.
    finished: bool,
}

impl<'r, I: Iterator<Item = char>> Scanner<'r, I> {
    /// Create a scanner over a character stream.
    pub fn new(source: I, reporter: &'r mut dyn ErrorReporter) -> Self {
        Self {
            chars: Lookahead::new(source),
            reporter,
            line: 1,
            finished: false,
        }
    }

    // =========================================
    // Internal: character access
    // =========================================

    /// Next unconsumed character, if any.
    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek(0).copied()
    }

    /// Character one past [`peek`](Self::peek), if any.
    #[inline]
    fn peek_next(&mut self) -> Option<char> {
        self.chars.peek(1).copied()
    }

    /// Consume one character, tracking line numbers.
    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    // =========================================
    // Internal: token scanning
    // =========================================

    /// Scan the next token, or `None` once the source is exhausted.
    ///
    /// Unexpected characters are reported and skipped here, in a loop, so a
    /// stray character never ends the scan.
    fn scan_token(&mut self) -> Option<Token> {
        loop {
            self.skip_trivia();
            let c = self.peek()?;

            if let Some(kind) = simple_operator(c) {
                return Some(self.read_simple(c, kind));
            }
            if let Some((bare, equal)) = compound_operator(c) {
                return Some(self.read_compound(c, bare, equal));
            }
            if c == '"' {
                return self.read_string();
            }
            if c.is_ascii_digit() {
                return Some(self.read_number());
            }

            self.advance();
            self.report(ScanError::UnexpectedCharacter);
        }
    }

    /// Skip whitespace and line comments.
    ///
    /// A comment runs up to, but not including, its newline; the whitespace
    /// arm consumes the newline and counts the line.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Read a token that is complete at one character.
    fn read_simple(&mut self, c: char, kind: TokenKind) -> Token {
        self.advance();
        self.make_token(kind, c.to_string(), None)
    }

    /// Read a `!`, `=`, `<` or `>` operator, munching a trailing `=` when
    /// one is present. Exhaustion after the first character resolves to the
    /// shorter operator.
    fn read_compound(&mut self, c: char, bare: TokenKind, equal: TokenKind) -> Token {
        self.advance();
        if self.peek() == Some('=') {
            self.advance();
            return self.make_token(equal, format!("{c}="), None);
        }
        self.make_token(bare, c.to_string(), None)
    }

    /// Read a string literal. The lexeme keeps its quotes, the literal value
    /// drops them, and newlines inside the string count toward the line
    /// number, so the token carries the line of its closing quote.
    ///
    /// Returns `None` when the closing quote never arrives: the error is
    /// reported and the scan is over, since the string consumed everything.
    fn read_string(&mut self) -> Option<Token> {
        let mut lexeme = String::from('"');
        self.advance();

        loop {
            match self.peek() {
                Some('"') => break,
                Some(c) => {
                    self.advance();
                    lexeme.push(c);
                }
                None => {
                    self.report(ScanError::UnterminatedString);
                    return None;
                }
            }
        }

        self.advance();
        lexeme.push('"');
        let contents = lexeme[1..lexeme.len() - 1].to_string();
        Some(self.make_token(TokenKind::String, lexeme, Some(Literal::String(contents))))
    }

    /// Read a number literal, including an optional fractional part.
    ///
    /// The fractional part needs the two-character window: a `.` only joins
    /// the number when a digit follows it, so `123.` is a number then a dot.
    fn read_number(&mut self) -> Token {
        let mut lexeme = String::new();
        self.read_digits(&mut lexeme);

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            lexeme.push('.');
            self.read_digits(&mut lexeme);
        }

        let value: f64 = lexeme.parse().expect("lexeme is digits with an optional fraction");
        self.make_token(TokenKind::Number, lexeme, Some(Literal::Number(value)))
    }

    /// Consume a run of ASCII digits into `lexeme`.
    fn read_digits(&mut self, lexeme: &mut String) {
        while let Some(c) = self.peek().filter(|c| c.is_ascii_digit()) {
            self.advance();
            lexeme.push(c);
        }
    }

    /// Create a token ending on the current line.
    #[inline]
    fn make_token(&self, kind: TokenKind, lexeme: String, literal: Option<Literal>) -> Token {
        Token::new(kind, lexeme, literal, self.line)
    }

    /// Push a scan error out through the reporter.
    fn report(&mut self, error: ScanError) {
        self.reporter.error(self.line, &error.to_string());
    }
}

/// Tokens stream out in source order; the EOF token is the final item.
impl<'r, I: Iterator<Item = char>> Iterator for Scanner<'r, I> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan_token() {
            Some(token) => Some(token),
            None => {
                self.finished = true;
                Some(self.make_token(TokenKind::Eof, String::new(), None))
            }
        }
    }
}

/// Map a character to its single-character token kind, or `None`.
fn simple_operator(c: char) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match c {
        '(' => LeftParen,
        ')' => RightParen,
        '{' => LeftBrace,
        '}' => RightBrace,
        ',' => Comma,
        '.' => Dot,
        '-' => Minus,
        '+' => Plus,
        ';' => Semicolon,
        '*' => Star,
        '/' => Slash,
        _ => return None,
    })
}

/// Map a compound-operator start to its one- and two-character kinds.
fn compound_operator(c: char) -> Option<(TokenKind, TokenKind)> {
    use TokenKind::*;
    Some(match c {
        '!' => (Bang, BangEqual),
        '=' => (Equal, EqualEqual),
        '<' => (Less, LessEqual),
        '>' => (Greater, GreaterEqual),
        _ => return None,
    })
}
