//! Lexer for the CREATE TABLE dialect using logos.
//!
//! Lines are lexed one at a time; keywords are plain [`Token::Word`]s and are
//! matched case-insensitively by the parser.

use crate::span::Span;
use logos::Logos;

/// Token types for one schema source line.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+|--[^\n]*")]
pub enum Token {
    /// Backtick-delimited identifier, delimiters removed.
    #[regex(r"`[^`]*`", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Quoted(String),

    /// Quoted string literal, kept verbatim including its quotes. A doubled
    /// quote stays inside the literal.
    #[regex(r#""([^"\\]|\\.|"")*""#, |lex| lex.slice().to_string())]
    #[regex(r#"'([^'\\]|\\.|'')*'"#, |lex| lex.slice().to_string())]
    Str(String),

    /// Bare word: keyword, type name or unquoted identifier.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),

    /// Numeric literal, kept verbatim.
    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,
}

impl Token {
    /// Check if this token is the given keyword, ignoring case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
    }

    /// Source text of the token as written.
    pub fn text(&self) -> String {
        match self {
            Token::Quoted(s) => format!("`{}`", s),
            Token::Str(s) | Token::Word(s) | Token::Number(s) => s.clone(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::Eq => "=".to_string(),
            Token::Dot => ".".to_string(),
        }
    }
}

/// Strip the quotes from a string literal and resolve escapes.
///
/// Input that is not quoted is returned unchanged.
pub fn unquote(raw: &str) -> String {
    let quote = match raw.chars().next() {
        Some(q @ ('\'' | '"')) if raw.len() >= 2 && raw.ends_with(q) => q,
        _ => return raw.to_string(),
    };
    unescape_string(&raw[1..raw.len() - 1], quote)
}

/// Unescape a string literal, handling common escape sequences and doubled
/// `quote` characters.
fn unescape_string(s: &str, quote: char) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == quote && chars.peek() == Some(&quote) {
            chars.next();
            result.push(quote);
        } else if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// A token with its span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

/// Lexer that produces spanned tokens.
///
/// An unrecognised character is yielded as an `Err` carrying its span.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Option<Result<SpannedToken, Span>> {
        let token = self.inner.next()?;
        let span: Span = self.inner.span().into();
        Some(token.map(|token| SpannedToken { token, span }).map_err(|()| span))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<SpannedToken, Span>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize a line, failing on the first unrecognised character.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, Span> {
    Lexer::new(source).collect()
}
