//! Lexer (tokenizer) for search expressions.

use std::iter::Peekable;
use std::str::Chars;

use serde::Serialize;

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionedToken {
    /// The token text, quote characters included.
    pub text: String,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// Lexer for splitting search expressions into tokens.
///
/// Tokens are separated by whitespace. A double quote toggles a quoted span
/// in which whitespace is kept; the quotes themselves stay in the token
/// text. An unterminated quote runs to the end of the input.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current byte position in the input string.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Consumes and returns the next character, updating position.
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(ch) = c {
            self.position += ch.len_utf8();
        }
        c
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Returns the next token with its position, or None if at end of input.
    pub fn next_token(&mut self) -> Option<PositionedToken> {
        self.skip_whitespace();
        self.peek()?;

        let token_start = self.position;
        let mut text = String::new();
        let mut in_quotes = false;

        while let Some(&c) = self.peek() {
            if c.is_whitespace() && !in_quotes {
                break;
            }
            if c == '"' {
                in_quotes = !in_quotes;
            }
            text.push(c);
            self.next_char();
        }

        Some(PositionedToken {
            text,
            position: token_start,
        })
    }

    /// Collects all tokens with their positions.
    pub fn tokenize(mut self) -> Vec<PositionedToken> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// Splits a raw search expression into token strings.
///
/// # Example
///
/// ```
/// use card_search::tokenize_query;
///
/// assert_eq!(
///     tokenize_query(r#""Doji Hoturi" force>3"#),
///     vec![r#""Doji Hoturi""#, "force>3"]
/// );
/// ```
pub fn tokenize_query(input: &str) -> Vec<String> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|token| token.text)
        .collect()
}
