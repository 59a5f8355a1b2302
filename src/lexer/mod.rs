use std::rc::Rc;

use crate::lexer::tokens::{make_identifier_kind, Token, TokenKind};

// Submodules
mod lex_next_token;
mod lex_numbers;
mod lex_strings;
pub mod tokens;

/// Struct that represents the lexer.
///
/// The lexer is a lazy producer: tokens are scanned one at a time as the
/// compiler asks for them, never ahead of it.
pub struct Lexer {
    /// A flat list of characters from the source.
    source: Vec<char>,
    /// The index of the current character.
    current: usize,
    /// The current line number.
    line_num: usize,
    /// The position of the first character of the current token
    /// in the flat source vector.
    token_start: usize,
}

impl Lexer {
    /// An initialized instance of the lexer over the given source.
    ///
    /// ## Arguments
    /// * `src` – The source text to be tokenized.
    pub fn new(src: &str) -> Lexer {
        Self {
            source: src.chars().collect(),
            current: 0,
            line_num: 1,
            token_start: 0,
        }
    }

    /// Gets the current character without consuming it.
    pub fn get_current(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Returns the next character without consuming it.
    pub fn get_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            return '\0';
        }

        self.source[self.current + 1]
    }

    /// Checks if the lexer is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Matches the current character against a provided character,
    /// consuming it when it matches.
    ///
    /// ## Returns
    /// * `bool` – True if the current character matched the provided
    /// character, false otherwise.
    pub fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.get_current() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Advances to the next character and returns the consumed one.
    pub fn advance(&mut self) -> char {
        let current = self.get_current();
        self.current += 1;
        current
    }

    /// Skips whitespace-like characters and comments from the source code.
    ///
    /// ## Returns
    /// * `Option<Rc<Token>>` – An error token when a block comment is left
    /// unterminated, `None` otherwise.
    pub fn skip_whitespace(&mut self) -> Option<Rc<Token>> {
        loop {
            if self.is_at_end() {
                return None;
            }

            let c = self.get_current();

            if c == ' ' || c == '\r' || c == '\t' {
                self.advance();
            } else if c == '\n' {
                self.line_num += 1;
                self.advance();
            } else if c == '/' && self.get_next() == '/' {
                self.skip_single_line_comment();
            } else if c == '/' && self.get_next() == '*' {
                if let Some(error) = self.skip_block_comment() {
                    return Some(error);
                }
            } else {
                return None;
            }
        }
    }

    /// Skips a single-line comment from the source code.
    fn skip_single_line_comment(&mut self) {
        while !self.is_at_end() && self.get_current() != '\n' {
            self.advance();
        }
    }

    /// Skips a block comment from the source code. Block comments may
    /// span multiple lines and do not nest.
    ///
    /// ## Returns
    /// * `Option<Rc<Token>>` – An error token when the comment is never
    /// closed, `None` otherwise.
    fn skip_block_comment(&mut self) -> Option<Rc<Token>> {
        self.advance(); // consume the '/'
        self.advance(); // consume the '*'

        while !self.is_at_end() {
            // Stop if we are at the end of the comment.
            if self.get_current() == '*' && self.get_next() == '/' {
                self.advance();
                self.advance();
                return None;
            }

            // Take into account new lines inside block comments
            if self.get_current() == '\n' {
                self.line_num += 1;
            }

            self.advance();
        }

        Some(self.make_error_token("Unterminated multiline comment error."))
    }

    /// Generates an identifier or keyword token with the current state
    /// of the lexer.
    pub fn make_identifier_token(&mut self) -> Rc<Token> {
        while !self.is_at_end() {
            let c = self.get_current();

            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let id: String = self.source[self.token_start..self.current].iter().collect();
        let kind = make_identifier_kind(id.as_str());

        self.make_token(kind)
    }

    /// Generates a token with the current state of the lexer.
    pub fn make_token(&self, kind: TokenKind) -> Rc<Token> {
        let lexeme = match kind {
            TokenKind::EOF => String::from("\0"),
            _ => self.source[self.token_start..self.current].iter().collect(),
        };

        Rc::new(Token {
            line_num: self.line_num,
            kind,
            lexeme,
        })
    }

    /// Generates an error token with the provided message as its lexeme.
    ///
    /// ## Arguments
    /// * `message` – A message for the error token. This will be used as
    /// the token's lexeme.
    ///
    /// ## Returns
    /// * `Rc<Token>` – The generated error token.
    pub fn make_error_token(&self, message: &str) -> Rc<Token> {
        Rc::new(Token {
            line_num: self.line_num,
            kind: TokenKind::ERROR,
            lexeme: String::from(message),
        })
    }
}
