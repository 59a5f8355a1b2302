use std::rc::Rc;

use super::tokens::Token;
use super::tokens::TokenKind::*;
use super::Lexer;

impl Lexer {
    /// Scans the next token in the source.
    pub fn next_token(&mut self) -> Rc<Token> {
        // Skips all empty spaces and comments in the source code. An
        // unterminated block comment surfaces here as an error token.
        if let Some(error) = self.skip_whitespace() {
            return error;
        }

        // Reset the start of the token
        self.token_start = self.current;

        // If we are at the end, return the EOF token.
        if self.is_at_end() {
            return self.make_token(EOF);
        }

        let c = self.advance();

        // Generates an identifier/keyword if the current character starts one
        if c.is_ascii_alphabetic() || c == '_' {
            return self.make_identifier_token();
        }

        // Generates a numeric literal if the current character is a digit
        if c.is_ascii_digit() {
            return self.make_numeric_token();
        }

        match c {
            '"' => self.make_string_token(),
            '(' => self.make_token(L_PAREN),
            ')' => self.make_token(R_PAREN),
            '{' => self.make_token(L_CURLY),
            '}' => self.make_token(R_CURLY),
            ';' => self.make_token(SEMICOLON),
            ',' => self.make_token(COMMA),
            '.' => self.make_token(DOT),
            '-' => self.make_token(MINUS),
            '+' => self.make_token(PLUS),
            '/' => self.make_token(SLASH),
            '*' => self.make_token(STAR),

            // "!", "!="
            '!' if self.matches('=') => self.make_token(LOGIC_NOT_EQ),
            '!' => self.make_token(LOGIC_NOT),

            // "=", "=="
            '=' if self.matches('=') => self.make_token(LOGIC_EQ),
            '=' => self.make_token(EQUALS),

            // "<", "<="
            '<' if self.matches('=') => self.make_token(LESS_THAN_EQ),
            '<' => self.make_token(LESS_THAN),

            // ">", ">="
            '>' if self.matches('=') => self.make_token(GREATER_THAN_EQ),
            '>' => self.make_token(GREATER_THAN),

            // Everything else is an error token
            _ => self.make_error_token("Unexpected character."),
        }
    }
}
