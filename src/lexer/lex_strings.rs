use std::rc::Rc;

use super::tokens::Token;
use super::tokens::TokenKind::STRING_LIT;
use super::Lexer;

impl Lexer {
    /// Makes a string literal token. The lexeme spans both quotes, and
    /// newlines inside the string are counted.
    pub fn make_string_token(&mut self) -> Rc<Token> {
        while !self.is_at_end() && self.get_current() != '"' {
            if self.get_current() == '\n' {
                self.line_num += 1;
            }

            self.advance();
        }

        if self.is_at_end() {
            return self.make_error_token("Unterminated string.");
        }

        self.advance(); // The closing quote
        self.make_token(STRING_LIT)
    }
}
