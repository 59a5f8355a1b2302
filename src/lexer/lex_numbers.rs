use std::rc::Rc;

use super::tokens::Token;
use super::tokens::TokenKind::NUMERIC_LIT;
use super::Lexer;

impl Lexer {
    /// Makes a numeric literal token. Numbers are one or more digits,
    /// optionally followed by a dot and one or more fractional digits.
    /// A trailing dot is not consumed as part of the number.
    pub fn make_numeric_token(&mut self) -> Rc<Token> {
        while self.get_current().is_ascii_digit() {
            self.advance();
        }

        // Look for a fractional part.
        if self.get_current() == '.' && self.get_next().is_ascii_digit() {
            self.advance(); // Consume the "."

            while self.get_current().is_ascii_digit() {
                self.advance();
            }
        }

        self.make_token(NUMERIC_LIT)
    }
}
