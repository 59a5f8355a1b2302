use crate::chunk::OpCode;
use crate::compiler::precedence::{get_rule, ParseFn, Precedence};
use crate::compiler::Compiler;
use crate::lexer::tokens::TokenKind;
use crate::values::Value;

impl Compiler {
    /// Compiles a single expression.
    pub(super) fn compile_expression(&mut self) {
        self.parse_precedence(Precedence::PREC_ASSIGNMENT);
    }

    /// Parses and compiles anything at or above the given precedence
    /// level, starting at the current token.
    ///
    /// ## Arguments
    /// * `precedence` – The lowest precedence level to parse.
    fn parse_precedence(&mut self, precedence: Precedence) {
        self.advance();

        // The first token of an expression always belongs to a prefix rule.
        let prefix_rule = get_rule(self.get_previous_tok_kind()).prefix;

        if let ParseFn::NONE = prefix_rule {
            self.error_at_previous("Expect expression.");
            return;
        }

        self.execute_parse_fn(prefix_rule);

        // Keep compiling infix expressions as long as their precedence is
        // at or above the requested level.
        while (precedence as u8) <= (get_rule(self.get_current_tok_kind()).precedence as u8) {
            self.advance();

            let infix_rule = get_rule(self.get_previous_tok_kind()).infix;
            self.execute_parse_fn(infix_rule);
        }
    }

    /// Executes the parsing function associated with a rule.
    ///
    /// ## Arguments
    /// * `func` – The parsing function to execute.
    fn execute_parse_fn(&mut self, func: ParseFn) {
        match func {
            ParseFn::CompileBinaryExpr => self.compile_binary_expr(),
            ParseFn::CompileGrouping => self.compile_grouping(),
            ParseFn::CompileLiteral => self.compile_literal(),
            ParseFn::CompileNumeric => self.compile_numeric(),
            ParseFn::CompileUnary => self.compile_unary_expr(),
            ParseFn::NONE => {}
        }
    }

    /// Compiles a parenthesized expression.
    fn compile_grouping(&mut self) {
        self.compile_expression();
        self.consume(TokenKind::R_PAREN, "Expect ')' after expression.");
    }

    /// Compiles a numeric literal.
    fn compile_numeric(&mut self) {
        match self.previous.lexeme.parse::<f64>() {
            Ok(num) => self.emit_constant(Value::Number(num)),
            Err(_) => self.error_at_previous("Invalid numeric literal."),
        }
    }

    /// Compiles a literal expression.
    fn compile_literal(&mut self) {
        match self.get_previous_tok_kind() {
            TokenKind::FALSE_LIT => self.emit_op_code(OpCode::LoadImmFalse),
            TokenKind::NIL_LIT => self.emit_op_code(OpCode::LoadImmNil),
            TokenKind::TRUE_LIT => self.emit_op_code(OpCode::LoadImmTrue),
            _ => {} // Unreachable.
        }
    }

    /// Compiles a unary expression.
    fn compile_unary_expr(&mut self) {
        let operator = self.get_previous_tok_kind();

        // Compile the operand.
        self.parse_precedence(Precedence::PREC_UNARY);

        // Emit the operator instruction.
        match operator {
            TokenKind::MINUS => self.emit_op_code(OpCode::Negate),
            TokenKind::LOGIC_NOT => self.emit_op_code(OpCode::LogicNot),
            _ => {} // Unreachable.
        }
    }

    /// Compiles a binary expression.
    fn compile_binary_expr(&mut self) {
        let operator = self.get_previous_tok_kind();

        // Parse the right-hand operand one precedence level higher than the
        // operator's own, which makes the operator left-associative.
        let rule = get_rule(operator);
        self.parse_precedence(Precedence::get_by_val(rule.precedence as u8 + 1));

        match operator {
            TokenKind::PLUS => self.emit_op_code(OpCode::Add),
            TokenKind::MINUS => self.emit_op_code(OpCode::Subtract),
            TokenKind::STAR => self.emit_op_code(OpCode::Multiply),
            TokenKind::SLASH => self.emit_op_code(OpCode::Divide),
            TokenKind::LOGIC_EQ => self.emit_op_code(OpCode::Equals),
            TokenKind::GREATER_THAN => self.emit_op_code(OpCode::GreaterThan),
            TokenKind::LESS_THAN => self.emit_op_code(OpCode::LessThan),

            // The compound comparisons are emitted as the opposite
            // operation followed by a logical negation.
            TokenKind::LOGIC_NOT_EQ => {
                self.emit_op_code(OpCode::Equals);
                self.emit_op_code(OpCode::LogicNot);
            }
            TokenKind::GREATER_THAN_EQ => {
                self.emit_op_code(OpCode::LessThan);
                self.emit_op_code(OpCode::LogicNot);
            }
            TokenKind::LESS_THAN_EQ => {
                self.emit_op_code(OpCode::GreaterThan);
                self.emit_op_code(OpCode::LogicNot);
            }
            _ => {} // Unreachable.
        }
    }
}
