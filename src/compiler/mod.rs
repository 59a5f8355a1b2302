mod expressions;
mod precedence;

use std::rc::Rc;

use crate::chunk::{Chunk, OpCode};
use crate::lexer::tokens::{Token, TokenKind};
use crate::lexer::Lexer;
use crate::values::Value;
use crate::virtual_machine::InterpretResult;

/// Represents the compiler and its internal state.
///
/// The compiler is single-pass: the parser pulls tokens from the lexer
/// and emits bytecode directly into the chunk as it recognizes each
/// expression, with no intermediate tree.
pub struct Compiler {
    lexer: Lexer,
    previous: Rc<Token>,
    current: Rc<Token>,
    had_error: bool,
    is_in_panic: bool,
    chunk: Chunk,
}

impl Compiler {
    /// Compiles a given source string into a chunk of bytecode instructions.
    ///
    /// ## Arguments
    /// * `src` – The source string to be compiled.
    ///
    /// ## Returns
    /// * `Result<Chunk, InterpretResult>` – A chunk holding the compiled
    /// program if no compile errors were generated, an
    /// `InterpretResult::CompileError` otherwise.
    pub fn compile(src: &str) -> Result<Chunk, InterpretResult> {
        // Initialize the compiler
        let mut s = Self {
            lexer: Lexer::new(src),
            previous: Rc::new(Token {
                line_num: 0,
                kind: TokenKind::__INIT_COMPILER__,
                lexeme: String::new(),
            }),
            current: Rc::new(Token {
                line_num: 0,
                kind: TokenKind::__INIT_COMPILER__,
                lexeme: String::new(),
            }),
            had_error: false,
            is_in_panic: false,
            chunk: Chunk::new(),
        };

        // The whole program is a single expression followed by the
        // end of the source.
        s.advance();
        s.compile_expression();
        s.consume(TokenKind::EOF, "Expect end of expression.");
        s.end_compiler();

        if !s.had_error {
            Ok(s.chunk)
        } else {
            Err(InterpretResult::CompileError)
        }
    }

    /// Checks that the current token matches the token kind provided.
    ///
    /// ## Arguments
    /// * `kind` – The token kind we expect to match with the current token.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.get_current_tok_kind() == kind
    }

    /// Advances the compiler to the next token.
    pub(super) fn advance(&mut self) {
        self.previous = Rc::clone(&self.current);

        // We need a loop so that every error token the lexer produces is
        // reported here, and the compiler moves on to the next usable token.
        loop {
            self.current = self.lexer.next_token();

            match self.current.kind {
                TokenKind::ERROR => {
                    let message = self.current.lexeme.clone();
                    self.error_at_current(&message);
                }
                _ => break,
            }
        }
    }

    /// Consumes the current token only if it is of a given kind.
    /// If the token does not match the kind, emits a compiler error.
    ///
    /// ## Arguments
    /// * `kind` – The expected kind of the token to consume.
    /// * `message` – The error message to be displayed if the current
    /// token does not match the provided kind.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) {
        if self.check(kind) {
            self.advance();
            return;
        }

        self.error_at_current(message);
    }

    /// Emits a byte instruction from an OpCode into the chunk's
    /// instructions list, recording the previous token's line with it.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to add to the chunk.
    pub(super) fn emit_op_code(&mut self, instr: OpCode) {
        self.chunk.push_byte(instr as u8);
        self.chunk.push_line(self.previous.line_num);
    }

    /// Emits a byte instruction and its one-byte operand.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to add to the chunk.
    /// * `byte` – The instruction's operand.
    pub(super) fn emit_op_code_with_byte(&mut self, instr: OpCode, byte: u8) {
        self.emit_op_code(instr);
        self.chunk.push_byte(byte);
        self.chunk.push_line(self.previous.line_num);
    }

    /// Emits the instruction that ends the program.
    pub(super) fn emit_return(&mut self) {
        self.emit_op_code(OpCode::Return);
    }

    /// Adds a value to the chunk's constant pool.
    ///
    /// ## Arguments
    /// * `value` – The value to be added to the pool.
    ///
    /// ## Returns
    /// * `u8` – The position of the value in the pool, or 0 when the pool
    /// has overflowed (after reporting the error).
    pub(super) fn make_constant(&mut self, value: Value) -> u8 {
        match self.chunk.add_constant(value) {
            Ok(idx) => idx,
            Err(()) => {
                self.error_at_previous("Too many constants in one chunk.");
                0
            }
        }
    }

    /// Emits the instruction to load a constant from the pool.
    ///
    /// ## Arguments
    /// * `value` – The value to load at runtime.
    pub(super) fn emit_constant(&mut self, value: Value) {
        let idx = self.make_constant(value);
        self.emit_op_code_with_byte(OpCode::LoadConstant, idx);
    }

    /// Ends the compilation of the chunk.
    fn end_compiler(&mut self) {
        self.emit_return();

        #[cfg(feature = "print_code")]
        {
            if !self.had_error {
                crate::chunk::disassemble_chunk(&self.chunk, "<script>");
            }
        }
    }

    /// Gets the kind of the current token.
    pub(super) fn get_current_tok_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Gets the kind of the previous token.
    pub(super) fn get_previous_tok_kind(&self) -> TokenKind {
        self.previous.kind
    }

    /// Emits a compiler error from the current token.
    ///
    /// ## Arguments
    /// * `message` – The error message to display.
    pub(super) fn error_at_current(&mut self, message: &str) {
        let tok = Rc::clone(&self.current);
        self.error_at_token(&tok, message);
    }

    /// Emits a compiler error from the previous token.
    ///
    /// ## Arguments
    /// * `message` – The error message to display.
    pub(super) fn error_at_previous(&mut self, message: &str) {
        let tok = Rc::clone(&self.previous);
        self.error_at_token(&tok, message);
    }

    /// Reports a compiler error from the given token, unless the compiler
    /// is already in panic mode. Panic mode suppresses the cascade of
    /// errors that usually follows the first one, and persists until the
    /// end of the program.
    ///
    /// ## Arguments
    /// * `tok` – The token that caused the error.
    /// * `message` – The error message to display.
    fn error_at_token(&mut self, tok: &Token, message: &str) {
        if self.is_in_panic {
            return;
        }
        self.is_in_panic = true;

        eprint!("[line {}] Error", tok.line_num);

        match tok.kind {
            TokenKind::EOF => eprint!(" at end"),
            // The lexeme of an error token is the error message itself,
            // so no location context is printed for it.
            TokenKind::ERROR => {}
            _ => eprint!(" at '{}'", tok.lexeme),
        }

        eprintln!(": {}", message);
        self.had_error = true;
    }
}
