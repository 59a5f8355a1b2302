use crate::lexer::tokens::TokenKind;

/// Represents the precedence of different expressions in ascending order.
/// For example, `PREC_EQUALITY` has lower precedence than `PREC_UNARY`
/// because `PREC_EQUALITY` appears earlier in the enum, and `PREC_UNARY`
/// appears after.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum Precedence {
    PREC_NONE,
    PREC_ASSIGNMENT, // =
    PREC_OR,         // or
    PREC_AND,        // and
    PREC_EQUALITY,   // == !=
    PREC_COMPARISON, // < > <= >=
    PREC_TERM,       // + -
    PREC_FACTOR,     // * /
    PREC_UNARY,      // ! -
    PREC_CALL,       // . ()
    PREC_PRIMARY,
}

impl Precedence {
    /// Gets the Precedence variant associated with a given numeric value.
    ///
    /// ## Arguments
    /// * `val` – The numeric value of the expected variant.
    ///
    /// ## Returns
    /// * `Precedence` – The Precedence variant associated with the
    /// provided numeric value.
    pub fn get_by_val(val: u8) -> Precedence {
        match val {
            0 => Precedence::PREC_NONE,
            1 => Precedence::PREC_ASSIGNMENT,
            2 => Precedence::PREC_OR,
            3 => Precedence::PREC_AND,
            4 => Precedence::PREC_EQUALITY,
            5 => Precedence::PREC_COMPARISON,
            6 => Precedence::PREC_TERM,
            7 => Precedence::PREC_FACTOR,
            8 => Precedence::PREC_UNARY,
            9 => Precedence::PREC_CALL,
            10 => Precedence::PREC_PRIMARY,
            _ => Precedence::PREC_NONE, // Should never be reached
        }
    }
}

/// The set of compiling functions that can be associated
/// with a given token.
#[derive(Clone, Copy)]
pub enum ParseFn {
    CompileBinaryExpr,
    CompileGrouping,
    CompileLiteral,
    CompileNumeric,
    CompileUnary,
    NONE, // Do not call a parsing function
}

/// Wraps the parsing properties of a token so that they
/// can be easily accessed throughout the compiler.
pub struct ParserRule {
    pub prefix: ParseFn,
    pub infix: ParseFn,
    pub precedence: Precedence,
}

/// Gets the parsing rule associated with a given token kind.
///
/// ## Arguments
/// * `kind` – The token kind to look up.
///
/// ## Returns
/// * `ParserRule` – The prefix/infix parselets and infix precedence
/// for the given token kind.
pub fn get_rule(kind: TokenKind) -> ParserRule {
    match kind {
        TokenKind::FALSE_LIT => ParserRule {
            prefix: ParseFn::CompileLiteral,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },

        TokenKind::GREATER_THAN => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_COMPARISON,
        },

        TokenKind::GREATER_THAN_EQ => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_COMPARISON,
        },

        TokenKind::LESS_THAN => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_COMPARISON,
        },

        TokenKind::LESS_THAN_EQ => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_COMPARISON,
        },

        TokenKind::LOGIC_EQ => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_EQUALITY,
        },

        TokenKind::LOGIC_NOT => ParserRule {
            prefix: ParseFn::CompileUnary,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },

        TokenKind::LOGIC_NOT_EQ => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_EQUALITY,
        },

        TokenKind::L_PAREN => ParserRule {
            prefix: ParseFn::CompileGrouping,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },

        TokenKind::MINUS => ParserRule {
            prefix: ParseFn::CompileUnary,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_TERM,
        },

        TokenKind::NIL_LIT => ParserRule {
            prefix: ParseFn::CompileLiteral,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },

        TokenKind::NUMERIC_LIT => ParserRule {
            prefix: ParseFn::CompileNumeric,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },

        TokenKind::PLUS => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_TERM,
        },

        TokenKind::SLASH => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_FACTOR,
        },

        TokenKind::STAR => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::CompileBinaryExpr,
            precedence: Precedence::PREC_FACTOR,
        },

        TokenKind::TRUE_LIT => ParserRule {
            prefix: ParseFn::CompileLiteral,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },

        // The rest of the tokens do not have a parse rule
        _ => ParserRule {
            prefix: ParseFn::NONE,
            infix: ParseFn::NONE,
            precedence: Precedence::PREC_NONE,
        },
    }
}
