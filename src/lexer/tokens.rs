/// A token that represents a single unit of Mavix code.
#[derive(Debug)]
pub struct Token {
    /// The token's line number.
    pub line_num: usize,
    /// The token's kind.
    pub kind: TokenKind,
    /// The token's lexeme. Error tokens carry the error message here
    /// instead of source text.
    pub lexeme: String,
}

/// The kinds of tokens in a Mavix program.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    AND_KW,
    CLASS_KW,
    COMMA,
    DOT,
    ELSE_KW,
    EOF,
    EQUALS,
    ERROR,
    FALSE_LIT,
    FOR_KW,
    FUN_KW,
    GREATER_THAN,
    GREATER_THAN_EQ,
    IDENTIFIER,
    IF_KW,
    LESS_THAN,
    LESS_THAN_EQ,
    LOGIC_EQ,
    LOGIC_NOT,
    LOGIC_NOT_EQ,
    L_CURLY,
    L_PAREN,
    MINUS,
    NIL_LIT,
    NUMERIC_LIT,
    OR_KW,
    PLUS,
    PRINT_KW,
    RETURN_KW,
    R_CURLY,
    R_PAREN,
    SEMICOLON,
    SLASH,
    STAR,
    STRING_LIT,
    SUPER_KW,
    THIS_KW,
    TRUE_LIT,
    VAR_KW,
    WHILE_KW,

    // This one is only used to initialize the compiler.
    __INIT_COMPILER__,
}

/// Maps an identifier lexeme to a keyword kind.
///
/// The whole lexeme is matched, so identifiers that merely start with a
/// keyword (like `andrew`) stay identifiers.
///
/// ## Arguments
/// * `id` – The identifier's string name.
///
/// ## Returns
/// * `TokenKind` – The kind of token matched for the given identifier name.
pub fn make_identifier_kind(id: &str) -> TokenKind {
    match id {
        "and" => TokenKind::AND_KW,
        "class" => TokenKind::CLASS_KW,
        "else" => TokenKind::ELSE_KW,
        "false" => TokenKind::FALSE_LIT,
        "for" => TokenKind::FOR_KW,
        "fun" => TokenKind::FUN_KW,
        "if" => TokenKind::IF_KW,
        "nil" => TokenKind::NIL_LIT,
        "or" => TokenKind::OR_KW,
        "print" => TokenKind::PRINT_KW,
        "return" => TokenKind::RETURN_KW,
        "super" => TokenKind::SUPER_KW,
        "this" => TokenKind::THIS_KW,
        "true" => TokenKind::TRUE_LIT,
        "var" => TokenKind::VAR_KW,
        "while" => TokenKind::WHILE_KW,
        _ => TokenKind::IDENTIFIER,
    }
}
