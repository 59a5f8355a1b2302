use crate::lexer::tokens::TokenKind;
use crate::lexer::tokens::TokenKind::*;
use crate::lexer::Lexer;

/// Collects every token kind in the source, including the closing EOF.
fn all_kinds(src: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(src);
    let mut kinds = vec![];

    loop {
        let kind = lexer.next_token().kind;
        kinds.push(kind);

        if kind == EOF {
            break;
        }
    }

    kinds
}

#[test]
fn single_character_tokens() {
    assert_eq!(
        all_kinds("(){};,.-+/*"),
        vec![
            L_PAREN, R_PAREN, L_CURLY, R_CURLY, SEMICOLON, COMMA, DOT, MINUS, PLUS, SLASH, STAR,
            EOF
        ]
    );
}

#[test]
fn one_or_two_character_tokens() {
    assert_eq!(
        all_kinds("! != = == < <= > >="),
        vec![
            LOGIC_NOT,
            LOGIC_NOT_EQ,
            EQUALS,
            LOGIC_EQ,
            LESS_THAN,
            LESS_THAN_EQ,
            GREATER_THAN,
            GREATER_THAN_EQ,
            EOF
        ]
    );
}

#[test]
fn keywords_are_classified() {
    assert_eq!(
        all_kinds("and class else false for fun if nil or print return super this true var while"),
        vec![
            AND_KW, CLASS_KW, ELSE_KW, FALSE_LIT, FOR_KW, FUN_KW, IF_KW, NIL_LIT, OR_KW, PRINT_KW,
            RETURN_KW, SUPER_KW, THIS_KW, TRUE_LIT, VAR_KW, WHILE_KW, EOF
        ]
    );
}

#[test]
fn identifiers_are_not_keyword_prefixes() {
    // An identifier that merely starts with a keyword stays an identifier.
    assert_eq!(all_kinds("andrew"), vec![IDENTIFIER, EOF]);
    assert_eq!(all_kinds("nil0"), vec![IDENTIFIER, EOF]);
    assert_eq!(all_kinds("_var"), vec![IDENTIFIER, EOF]);
}

#[test]
fn integer_and_float_lexemes() {
    let mut lexer = Lexer::new("123 3.14");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, NUMERIC_LIT);
    assert_eq!(tok.lexeme, "123");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, NUMERIC_LIT);
    assert_eq!(tok.lexeme, "3.14");
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    let mut lexer = Lexer::new("4.");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, NUMERIC_LIT);
    assert_eq!(tok.lexeme, "4");

    assert_eq!(lexer.next_token().kind, DOT);
}

#[test]
fn string_lexeme_spans_both_quotes() {
    let mut lexer = Lexer::new("\"abc\"");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, STRING_LIT);
    assert_eq!(tok.lexeme, "\"abc\"");
}

#[test]
fn newlines_inside_strings_are_counted() {
    let mut lexer = Lexer::new("\"a\nb\" 1");

    assert_eq!(lexer.next_token().kind, STRING_LIT);

    let tok = lexer.next_token();
    assert_eq!(tok.kind, NUMERIC_LIT);
    assert_eq!(tok.line_num, 2);
}

#[test]
fn unterminated_string_is_an_error_token() {
    let mut lexer = Lexer::new("\"abc");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, ERROR);
    assert_eq!(tok.lexeme, "Unterminated string.");
}

#[test]
fn unterminated_block_comment_is_an_error_token() {
    let mut lexer = Lexer::new("/* abc");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, ERROR);
    assert_eq!(tok.lexeme, "Unterminated multiline comment error.");
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let src = "1 // line comment\n+ 2 /* block\ncomment */ 3";
    assert_eq!(
        all_kinds(src),
        vec![NUMERIC_LIT, PLUS, NUMERIC_LIT, NUMERIC_LIT, EOF]
    );

    // The block comment's newline still advances the line counter.
    let mut lexer = Lexer::new(src);
    let mut last_line = 0;
    loop {
        let tok = lexer.next_token();
        if tok.kind == EOF {
            break;
        }
        last_line = tok.line_num;
    }

    assert_eq!(last_line, 3);
}

#[test]
fn unknown_characters_are_error_tokens() {
    let mut lexer = Lexer::new("@");

    let tok = lexer.next_token();
    assert_eq!(tok.kind, ERROR);
    assert_eq!(tok.lexeme, "Unexpected character.");
}

#[test]
fn error_tokens_carry_their_line() {
    let mut lexer = Lexer::new("1\n@");

    assert_eq!(lexer.next_token().kind, NUMERIC_LIT);

    let tok = lexer.next_token();
    assert_eq!(tok.kind, ERROR);
    assert_eq!(tok.line_num, 2);
}

#[test]
fn eof_repeats_at_the_end() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next_token().kind, EOF);
    assert_eq!(lexer.next_token().kind, EOF);
}
