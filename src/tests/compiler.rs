use crate::chunk::{Chunk, OpCode};
use crate::compiler::Compiler;
use crate::values::Value;

/// Compiles the source, panicking when the compiler reports errors.
fn compile(src: &str) -> Chunk {
    match Compiler::compile(src) {
        Ok(chunk) => chunk,
        Err(_) => panic!("Compiler Had Errors."),
    }
}

/// Collects the chunk's bytes for byte-level assertions.
fn bytes_of(chunk: &Chunk) -> Vec<u8> {
    (0..chunk.len()).map(|i| chunk.get_byte(i).unwrap()).collect()
}

#[test]
fn compiles_an_addition() {
    let chunk = compile("1 + 2");

    assert_eq!(
        bytes_of(&chunk),
        vec![
            OpCode::LoadConstant as u8,
            0,
            OpCode::LoadConstant as u8,
            1,
            OpCode::Add as u8,
            OpCode::Return as u8,
        ]
    );

    assert_eq!(chunk.get_constant(0), Some(&Value::Number(1.0)));
    assert_eq!(chunk.get_constant(1), Some(&Value::Number(2.0)));
}

#[test]
fn every_chunk_ends_with_a_return() {
    for src in ["1", "true", "nil", "1 + 2 * 3", "!(1 < 2)"] {
        let chunk = compile(src);
        assert_eq!(chunk.get_op_code(chunk.len() - 1), Some(OpCode::Return));
    }
}

#[test]
fn every_byte_has_a_line() {
    let chunk = compile("1 +\n2");

    for i in 0..chunk.len() {
        assert!(chunk.get_line(i).is_some());
    }

    // The operand of the second constant was emitted from line 2.
    assert_eq!(chunk.get_line(0), Some(1));
    assert_eq!(chunk.get_line(2), Some(2));
}

#[test]
fn factors_bind_tighter_than_terms() {
    let chunk = compile("1 + 2 * 3");

    assert_eq!(
        bytes_of(&chunk),
        vec![
            OpCode::LoadConstant as u8,
            0,
            OpCode::LoadConstant as u8,
            1,
            OpCode::LoadConstant as u8,
            2,
            OpCode::Multiply as u8,
            OpCode::Add as u8,
            OpCode::Return as u8,
        ]
    );
}

#[test]
fn grouping_overrides_precedence() {
    let chunk = compile("(1 + 2) * 3");

    assert_eq!(
        bytes_of(&chunk),
        vec![
            OpCode::LoadConstant as u8,
            0,
            OpCode::LoadConstant as u8,
            1,
            OpCode::Add as u8,
            OpCode::LoadConstant as u8,
            2,
            OpCode::Multiply as u8,
            OpCode::Return as u8,
        ]
    );
}

#[test]
fn binary_operators_are_left_associative() {
    let chunk = compile("1 - 2 - 3");

    assert_eq!(
        bytes_of(&chunk),
        vec![
            OpCode::LoadConstant as u8,
            0,
            OpCode::LoadConstant as u8,
            1,
            OpCode::Subtract as u8,
            OpCode::LoadConstant as u8,
            2,
            OpCode::Subtract as u8,
            OpCode::Return as u8,
        ]
    );
}

#[test]
fn unary_binds_tighter_than_binary() {
    let chunk = compile("-1 + 2");

    assert_eq!(
        bytes_of(&chunk),
        vec![
            OpCode::LoadConstant as u8,
            0,
            OpCode::Negate as u8,
            OpCode::LoadConstant as u8,
            1,
            OpCode::Add as u8,
            OpCode::Return as u8,
        ]
    );
}

#[test]
fn literals_compile_to_immediates() {
    assert_eq!(
        bytes_of(&compile("true")),
        vec![OpCode::LoadImmTrue as u8, OpCode::Return as u8]
    );
    assert_eq!(
        bytes_of(&compile("false")),
        vec![OpCode::LoadImmFalse as u8, OpCode::Return as u8]
    );
    assert_eq!(
        bytes_of(&compile("nil")),
        vec![OpCode::LoadImmNil as u8, OpCode::Return as u8]
    );
}

#[test]
fn compound_comparisons_compile_to_opcode_pairs() {
    let chunk = compile("1 >= 2");

    assert_eq!(
        bytes_of(&chunk),
        vec![
            OpCode::LoadConstant as u8,
            0,
            OpCode::LoadConstant as u8,
            1,
            OpCode::LessThan as u8,
            OpCode::LogicNot as u8,
            OpCode::Return as u8,
        ]
    );

    let chunk = compile("1 != 2");
    assert_eq!(chunk.get_op_code(4), Some(OpCode::Equals));
    assert_eq!(chunk.get_op_code(5), Some(OpCode::LogicNot));

    let chunk = compile("1 <= 2");
    assert_eq!(chunk.get_op_code(4), Some(OpCode::GreaterThan));
    assert_eq!(chunk.get_op_code(5), Some(OpCode::LogicNot));
}

#[test]
fn constants_may_repeat_in_the_pool() {
    let chunk = compile("1 + 1");

    assert_eq!(chunk.get_pool_size(), 2);
    assert_eq!(chunk.get_constant(0), Some(&Value::Number(1.0)));
    assert_eq!(chunk.get_constant(1), Some(&Value::Number(1.0)));
}

#[test]
fn too_many_constants_in_one_chunk() {
    // 257 distinct literals overflow the one-byte operand of the 257th.
    let src = (0..=256).map(|i| i.to_string()).collect::<Vec<_>>().join(" + ");

    assert!(Compiler::compile(&src).is_err());
}

#[test]
fn a_chunk_at_the_constant_limit_still_compiles() {
    let src = (0..256).map(|i| i.to_string()).collect::<Vec<_>>().join(" + ");

    let chunk = compile(&src);
    assert_eq!(chunk.get_pool_size(), 256);
}

#[test]
fn missing_closing_paren_is_an_error() {
    assert!(Compiler::compile("(1 + 2").is_err());
}

#[test]
fn missing_operand_is_an_error() {
    assert!(Compiler::compile("1 +").is_err());
}

#[test]
fn empty_source_is_an_error() {
    assert!(Compiler::compile("").is_err());
}

#[test]
fn trailing_tokens_are_an_error() {
    assert!(Compiler::compile("1 2").is_err());
}

#[test]
fn statements_are_not_wired_yet() {
    // Statement keywords lex fine, but no parselet accepts them.
    assert!(Compiler::compile("print 1;").is_err());
    assert!(Compiler::compile("var x = 1;").is_err());
}

#[test]
fn lexer_errors_fail_the_compile() {
    assert!(Compiler::compile("\"abc").is_err());
    assert!(Compiler::compile("1 + @").is_err());
    assert!(Compiler::compile("/* no end").is_err());
}
