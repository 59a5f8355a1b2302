use crate::values::Value;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The set of instructions supported by the virtual machine.
///
/// **NOTE:** Changing the order in which members are declared creates
/// incompatibilities between different versions of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[derive(FromPrimitive)]
pub enum OpCode {
    // Instructions with zero chunk operands.
    // While these instructions do not have any bytecode operands,
    // most of them do have value operands from the stack.
    Add,
    Divide,
    Equals,
    GreaterThan,
    LessThan,
    LoadImmFalse,
    LoadImmNil,
    LoadImmTrue,
    LogicNot,
    Multiply,
    Negate,
    Return,
    Subtract,

    // Instructions with one chunk operand.
    // These instructions use the next byte from the chunk as their operand.
    LoadConstant,
}

/// Contains all the necessary information about the instructions
/// to be executed by the virtual machine.
pub struct Chunk {
    instructions: Vec<u8>,
    lines: Vec<usize>,
    constants: Vec<Value>,
}

impl Chunk {
    /// Creates a new, empty chunk.
    pub fn new() -> Self {
        Self {
            instructions: vec![],
            lines: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Adds a constant to this chunk's constants pool.
    ///
    /// The value is always appended; when the pool has outgrown the reach
    /// of a one-byte operand the new index is unusable, and the `Err` tells
    /// the compiler to report it.
    ///
    /// ## Arguments
    /// * `value` – The value to be added to the pool.
    ///
    /// ## Returns
    /// * `Result<u8, ()>` – The position of the value in the pool, or an
    /// error if that position does not fit in one byte.
    pub fn add_constant(&mut self, value: Value) -> Result<u8, ()> {
        self.constants.push(value);
        u8::try_from(self.constants.len() - 1).map_err(|_| ())
    }

    /// Retrieves a constant from this chunk's constants pool.
    ///
    /// ## Arguments
    /// * `idx` – The index of the constant.
    ///
    /// ## Returns
    /// * `Option<&Value>` – The value at the given index in the constant pool.
    pub fn get_constant(&self, idx: usize) -> Option<&Value> {
        self.constants.get(idx)
    }

    /// Gets the number of constants currently in the pool.
    pub fn get_pool_size(&self) -> usize {
        self.constants.len()
    }

    /// Returns the OpCode associated with a byte in the instructions list.
    ///
    /// ## Arguments
    /// * `idx` – The index of the instruction in the instructions list.
    ///
    /// ## Returns
    /// * `Option<OpCode>` – The OpCode instruction at the given index.
    pub fn get_op_code(&self, idx: usize) -> Option<OpCode> {
        match self.instructions.get(idx) {
            Some(byte) => FromPrimitive::from_u8(*byte),
            None => None,
        }
    }

    /// Retrieves a raw byte from the instructions list.
    ///
    /// ## Arguments
    /// * `idx` – The index of the byte in the instructions list.
    ///
    /// ## Returns
    /// * `Option<u8>` – The byte at the given index.
    pub fn get_byte(&self, idx: usize) -> Option<u8> {
        self.instructions.get(idx).copied()
    }

    /// Adds a raw byte into the instructions list.
    ///
    /// ## Arguments
    /// * `val` – The byte to add to the instructions list.
    pub fn push_byte(&mut self, val: u8) {
        self.instructions.push(val);
    }

    /// Gets the source line associated with the byte at the given
    /// instruction index.
    pub fn get_line(&self, idx: usize) -> Option<usize> {
        self.lines.get(idx).copied()
    }

    /// Pushes the source line associated with the last byte in the
    /// instructions list.
    pub fn push_line(&mut self, line: usize) {
        self.lines.push(line);
    }

    /// Gets the length of the instructions list.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Checks whether the instructions list is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Disassembles the chunk, printing each instruction and
/// its related information.
///
/// ## Arguments
/// * `chunk` – The chunk to disassemble.
/// * `name` – The name to print for the current chunk.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) {
    // prints this chunk's name
    println!("==== {} ====", name);

    let mut current_line = 0;
    let mut idx = 0;

    while idx < chunk.len() {
        let code = chunk.get_op_code(idx);

        // Prints a line number, or a vertical bar indicating that the
        // current instruction is in the same line as the previous one.
        match chunk.get_line(idx) {
            Some(line) if line != current_line => {
                print!("{:>03}\t", line);
                current_line = line;
            }
            Some(_) => print!(" |\t"),
            None => print!("??? "),
        }

        // Prints the offset of the current instruction
        print!("{:>04} ", idx);

        match code {
            Some(instr) => {
                // Prints the instruction byte with its name
                print!("\x1b[32m{:#04X}\x1b[0m – \x1b[36m{:?}\x1b[0m", instr as u8, instr);

                match instr {
                    // Prints the value associated with a LoadConstant instruction
                    OpCode::LoadConstant => {
                        idx += 1;

                        let constant = chunk
                            .get_byte(idx)
                            .and_then(|pos| chunk.get_constant(pos as usize));

                        match constant {
                            Some(value) => println!("\t---> {}", value),
                            None => println!("\t---> ???"),
                        }
                    }

                    // The other instructions take no operand, so print nothing
                    _ => println!(),
                }
            }
            None => println!("No Instruction Found..."),
        }

        idx += 1;
    }

    println!();
}
