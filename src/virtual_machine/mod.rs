// Submodules
mod arithmetic;
mod run;

use crate::chunk::{Chunk, OpCode};
use crate::compiler::Compiler;
use crate::values::Value;
use crate::STACK_MAX;

/// The kinds of results the interpreter can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretResult {
    CompileError,
    Ok,
    RuntimeError,
}

/// The kinds of results produced while the dispatch loop executes
/// individual instructions.
pub(crate) enum RuntimeResult {
    Continue,
    EndOK,
    Error(String),
}

/// Represents the virtual machine and its internal state: the chunk being
/// executed, the instruction pointer into it, and the value stack.
pub struct VirtualMachine {
    chunk: Chunk,
    ip: usize,
    stack: Vec<Value>,
}

impl VirtualMachine {
    /// Interprets a source string.
    ///
    /// ## Arguments
    /// * `source` – The program's source text.
    ///
    /// ## Returns
    /// * `InterpretResult` – The result of the source interpretation.
    pub fn interpret(source: &str) -> InterpretResult {
        // Compiles the program into bytecode
        let chunk = match Compiler::compile(source) {
            Ok(chunk) => chunk,
            Err(error) => return error,
        };

        // Creates a fresh virtual machine bound to the compiled chunk
        let mut vm = VirtualMachine {
            chunk,
            ip: 0,
            stack: Vec::with_capacity(STACK_MAX),
        };

        // Executes the program
        match vm.run() {
            RuntimeResult::EndOK => InterpretResult::Ok,
            RuntimeResult::Error(message) => {
                vm.report_runtime_error(&message);
                InterpretResult::RuntimeError
            }
            RuntimeResult::Continue => {
                unreachable!("The dispatch loop only returns terminal results.")
            }
        }
    }

    /// Gets the next OpCode to be executed, advancing the instruction
    /// pointer past it.
    pub(super) fn get_next_op_code(&mut self) -> OpCode {
        let code = self.chunk.get_op_code(self.ip);
        self.ip += 1;

        // The compiler only emits well-formed chunks, so the byte at the
        // instruction pointer is always a valid opcode.
        code.unwrap()
    }

    /// Gets the next byte in the chunk as an operand, advancing the
    /// instruction pointer past it.
    pub(super) fn get_next_byte(&mut self) -> u8 {
        let byte = self.chunk.get_byte(self.ip);
        self.ip += 1;

        byte.unwrap()
    }

    /// Pops the value on top of the stack.
    pub(super) fn pop_stack(&mut self) -> Value {
        match self.stack.pop() {
            Some(val) => val,
            None => panic!("Stack is empty!"),
        }
    }

    /// Pushes a value onto the top of the stack.
    pub(super) fn push_stack(&mut self, new_val: Value) {
        self.stack.push(new_val)
    }

    /// Peeks a value on the stack without popping it.
    ///
    /// ## Arguments
    /// * `distance` – How far down from the top of the stack to look;
    /// zero is the top.
    pub(super) fn peek_stack(&self, distance: usize) -> &Value {
        &self.stack[self.stack.len() - 1 - distance]
    }

    /// Reports a runtime error to the console and resets the stack.
    ///
    /// ## Arguments
    /// * `message` – The error message to be displayed.
    pub(super) fn report_runtime_error(&mut self, message: &str) {
        eprintln!("{}", message);

        // The instruction pointer has already moved past the instruction
        // that failed, so its line lives one byte behind it.
        match self.chunk.get_line(self.ip - 1) {
            Some(line) => eprintln!("[line {}] in script", line),
            None => eprintln!("[line ?] in script"),
        }

        self.stack.clear();
    }

    /// Prints the execution trace for the program. Useful for debugging the VM.
    ///
    /// ## Arguments
    /// * `instr` – The current OpCode to be executed.
    #[cfg(feature = "trace_execution")]
    pub(super) fn print_execution(&self, instr: OpCode) {
        println!("\n==========================");

        // Prints the next instruction to be executed
        println!("OpCode:\t\x1b[36m{:?}\x1b[0m", instr);
        println!("Byte:\t{:#04X}", instr as u8);

        // Prints the index of the current instruction
        println!("IP:\t{:>04}", self.ip);

        // Prints the current state of the values stack
        print!("stack\t");
        for val in self.stack.iter() {
            print!("[ {} ]", val);
        }
        println!();
    }
}
