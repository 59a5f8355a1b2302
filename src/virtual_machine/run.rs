use crate::chunk::OpCode;
use crate::values::Value;
use crate::virtual_machine::{RuntimeResult, VirtualMachine};
use crate::STACK_MAX;

impl VirtualMachine {
    /// Executes the instructions in the chunk.
    pub(crate) fn run(&mut self) -> RuntimeResult {
        loop {
            // The value stack has a fixed capacity.
            if self.stack.len() > STACK_MAX {
                return RuntimeResult::Error(String::from("Stack overflow."));
            }

            let instruction = self.get_next_op_code();

            #[cfg(feature = "trace_execution")]
            self.print_execution(instruction);

            let exec = match instruction {
                // Value loaders
                OpCode::LoadConstant => self.op_load_constant(),
                OpCode::LoadImmFalse => self.op_load_immediate(Value::Bool(false)),
                OpCode::LoadImmNil => self.op_load_immediate(Value::Nil),
                OpCode::LoadImmTrue => self.op_load_immediate(Value::Bool(true)),

                // Operators
                OpCode::Add => self.perform_addition(),
                OpCode::Divide => self.perform_division(),
                OpCode::Equals => self.op_equals(),
                OpCode::GreaterThan => self.perform_greater_than(),
                OpCode::LessThan => self.perform_less_than(),
                OpCode::LogicNot => self.op_logic_not(),
                OpCode::Multiply => self.perform_multiplication(),
                OpCode::Negate => self.perform_negation(),
                OpCode::Subtract => self.perform_subtraction(),

                // VM-specific
                OpCode::Return => self.op_return(),
            };

            match exec {
                RuntimeResult::Continue => continue,
                _ => return exec,
            }
        }
    }

    /// Executes the instruction to load a constant from the pool onto
    /// the stack.
    fn op_load_constant(&mut self) -> RuntimeResult {
        let idx = self.get_next_byte() as usize;

        // LoadConstant operands always index into the pool.
        let value = *self.chunk.get_constant(idx).unwrap();
        self.push_stack(value);

        RuntimeResult::Continue
    }

    /// Executes the instruction to load an immediate value onto the stack.
    fn op_load_immediate(&mut self, value: Value) -> RuntimeResult {
        self.push_stack(value);
        RuntimeResult::Continue
    }

    /// Executes the instruction to compare the two values on top of the
    /// stack for equality. Values of any kind can be compared.
    fn op_equals(&mut self) -> RuntimeResult {
        let right = self.pop_stack();
        let left = self.pop_stack();
        self.push_stack(Value::Bool(left == right));

        RuntimeResult::Continue
    }

    /// Executes the instruction to logically negate the value on top of
    /// the stack.
    fn op_logic_not(&mut self) -> RuntimeResult {
        let value = self.pop_stack();
        self.push_stack(Value::Bool(value.is_falsey()));

        RuntimeResult::Continue
    }

    /// Executes the instruction to end the program, printing the result
    /// left on top of the stack.
    fn op_return(&mut self) -> RuntimeResult {
        let result = self.pop_stack();
        println!("{}", result);

        RuntimeResult::EndOK
    }
}
