#![allow(dead_code)]

use std::io::{self, BufRead, Write};
use std::{env, fs, process};

// Declaring crate-level modules
mod chunk;
mod compiler;
mod lexer;
mod values;
mod virtual_machine;

#[cfg(test)]
mod tests;

use virtual_machine::{InterpretResult, VirtualMachine};

/// The maximum depth of the value stack.
pub const STACK_MAX: usize = 256;

/// The maximum number of bytes accepted from a single REPL line.
pub const REPL_LINE_MAX: usize = 1024;

fn main() {
    // structure: mavix <filename?>
    let args = env::args().collect::<Vec<String>>();

    match args.as_slice() {
        [_] => repl(),
        [_, file] => run_file(file),
        _ => {
            eprintln!("Usage: mavix [script]");
            eprintln!("Run without arguments to enter interactive mode (REPL).");
            process::exit(64);
        }
    }
}

/// Runs the interactive interpreter. Each line is compiled and executed on
/// its own, and the session continues after compile and runtime errors.
fn repl() {
    println!("Mavix v0.1 [REPL mode]");
    println!("Type 'exit' or press Ctrl+D to quit.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">>> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                break;
            }
            Ok(_) => {
                truncate_line(&mut line);
                VirtualMachine::interpret(&line);
            }
        }
    }
}

/// Caps a REPL line to `REPL_LINE_MAX` bytes, never splitting a character.
fn truncate_line(line: &mut String) {
    if line.len() <= REPL_LINE_MAX {
        return;
    }

    let mut cut = REPL_LINE_MAX;
    while !line.is_char_boundary(cut) {
        cut -= 1;
    }

    line.truncate(cut);
}

/// Reads and interprets a script file.
fn run_file(filename: &str) {
    let source = match fs::read_to_string(filename) {
        Ok(contents) => contents,
        Err(_) => {
            eprintln!("Could not open file \"{}\".", filename);
            process::exit(74);
        }
    };

    // Exit the interpreter with the appropriate code
    match VirtualMachine::interpret(&source) {
        InterpretResult::CompileError => process::exit(65),
        InterpretResult::RuntimeError => process::exit(70),
        InterpretResult::Ok => (),
    }
}
