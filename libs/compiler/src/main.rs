//! Demonstration driver.
//!
//! Compiles the first command-line argument, or the built-in demo source
//! when none is given, and prints the result.
//!
//! ```text
//! $ tinyc
//! add(2, subtract(4, 2));
//! $ tinyc "(print x)"
//! print(x);
//! ```

use config::constants::DEMO_SOURCE;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let source = std::env::args().nth(1).unwrap_or_else(|| DEMO_SOURCE.to_string());
    log::debug!("compiling {source:?}");

    match tiny_compiler::compile(&source) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
