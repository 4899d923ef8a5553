//! larkc-drv - The compiler driver.
//!
//! The driver is the thin shell around the pipeline: parse the command
//! line, read the source file, run [`larkc_compile::compile`] against a
//! fresh VM handle, and report the outcome. Diagnostics go to stderr in
//! their fixed `[Line N] Error on '...'` form; `--dump` prints a
//! disassembly of the compiled top level to stdout.
//!
//! Exit status follows the sysexits convention: 0 on success,
//! [`EXIT_COMPILE_ERROR`] (65, `EX_DATAERR`) when the source fails to
//! compile, and 1 for environment failures such as an unreadable file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use larkc_compile::compile;
use larkc_vm::{dump, Vm};

/// Exit status for a source-level compile error.
pub const EXIT_COMPILE_ERROR: u8 = 65;

/// Command line interface of the `larkc` binary.
#[derive(Debug, Parser)]
#[command(
    name = "larkc",
    version,
    about = "Compiler front-end for the Lark scripting language"
)]
pub struct Cli {
    /// Source file to compile.
    pub path: PathBuf,

    /// Print a disassembly of the compiled top-level function.
    #[arg(long)]
    pub dump: bool,
}

/// Runs one compile per the command line and returns the process exit
/// status. Environment failures become errors; compile failures are
/// reported to stderr and reflected in the status.
pub fn run(cli: &Cli) -> Result<u8> {
    let source = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    tracing::debug!(path = %cli.path.display(), bytes = source.len(), "compiling");

    let mut vm = Vm::new();
    match compile(&mut vm, &source) {
        Ok(func) => {
            tracing::debug!(
                code_bytes = func.code.len(),
                constants = func.constants.len(),
                globals = vm.globals.len(),
                methods = vm.methods.len(),
                "compile finished"
            );
            if cli.dump {
                print!("{}", dump::dump(&func));
            }
            Ok(0)
        }
        Err(err) => {
            for diagnostic in &err.diagnostics {
                eprintln!("{}", diagnostic);
            }
            Ok(EXIT_COMPILE_ERROR)
        }
    }
}
