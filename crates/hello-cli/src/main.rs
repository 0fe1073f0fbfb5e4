use std::io::Write;

use anyhow::Result;
use clap::Parser;
use hello_id::{banner, CompilerId};

/// Identity token baked in by build.rs; empty when the build declared none.
const COMPILER_ID_TOKEN: &str = env!("HELLO_COMPILER_ID");

/// Compiler-name token baked in by build.rs, printed verbatim.
const COMPILER_NAME: &str = env!("HELLO_COMPILER_NAME");

#[derive(Parser, Debug)]
#[command(name = "hello-compiler")]
#[command(about = "Print a greeting selected by the compiler identity the build declared")]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();

    let id = CompilerId::from_token(COMPILER_ID_TOKEN);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", banner(id, COMPILER_NAME))?;

    Ok(())
}
