//! Cube simulator command line (default binary).
//!
//! Scrambles and turns a cube from the command line and prints the result.
//! Set `RUST_LOG=debug` to trace every applied turn.

use anyhow::Result;

use cubesim::cli::{parse_args, run};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}
