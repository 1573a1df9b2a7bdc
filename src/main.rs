//! Runs the assembly line once with the default configuration:
//! 5 workers and 10 items of each kind.
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use assembly_line::prelude::*;
use env_logger::{Builder, Env, Target};

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let report = AssemblyLine::new(LineConfig::default())?.run()?;

    println!();
    println!("{}", report);
    Ok(())
}
