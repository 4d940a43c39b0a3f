// main.rs

mod repl;

use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let histfile = env::var_os("HISTFILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("askline_history"));
    repl::start_repl(&histfile)
}
