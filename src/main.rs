use anyhow::Result;
use std::io;

mod bank;
mod error;
mod ledger;
mod output;
mod session;
mod settings;
mod shell;
mod stats;

use crate::output::console::{ConsoleInput, ConsoleOutput};
use crate::settings::Settings;
use crate::shell::Shell;

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::default();
    let stdin = io::stdin();
    let input = ConsoleInput::new(stdin.lock());
    let output = ConsoleOutput::new(io::stdout());

    let mut shell = Shell::new(settings, input, output);
    shell.run(&mut rand::thread_rng())
}
