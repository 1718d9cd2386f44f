//! Framesheet - command-line tool for packing animation frames into spritesheets

use std::process::ExitCode;

use framesheet::cli;

fn main() -> ExitCode {
    cli::run()
}
