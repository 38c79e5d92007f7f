use std::process;

use clap::Parser;

use pygrep::cli::Args;

fn main() {
    let args = Args::parse();
    match pygrep::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}
