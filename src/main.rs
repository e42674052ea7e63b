use std::fs;

use clap::Parser;
use ember::{Mode, get_result, interpreter::environment::registry::Registry};

/// ember runs programs written in a small statically typed scripting
/// language. The exit status is the integer returned by `main()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ember to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Stops after the program has been analyzed, without running it.
    #[arg(short, long, conflicts_with = "unchecked")]
    check: bool,

    /// Runs the program without analyzing it first.
    #[arg(short, long)]
    unchecked: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mode = if args.check {
        Mode::CheckOnly
    } else if args.unchecked {
        Mode::Unchecked
    } else {
        Mode::Checked
    };

    match get_result(&script, &Registry::standard(), mode) {
        Ok(Some(code)) => std::process::exit(code),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
