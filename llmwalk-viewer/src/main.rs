//! Standalone binary for the interactive llmwalk viewer.
//! Usage:
//!   llmwalkv [text]

mod viewer;

use clap::{Arg, Command};

fn main() {
    let matches = Command::new("llmwalkv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal walkthrough of the LLM text pipeline")
        .arg(
            Arg::new("text")
                .help("Initial input text to walk through")
                .required(false)
                .index(1),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").cloned();
    if let Err(err) = viewer::run::run_viewer(text) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
