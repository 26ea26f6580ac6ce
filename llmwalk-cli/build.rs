use clap::{Arg, ArgAction, Command};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("llmwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Non-interactive walkthrough of the LLM text pipeline")
        .arg(
            Arg::new("text")
                .help("Input text to walk through the pipeline")
                .index(1),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .help("Seed for reproducible output synthesis"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Transcript format: text, json, or yaml"),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the pipeline stages")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "llmwalk", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "llmwalk", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "llmwalk", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
