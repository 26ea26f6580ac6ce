use clap::{Arg, Command};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("llmwalkv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal walkthrough of the LLM text pipeline")
        .arg(
            Arg::new("text")
                .help("Initial input text to walk through")
                .required(false)
                .index(1),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "llmwalkv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "llmwalkv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "llmwalkv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
