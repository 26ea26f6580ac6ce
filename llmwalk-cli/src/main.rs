//! Command-line interface for llmwalk
//! This binary runs the LLM pipeline walkthrough non-interactively and prints
//! a transcript of every stage plus the synthesized output.
//!
//! Usage:
//!   llmwalk `<text>` [--seed `<n>`] [--format `<format>`]   - Run a walkthrough
//!   llmwalk --list-stages                                  - List the pipeline stages

mod transcript;

use clap::{Arg, ArgAction, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use transcript::Transcript;

fn main() {
    let matches = Command::new("llmwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Non-interactive walkthrough of the LLM text pipeline")
        .arg_required_else_help(true)
        .arg(
            Arg::new("text")
                .help("Input text to walk through the pipeline")
                .required_unless_present("list-stages")
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
                .help("Transcript format: text, json, or yaml")
                .default_value("text"),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the pipeline stages")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-stages") {
        handle_list_stages_command();
        return;
    }

    let text = matches
        .get_one::<String>("text")
        .expect("text is required unless listing stages");
    let format = matches.get_one::<String>("format").unwrap();
    let seed = matches.get_one::<String>("seed").map(|raw| {
        raw.parse::<u64>().unwrap_or_else(|_| {
            eprintln!("Invalid seed '{}': expected an unsigned integer", raw);
            std::process::exit(1);
        })
    });

    handle_walkthrough_command(text, seed, format);
}

/// Handle the walkthrough command
fn handle_walkthrough_command(text: &str, seed: Option<u64>, format: &str) {
    let transcript = match seed {
        Some(seed) => transcript::run_walkthrough(text, StdRng::seed_from_u64(seed)),
        None => transcript::run_walkthrough(text, rand::thread_rng()),
    };

    let formatted = format_transcript(&transcript, format);
    print!("{}", formatted);
}

/// Serialize a transcript into the requested format
fn format_transcript(transcript: &Transcript, format: &str) -> String {
    match format {
        "text" => transcript.to_text(),
        "json" => serde_json::to_string_pretty(transcript).unwrap_or_else(|e| {
            eprintln!("Error formatting transcript: {}", e);
            std::process::exit(1);
        }),
        "yaml" => serde_yaml::to_string(transcript).unwrap_or_else(|e| {
            eprintln!("Error formatting transcript: {}", e);
            std::process::exit(1);
        }),
        fmt => {
            eprintln!("Format '{}' not supported", fmt);
            eprintln!("Available formats: text, json, yaml");
            std::process::exit(1);
        }
    }
}

/// Handle the list-stages command
fn handle_list_stages_command() {
    println!("Pipeline stages:\n");

    for stage in llmwalk_core::STANDARD_STAGES.iter() {
        println!("  {}", stage.name);
        println!("    {}", stage.description);
        println!();
    }
}
