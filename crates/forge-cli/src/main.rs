//! SiteForge command line
//!
//! Feeds an already-obtained response text through the pipeline. Obtaining
//! the text (request building, service invocation) is the collaborator's
//! job; this binary starts where a saved response file ends.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("siteforge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract generated source files from a response text and write them safely")
        .arg(
            Arg::new("input")
                .value_name("RESPONSE-FILE")
                .required(true)
                .help("Saved response text, or '-' to read stdin"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .value_name("DIR")
                .default_value(".")
                .help("Destination root for the extracted files"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Show what would be extracted without writing anything"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the run report as JSON on stdout"),
        )
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading response text from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("reading response text from '{input}'"))
    }
}

fn real_main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let input = matches
        .get_one::<String>("input")
        .expect("required argument");
    let out = matches.get_one::<String>("out").expect("defaulted argument");
    let dry_run = matches.get_flag("dry-run");
    let json = matches.get_flag("json");

    let text = read_input(input)?;

    if dry_run {
        let extraction = forge_core::inspect(&text);
        if json {
            println!("{}", serde_json::to_string_pretty(&extraction)?);
        } else {
            for (name, content) in extraction.files.iter() {
                println!("Would write: {} ({} chars)", name, content.chars().count());
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let report = forge_core::run(&text, &PathBuf::from(out));
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for outcome in &report.outcomes {
            println!("{outcome}");
        }
        println!(
            "Generated {} file(s) in {}",
            report.written().len(),
            out
        );
    }

    // Unsafe-path skips and the fallback warning are reported above but do
    // not fail the run; I/O failures do
    if report.has_io_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
