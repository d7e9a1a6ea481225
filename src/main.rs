//! Tfspec - debug front end for the TF output parsers
//!
//! Reads captured TF console output from a file (or stdin with `-`) and
//! prints the parsed records, one display line each.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use color_eyre::eyre::{WrapErr, bail};

use tfspec::tf::constants::HISTORY_HEADER_LINES;
use tfspec::tf::parser::{parse_history, parse_labels};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [mode, path] if mode == "history" => {
            let entries = parse_history(open(path)?, HISTORY_HEADER_LINES)
                .wrap_err_with(|| format!("parsing history output from {path}"))?;
            for entry in entries {
                println!("{}", entry.display_value());
            }
        }
        [mode, path, project_path] if mode == "labels" => {
            let entries = parse_labels(open(path)?, project_path)
                .wrap_err_with(|| format!("parsing labels output from {path}"))?;
            for entry in entries {
                println!("{}", entry.display_value());
            }
        }
        _ => bail!("usage: tfspec history <file|-> | tfspec labels <file|-> <project-path>"),
    }

    Ok(())
}

/// Open captured output for reading; `-` reads stdin
fn open(path: &str) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        "-" => Box::new(BufReader::new(io::stdin())),
        _ => Box::new(BufReader::new(File::open(path)?)),
    })
}
