//! Docsift CLI - extract doc-style comments from source text.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use docsift::errors::{exit_code, DocsiftError};
use docsift::stream::copy_filtered;
use docsift::StreamState;

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Extract doc-style comments from source text")]
#[command(version)]
struct Cli {
    /// Source files to read, processed as one concatenated stream
    /// (reads stdin when none are given)
    files: Vec<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "docsift", &mut io::stdout());
        return;
    }

    if let Err(e) = run(cli.files) {
        eprintln!("error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(files: Vec<PathBuf>) -> Result<(), DocsiftError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // One state across all inputs: fence blocks may span file boundaries,
    // exactly as if the files had been concatenated into stdin.
    let mut state = StreamState::new();

    if files.is_empty() {
        let stdin = io::stdin();
        copy_filtered(&mut state, stdin.lock(), &mut out)?;
    } else {
        for path in files {
            let file = File::open(&path).map_err(|e| DocsiftError::from_open(path.clone(), e))?;
            copy_filtered(&mut state, BufReader::new(file), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
