//! mdcat CLI - render Markdown files to the terminal

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use mdcat::Options;

/// Render Markdown to the terminal.
///
/// Color is used only when standard output is a terminal.
#[derive(Parser, Debug)]
#[command(name = "mdcat", version, about)]
struct Cli {
    /// Markdown files to render, in order (reads standard input if none; `-` is standard input)
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let options = Options {
        color: stdout.is_terminal(),
    };
    log::debug!("color output: {}", options.color);

    // Stdout is line buffered; blocks show up as they are rendered.
    let mut out = stdout.lock();
    match run(&cli.files, &mut out, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            // Keep whatever was rendered before the failure.
            let _ = out.flush();
            eprintln!("mdcat: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(files: &[PathBuf], out: &mut W, options: &Options) -> mdcat::Result<()> {
    if files.is_empty() {
        return mdcat::render_stdin(out, options);
    }
    for path in files {
        if path == Path::new("-") {
            mdcat::render_stdin(out, options)?;
        } else {
            mdcat::render_path(path, out, options)?;
        }
    }
    Ok(())
}
