use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mvi::Editor;

/// A small modal text editor.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// File to edit.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut editor = match Editor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("mvi: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &args.file {
        if let Err(err) = editor.open(path) {
            eprintln!("mvi: {err}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = editor.run() {
        eprintln!("mvi: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
