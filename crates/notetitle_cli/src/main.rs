//! CLI entry point.
//!
//! # Responsibility
//! - Print the demonstration title when run without arguments.
//! - Summarize each note file given as argument (`-` reads stdin).
//! - Keep output deterministic: `Title:`, `Label:`, `Type:` lines per input,
//!   one blank line between inputs.

use log::{error, info};
use notetitle_core::{core_version, extract_title, init_logging, CoreConfig, NoteSummary};
use std::error::Error;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

const DEMO_CONTENT: &str = "Sample Note Title\n\nThis is the content of the note.";
const STDIN_ARG: &str = "-";
const STDIN_LABEL: &str = "stdin";

/// One input ready for summarizing.
struct NoteInput<'a> {
    fallback_label: &'a str,
    content: String,
}

fn main() -> ExitCode {
    let inputs = std::env::args().skip(1).collect::<Vec<_>>();
    match run(&inputs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error");
            eprintln!("notetitle: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(inputs: &[String]) -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = init_logging(&config)? {
        info!(
            "event=cli_start module=cli status=ok version={} inputs={} log_dir={}",
            core_version(),
            inputs.len(),
            log_dir.display()
        );
    }

    let mut out = std::io::stdout().lock();
    if inputs.is_empty() {
        write_demo(&mut out)?;
        return Ok(());
    }

    let notes = inputs
        .iter()
        .map(|input| -> Result<NoteInput, String> {
            Ok(NoteInput {
                fallback_label: fallback_label(input),
                content: read_input(input)?,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;
    write_summaries(&mut out, &notes, config.label_max_chars)?;
    out.flush()?;
    Ok(())
}

fn write_demo(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Title: {}", extract_title(DEMO_CONTENT))
}

fn write_summaries(
    out: &mut impl Write,
    notes: &[NoteInput<'_>],
    label_max_chars: usize,
) -> std::io::Result<()> {
    for (index, note) in notes.iter().enumerate() {
        let summary =
            NoteSummary::from_content(&note.content, label_max_chars, note.fallback_label);
        info!(
            "event=note_summarized module=cli status=ok chars={} content_type={} untitled={}",
            note.content.chars().count(),
            summary.hint.content_type,
            summary.title.is_untitled()
        );

        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Title: {}", summary.title)?;
        writeln!(out, "Label: {}", summary.label)?;
        writeln!(out, "Type: {}", summary.hint.format)?;
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String, String> {
    if input == STDIN_ARG {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|err| format!("failed to read stdin: {err}"))?;
        return Ok(content);
    }

    std::fs::read_to_string(input).map_err(|err| format!("failed to read `{input}`: {err}"))
}

fn fallback_label(input: &str) -> &str {
    if input == STDIN_ARG {
        return STDIN_LABEL;
    }
    Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(input)
}
