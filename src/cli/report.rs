//! Human-readable progress and summary output.
//!
//! Progress goes to stderr so stdout stays clean; only the "no imports"
//! message is printed to stdout. Kept separate from `core` so the generator
//! can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{GenerateSummary, StubEvent};
use crate::error::BinstubError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a generation event to stderr.
pub fn print_event(event: StubEvent<'_>, verbose: bool) {
    print_event_to(event, verbose, &mut io::stderr().lock());
}

/// Print a generation event to a custom writer.
///
/// Skipped imports are only shown in verbose mode.
pub fn print_event_to<W: Write>(event: StubEvent<'_>, verbose: bool, writer: &mut W) {
    match event {
        StubEvent::Written(path) => {
            let _ = writeln!(
                writer,
                "{} wrote {}",
                SUCCESS_MARK.green(),
                path.display()
            );
        }
        StubEvent::Skipped(module) if verbose => {
            let _ = writeln!(
                writer,
                "{} {}",
                "-".dimmed(),
                format!("skipped {} (binstub:ignore)", module).dimmed()
            );
        }
        StubEvent::Skipped(_) => {}
    }
}

/// Print the end-of-run summary to stderr.
pub fn print_summary(summary: &GenerateSummary) {
    print_summary_to(summary, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let written = summary.written.len();
    let stubs = if written == 1 { "binstub" } else { "binstubs" };
    let imports = if summary.matched == 1 { "import" } else { "imports" };
    let mut msg = format!(
        "Generated {} {} from {} {}",
        written, stubs, summary.matched, imports
    );
    if !summary.skipped.is_empty() {
        msg.push_str(&format!(" ({} skipped)", summary.skipped.len()));
    }
    let _ = writeln!(writer, "{}", msg.bold());
}

/// Print the zero-match message to stdout.
pub fn print_no_imports(err: &BinstubError) {
    print_no_imports_to(err, &mut io::stdout().lock());
}

pub fn print_no_imports_to<W: Write>(err: &BinstubError, writer: &mut W) {
    let _ = writeln!(writer, "{}", err);
}
