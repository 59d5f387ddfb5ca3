//! Pure formatting functions for UI output.
//!
//! Machine-readable results go to stdout as `key=value` lines so CI steps can
//! capture them; human messages are coloured and go to stderr.

use crate::cli::WorkflowResult;

/// Render the CI `key=value` lines for a workflow result.
pub fn render_outputs(result: &WorkflowResult) -> Vec<String> {
    let previous = result
        .previous
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let classification = result
        .classification
        .map(|c| c.to_string())
        .unwrap_or_default();

    vec![
        format!("strategy={}", result.strategy),
        format!("previous_version={}", previous),
        format!("classification={}", classification),
        format!("version={}", result.next),
        format!("major={}", result.next.major),
        format!("minor={}", result.next.minor),
        format!("patch={}", result.next.patch),
        format!("prerelease={}", result.next.is_prerelease()),
    ]
}

/// Print the `key=value` lines to stdout.
pub fn display_outputs(result: &WorkflowResult) {
    for line in render_outputs(result) {
        println!("{}", line);
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", message);
}

/// Status line with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("\x1b[33m→\x1b[0m {}", message)
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Print registered strategy identifiers, marking the configured one.
pub fn display_strategies(ids: &[&str], configured: &str) {
    for id in ids {
        if *id == configured {
            println!("{} (configured)", id);
        } else {
            println!("{}", id);
        }
    }
}
