//! User interface module - output formatting for humans and CI.

pub mod formatter;

pub use formatter::{
    display_error, display_outputs, display_status, display_strategies, display_success,
    format_status, render_outputs,
};
