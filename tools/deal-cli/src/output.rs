//! Output formatting for the CLI.
//!
//! Human-readable messages are suppressed in JSON mode so stdout carries
//! only the JSON document.

use std::time::Duration;

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

enum Stream {
    Stdout,
    Stderr,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn status(&self, marker: StyledObject<&str>, msg: &str, stream: Stream) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{} {}", marker, msg),
            Stream::Stderr => eprintln!("{} {}", marker, msg),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg, Stream::Stdout);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg, Stream::Stdout);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        self.status(style("⚠").yellow(), msg, Stream::Stderr);
    }

    /// Print an error message. In JSON mode this is an `{"error": ...}`
    /// object on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.status(style("→").dim(), &style(msg).dim().to_string(), Stream::Stderr);
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn line(&self, msg: &str) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print a labelled field, indented under a header or deal title.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        self.status(style("  •").dim(), item, Stream::Stdout);
    }

    /// Print any serializable value as pretty JSON, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Spinner shown while a query is pending. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Category label, highlighted when selected.
pub fn category_badge(label: &str, selected: bool) -> String {
    let text = format!("[{}]", label);
    if selected {
        style(text).white().on_blue().bold().to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// "Popular" marker shown next to a deal title.
pub fn popular_badge() -> String {
    style(" Popular ").white().on_red().bold().to_string()
}
