//! Syntax highlighting and terminal colors for verdict.
//!
//! Highlights configuration (TOML) and machine-readable reports (JSON) for
//! terminal output, and provides styled text for headers, sentiment labels and
//! frequency bars.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML and JSON.
    syntax_set: SyntaxSet,
    /// Color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights JSON content.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights content with the named syntax.
    ///
    /// Unknown syntaxes are rendered as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI color codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (positive, success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (mixed, warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (negative, errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in a color code and a reset.
fn paint(code: &str, text: &str) -> String {
    format!("{code}{text}{}", colors::RESET)
}

/// Formats a header in bold cyan.
pub fn header(text: &str) -> String {
    format!("{}{}", colors::BOLD, paint(colors::CYAN, text))
}

/// Formats a subheader in bold.
pub fn subheader(text: &str) -> String {
    paint(colors::BOLD, text)
}

/// Formats less important text.
pub fn dim(text: &str) -> String {
    paint(colors::DIM, text)
}

/// Formats a success message.
pub fn success(text: &str) -> String {
    paint(colors::GREEN, text)
}

/// Formats a warning.
pub fn warning(text: &str) -> String {
    paint(colors::YELLOW, text)
}

/// Formats an error.
pub fn error(text: &str) -> String {
    paint(colors::RED, text)
}

/// Colors text green for positive and red for negative sentiment.
pub fn sentiment(text: &str, positive: bool) -> String {
    paint(if positive { colors::GREEN } else { colors::RED }, text)
}

/// Colors text by a positive-review percentage: green from 70, yellow from
/// 40, red below.
pub fn rate(text: &str, positive_rate: f64) -> String {
    let code = if positive_rate >= 70.0 {
        colors::GREEN
    } else if positive_rate >= 40.0 {
        colors::YELLOW
    } else {
        colors::RED
    };
    paint(code, text)
}

/// Returns a bar of `width` cells filled to `fraction` (clamped to 0..=1).
///
/// Plain text, so it can sit inside table cells.
pub fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Returns a dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}
