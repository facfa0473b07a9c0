//! Syntax highlighting and terminal styling for sift.
//!
//! The CLI uses this crate to color configuration (TOML), role definitions (YAML) and reports
//! (JSON), and to style ranking output: headers, fit scores and strength/risk bullets.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Indentation used for nested output blocks.
const INDENT: &str = "   ";

/// Languages sift prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Reports and candidate records.
    Json,
    /// Configuration files.
    Toml,
    /// Role definitions.
    Yaml,
}

impl Syntax {
    /// File extension used to look up the syntax definition.
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }
}

/// A syntax highlighter producing 24-bit terminal escapes.
pub struct Highlighter {
    /// Language definitions, including the TOML grammar from two-face.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
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

    /// Highlights TOML.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, Syntax::Toml)
    }

    /// Highlights JSON.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, Syntax::Json)
    }

    /// Highlights YAML.
    pub fn highlight_yaml(&self, content: &str) -> String {
        self.highlight(content, Syntax::Yaml)
    }

    /// Highlights `content` as `syntax`, ending with a color reset.
    ///
    /// Lines the highlighter cannot parse are emitted unstyled.
    pub fn highlight(&self, content: &str, syntax: Syntax) -> String {
        let syntax = self.find_syntax(syntax);
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

    /// Looks up a syntax definition, falling back to plain text.
    fn find_syntax(&self, syntax: Syntax) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension(syntax.extension())
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text (for errors).
    pub const RED: &str = "\x1b[31m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in `codes` followed by a reset.
fn paint(codes: &str, text: &str) -> String {
    format!("{codes}{text}{}", colors::RESET)
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    paint(&format!("{}{}", colors::BOLD, colors::CYAN), text)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    paint(colors::BOLD, text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    paint(colors::DIM, text)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    paint(colors::GREEN, text)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    paint(colors::YELLOW, text)
}

/// Formats text as an error (red).
pub fn error(text: &str) -> String {
    paint(colors::RED, text)
}

/// Formats a fit score: green at or above `threshold`, yellow above half of it, red below.
pub fn fit_score(score: f64, threshold: f64) -> String {
    let text = format!("{score:.4}");
    if score >= threshold {
        success(&text)
    } else if score >= threshold / 2.0 {
        warning(&text)
    } else {
        error(&text)
    }
}

/// Formats a strength as a green `+` bullet.
pub fn strength(text: &str) -> String {
    format!("{} {text}", success("+"))
}

/// Formats a risk as a yellow `-` bullet.
pub fn risk(text: &str) -> String {
    format!("{} {text}", warning("-"))
}

/// Returns a dimmed horizontal rule for visual separation.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Indents every line of `content` for display under a subheader.
pub fn indent_content(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
