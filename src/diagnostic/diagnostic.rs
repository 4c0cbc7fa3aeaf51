//! The `Diagnostic` message builder and its renderer.

use std::fmt;

use crate::option::Maybe;

const DEFAULT_TITLE: &str = "An error has occurred";
const RESET: &str = "\u{1b}[0m";

struct Label {
    text: &'static str,
    color: &'static str,
}

static ERROR_LABEL: Label = Label {
    text: "Error: ",
    color: "\u{1b}[91;1m",
};
static WARNING_LABEL: Label = Label {
    text: "Warning: ",
    color: "\u{1b}[93;1m",
};
static NOTE_LABEL: Label = Label {
    text: "Note: ",
    color: "\u{1b}[94;1m",
};
static HELP_LABEL: Label = Label {
    text: "Help: ",
    color: "\u{1b}[92;1m",
};

/// Severity of a [`Diagnostic`]. Only affects the title label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Rendered with a bright red `Error:` label.
    #[default]
    Error,
    /// Rendered with a bright yellow `Warning:` label.
    Warning,
}

impl Level {
    fn label(self) -> &'static Label {
        match self {
            Self::Error => &ERROR_LABEL,
            Self::Warning => &WARNING_LABEL,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => formatter.write_str("Error"),
            Self::Warning => formatter.write_str("Warning"),
        }
    }
}

/// A message made of a title, explanatory notes and remedial help.
///
/// Every setter ignores blank or whitespace-only text. When no title was set,
/// `"An error has occurred"` is rendered in its place.
///
/// # Examples
///
/// ```rust
/// use essentials::diagnostic::{Diagnostic, Level};
///
/// let diagnostic = Diagnostic::warning("Cache is stale.\nIt will be rebuilt.")
///     .with_note("   ")
///     .with_help("Run with --offline to skip the rebuild.");
///
/// assert_eq!(diagnostic.level(), Level::Warning);
/// assert!(diagnostic.notes().is_empty());
/// assert_eq!(
///     format!("{diagnostic:#}"),
///     "Warning: Cache is stale.\n         It will be rebuilt.\n\n\
///      Help: Run with --offline to skip the rebuild."
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    level: Level,
    concept: Maybe<String>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl Diagnostic {
    /// Creates an empty diagnostic at [`Level::Error`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty diagnostic at the given level.
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Creates an error diagnostic with the given title.
    pub fn error(concept: impl Into<String>) -> Self {
        Self::with_level(Level::Error).with_concept(concept)
    }

    /// Creates a warning diagnostic with the given title.
    pub fn warning(concept: impl Into<String>) -> Self {
        Self::with_level(Level::Warning).with_concept(concept)
    }

    /// Sets the title, replacing any previous one. Blank titles are ignored.
    #[must_use]
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = non_blank(concept.into()).or(self.concept);
        self
    }

    /// Appends a note. Blank notes are ignored.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.extend(non_blank(note.into()));
        self
    }

    /// Appends a help message. Blank messages are ignored.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.extend(non_blank(help.into()));
        self
    }

    /// The severity level.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The title, if one was set.
    pub fn concept(&self) -> Maybe<&str> {
        self.concept.as_ref().map(String::as_str)
    }

    /// Notes, in insertion order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Help messages, in insertion order.
    pub fn helps(&self) -> &[String] {
        &self.helps
    }
}

fn non_blank(text: String) -> Maybe<String> {
    Maybe::some(text).filter(|text| !text.trim().is_empty())
}

/// Writes `message` with `label` before its first line and matching padding
/// before every other line.
fn write_block(
    formatter: &mut fmt::Formatter<'_>,
    message: &str,
    label: &Label,
    colored: bool,
) -> fmt::Result {
    for (position, line) in message.lines().enumerate() {
        match (position, colored) {
            (0, true) => write!(formatter, "{}{}{RESET}", label.color, label.text)?,
            (0, false) => formatter.write_str(label.text)?,
            _ => write!(formatter, "\n{:width$}", "", width = label.text.len())?,
        }
        formatter.write_str(line)?;
    }
    Ok(())
}

impl fmt::Display for Diagnostic {
    /// Renders the title block, then each note, then each help message,
    /// separated by blank lines. `{:#}` omits the ANSI colors.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colored = !formatter.alternate();
        let title = self.concept.as_ref().map_or(DEFAULT_TITLE, String::as_str);

        let blocks = std::iter::once((title, self.level.label()))
            .chain(self.notes.iter().map(|note| (note.as_str(), &NOTE_LABEL)))
            .chain(self.helps.iter().map(|help| (help.as_str(), &HELP_LABEL)));

        for (position, (message, label)) in blocks.enumerate() {
            if position > 0 {
                formatter.write_str("\n\n")?;
            }
            write_block(formatter, message, label, colored)?;
        }
        Ok(())
    }
}
