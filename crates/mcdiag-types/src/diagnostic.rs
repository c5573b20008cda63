use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a diagnostic should be acted upon.
///
/// Each built-in message starts with a glyph that encodes its severity,
/// so the message text stays self-describing when rendered on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The game cannot run correctly until this is fixed.
    Critical,
    /// Likely cause of instability or crashes.
    Warning,
    /// Suboptimal setup worth mentioning.
    Notice,
}

impl Severity {
    /// Glyph prefixed to messages of this severity.
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Critical => "‼",
            Severity::Warning => "❗",
            Severity::Notice => "⚠",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Notice => write!(f, "notice"),
        }
    }
}

/// Where a diagnostic came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticSource {
    /// A rule from the built-in catalog, identified by its stable id.
    Builtin { rule: String },
    /// A user-configured label/trigger pair.
    Custom,
}

/// A single message produced by one matching rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub source: DiagnosticSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub message: String,
}

impl Diagnostic {
    pub fn builtin(rule: impl Into<String>, severity: Severity, message: String) -> Self {
        Self {
            source: DiagnosticSource::Builtin { rule: rule.into() },
            severity: Some(severity),
            message,
        }
    }

    /// Custom rules carry no severity; the label is the message.
    pub fn custom(label: impl Into<String>) -> Self {
        Self {
            source: DiagnosticSource::Custom,
            severity: None,
            message: label.into(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.source, DiagnosticSource::Custom)
    }

    /// First whitespace-delimited token of the message.
    ///
    /// For built-ins this is the severity glyph; for custom labels it is
    /// the first word. Used as a section title when rendering.
    pub fn heading(&self) -> &str {
        self.message.split_whitespace().next().unwrap_or("")
    }

    /// The message with every occurrence of [`heading`](Self::heading) removed.
    ///
    /// Leading whitespace left behind by the removed heading is trimmed.
    pub fn body(&self) -> String {
        let heading = self.heading();
        if heading.is_empty() {
            return self.message.clone();
        }
        self.message.replace(heading, "").trim_start().to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered result of one evaluation: built-in matches in catalog order,
/// followed by custom matches in rule-set order. No deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// An empty report means no known issue was found; callers show nothing.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.diagnostics.into_iter().map(|d| d.message).collect()
    }

    pub fn custom_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_custom()).count()
    }
}

impl Extend<Diagnostic> for DiagnosticReport {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl IntoIterator for DiagnosticReport {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
