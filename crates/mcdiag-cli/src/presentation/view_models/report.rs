use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ReportViewModel {
    /// File path, or `stdin`.
    pub source: String,
    pub diagnostics: Vec<DiagnosticViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticViewModel {
    /// Rule id for built-ins, `custom` for user rules.
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub heading: String,
    pub body: String,
    pub message: String,
}

impl fmt::Display for ReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl fmt::Display for DiagnosticViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({})", self.heading, self.origin)?;
        for line in self.body.lines() {
            writeln!(f, "  {}", line)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_lines_are_indented() {
        let vm = DiagnosticViewModel {
            origin: "program-files".to_string(),
            severity: Some("critical".to_string()),
            heading: "‼".to_string(),
            body: "first line\nsecond line".to_string(),
            message: "‼ first line\nsecond line".to_string(),
        };

        assert_eq!(
            vm.to_string(),
            "‼ (program-files)\n  first line\n  second line\n\n"
        );
    }

    #[test]
    fn test_single_word_custom_label_has_no_body() {
        let vm = DiagnosticViewModel {
            origin: "custom".to_string(),
            severity: None,
            heading: "Reinstall".to_string(),
            body: String::new(),
            message: "Reinstall".to_string(),
        };

        assert_eq!(vm.to_string(), "Reinstall (custom)\n\n");
    }
}
