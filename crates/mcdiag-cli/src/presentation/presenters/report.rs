use mcdiag_types::{Diagnostic, DiagnosticReport, DiagnosticSource};

use crate::presentation::view_models::{
    CommandResultViewModel, DiagnosticViewModel, Guidance, ReportViewModel, StatusBadge,
};

pub fn present_report(
    source: &str,
    report: &DiagnosticReport,
) -> CommandResultViewModel<ReportViewModel> {
    let content = ReportViewModel {
        source: source.to_string(),
        diagnostics: report.iter().map(present_diagnostic).collect(),
    };

    if report.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("No known issues found"));
    }

    let count = report.len();
    let noun = if count == 1 { "issue" } else { "issues" };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::warning(format!(
            "{} known {} found in {}",
            count, noun, source
        )))
        .with_suggestion(Guidance::new(
            "This might not solve your problem, but it could be worth a try",
        ))
}

fn present_diagnostic(diagnostic: &Diagnostic) -> DiagnosticViewModel {
    let origin = match &diagnostic.source {
        DiagnosticSource::Builtin { rule } => rule.clone(),
        DiagnosticSource::Custom => "custom".to_string(),
    };

    DiagnosticViewModel {
        origin,
        severity: diagnostic.severity.map(|s| s.to_string()),
        heading: diagnostic.heading().to_string(),
        body: diagnostic.body(),
        message: diagnostic.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcdiag_types::Severity;

    #[test]
    fn test_empty_report_gets_success_badge() {
        let result = present_report("stdin", &DiagnosticReport::new());

        assert_eq!(result.badge.unwrap().label, "No known issues found");
        assert!(result.suggestions.is_empty());
        assert!(result.content.diagnostics.is_empty());
    }

    #[test]
    fn test_report_maps_origin_and_body() {
        let mut report = DiagnosticReport::new();
        report.push(Diagnostic::builtin(
            "out-of-memory",
            Severity::Critical,
            "‼ You've run out of memory.".to_string(),
        ));
        report.push(Diagnostic::custom("Update your drivers"));

        let result = present_report("latest.log", &report);
        let diagnostics = &result.content.diagnostics;

        assert_eq!(result.badge.unwrap().label, "2 known issues found in latest.log");
        assert_eq!(diagnostics[0].origin, "out-of-memory");
        assert_eq!(diagnostics[0].severity.as_deref(), Some("critical"));
        assert_eq!(diagnostics[0].body, "You've run out of memory.");
        assert_eq!(diagnostics[1].origin, "custom");
        assert_eq!(diagnostics[1].heading, "Update");
        assert_eq!(diagnostics[1].body, "your drivers");
    }
}
