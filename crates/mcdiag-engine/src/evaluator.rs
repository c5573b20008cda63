use crate::custom::match_custom_rules;
use crate::rules::BUILTIN_RULES;
use mcdiag_types::{CustomRuleSet, Diagnostic, DiagnosticReport};

/// Run the whole catalog, then the custom rules, against one log.
///
/// The blob must already be decoded text. Built-in matches come first in
/// catalog order, custom matches follow in rule-set order. An empty report
/// means nothing known was found.
pub fn evaluate(blob: &str, custom_rules: Option<&CustomRuleSet>) -> DiagnosticReport {
    let mut report = DiagnosticReport::new();

    for rule in BUILTIN_RULES.iter() {
        if let Some(diagnostic) = rule.check(blob) {
            tracing::debug!(rule = %rule.id, severity = %rule.severity, "built-in rule matched");
            report.push(diagnostic);
        }
    }

    if let Some(rules) = custom_rules.filter(|rules| !rules.is_empty()) {
        let labels = match_custom_rules(rules, blob);
        tracing::debug!(
            checked = rules.len(),
            matched = labels.len(),
            "custom rules evaluated"
        );
        report.extend(labels.into_iter().map(Diagnostic::custom));
    }

    tracing::trace!(bytes = blob.len(), found = report.len(), "evaluation finished");
    report
}

/// Same as [`evaluate`], reduced to the ordered message strings.
pub fn evaluate_messages(blob: &str, custom_rules: Option<&CustomRuleSet>) -> Vec<String> {
    evaluate(blob, custom_rules).into_messages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blob_yields_empty_report() {
        assert!(evaluate("", None).is_empty());
        assert!(evaluate("", Some(&CustomRuleSet::new())).is_empty());
    }

    #[test]
    fn test_custom_results_follow_builtins() {
        let rules: CustomRuleSet = [("Update your drivers", "GPU driver outdated")]
            .into_iter()
            .collect();
        let blob = "GPU driver outdated\njava.lang.OutOfMemoryError: Java heap space";

        let report = evaluate(blob, Some(&rules));

        assert_eq!(report.len(), 2);
        assert!(report.diagnostics[0].message.starts_with("‼ You've run out of memory"));
        assert_eq!(report.diagnostics[1].message, "Update your drivers");
        assert!(report.diagnostics[1].is_custom());
    }

    #[test]
    fn test_custom_only() {
        let rules: CustomRuleSet = [("Update your drivers", "GPU driver outdated")]
            .into_iter()
            .collect();

        assert_eq!(
            evaluate_messages("GPU driver outdated", Some(&rules)),
            vec!["Update your drivers"]
        );
        assert!(evaluate_messages("fine", Some(&rules)).is_empty());
    }

    #[test]
    fn test_no_deduplication() {
        let rules: CustomRuleSet = [
            ("Out of memory again", "java.lang.OutOfMemoryError"),
            ("Allocate more RAM", "OutOfMemoryError"),
        ]
        .into_iter()
        .collect();

        let messages = evaluate_messages("java.lang.OutOfMemoryError", Some(&rules));
        assert_eq!(messages.len(), 3);
    }
}
