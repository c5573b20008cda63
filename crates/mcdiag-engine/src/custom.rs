use mcdiag_types::CustomRuleSet;

/// Labels of every custom rule whose trigger occurs in `blob`.
///
/// Plain substring containment, in rule-set order. No match yields an
/// empty vector. An empty trigger matches every blob.
pub fn match_custom_rules(rules: &CustomRuleSet, blob: &str) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| blob.contains(rule.trigger.as_str()))
        .map(|rule| rule.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_label_is_returned_verbatim() {
        let rules: CustomRuleSet = [("Update your drivers", "GPU driver outdated")]
            .into_iter()
            .collect();

        let matches = match_custom_rules(&rules, "[WARN] GPU driver outdated (26.20)");
        assert_eq!(matches, vec!["Update your drivers"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rules: CustomRuleSet = [("Update your drivers", "GPU driver outdated")]
            .into_iter()
            .collect();

        assert!(match_custom_rules(&rules, "all good").is_empty());
        assert!(match_custom_rules(&CustomRuleSet::new(), "anything").is_empty());
    }

    #[test]
    fn test_trigger_is_not_a_pattern() {
        let rules: CustomRuleSet = [("Literal dot", "a.b")].into_iter().collect();

        assert!(match_custom_rules(&rules, "axb").is_empty());
        assert_eq!(match_custom_rules(&rules, "a.b"), vec!["Literal dot"]);
    }

    #[test]
    fn test_order_follows_rule_set() {
        let rules: CustomRuleSet = [
            ("Second in log, first in set", "beta"),
            ("First in log, second in set", "alpha"),
            ("Never", "gamma"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            match_custom_rules(&rules, "alpha beta"),
            vec!["Second in log, first in set", "First in log, second in set"]
        );
    }

    #[test]
    fn test_empty_trigger_always_matches() {
        let rules: CustomRuleSet = [("Always", "")].into_iter().collect();
        assert_eq!(match_custom_rules(&rules, ""), vec!["Always"]);
    }
}
