use mcdiag_types::CustomRuleSet;

use crate::presentation::view_models::{
    CommandResultViewModel, CustomRuleAction, CustomRuleChangeViewModel,
    CustomRuleEntryViewModel, CustomRuleListViewModel, Guidance, StatusBadge,
};

pub fn present_custom_rules(
    scope: &str,
    rules: Option<&CustomRuleSet>,
) -> CommandResultViewModel<CustomRuleListViewModel> {
    let entries: Vec<CustomRuleEntryViewModel> = rules
        .map(|set| {
            set.iter()
                .map(|rule| CustomRuleEntryViewModel {
                    label: rule.label.clone(),
                    trigger: rule.trigger.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    let content = CustomRuleListViewModel {
        scope: scope.to_string(),
        rules: entries,
    };

    if content.rules.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info(format!(
                "No custom rules in scope '{}'",
                scope
            )))
            .with_suggestion(
                Guidance::new("Add one").with_command("mcdiag custom add <LABEL> <TRIGGER>"),
            );
    }

    let label = format!("{} custom rules in scope '{}'", content.rules.len(), scope);
    CommandResultViewModel::new(content).with_badge(StatusBadge::info(label))
}

pub fn present_custom_change(
    scope: &str,
    action: CustomRuleAction,
    label: &str,
    trigger: &str,
) -> CommandResultViewModel<CustomRuleChangeViewModel> {
    let content = CustomRuleChangeViewModel {
        scope: scope.to_string(),
        action,
        label: label.to_string(),
        trigger: trigger.to_string(),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Custom rule {}", action)))
}
