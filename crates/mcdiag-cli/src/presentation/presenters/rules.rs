use mcdiag_engine::BuiltinRule;

use crate::presentation::view_models::{
    CommandResultViewModel, RuleEntryViewModel, RuleListViewModel, StatusBadge,
};

pub fn present_rules(rules: &[BuiltinRule]) -> CommandResultViewModel<RuleListViewModel> {
    let entries = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleEntryViewModel {
            position: i + 1,
            id: rule.id.as_str().to_string(),
            severity: rule.severity.to_string(),
            glyph: rule.severity.glyph().to_string(),
            description: rule.description.to_string(),
        })
        .collect::<Vec<_>>();

    let label = format!("{} built-in rules (evaluated in this order)", entries.len());
    CommandResultViewModel::new(RuleListViewModel { rules: entries })
        .with_badge(StatusBadge::info(label))
}
