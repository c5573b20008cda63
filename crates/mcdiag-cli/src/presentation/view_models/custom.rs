use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct CustomRuleListViewModel {
    pub scope: String,
    pub rules: Vec<CustomRuleEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CustomRuleEntryViewModel {
    pub label: String,
    pub trigger: String,
}

impl fmt::Display for CustomRuleListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let separator = "-".repeat(20);
        for rule in &self.rules {
            writeln!(f, "{}", separator)?;
            writeln!(f, "Caused by: {}", rule.trigger)?;
            writeln!(f, "Solved by: {}", rule.label)?;
        }
        if !self.rules.is_empty() {
            writeln!(f, "{}", separator)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomRuleAction {
    Added,
    Updated,
    Removed,
}

impl fmt::Display for CustomRuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomRuleAction::Added => write!(f, "added"),
            CustomRuleAction::Updated => write!(f, "updated"),
            CustomRuleAction::Removed => write!(f, "removed"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomRuleChangeViewModel {
    pub scope: String,
    pub action: CustomRuleAction,
    pub label: String,
    pub trigger: String,
}

impl fmt::Display for CustomRuleChangeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Scope:   {}", self.scope)?;
        writeln!(f, "Label:   {}", self.label)?;
        writeln!(f, "Trigger: {}", self.trigger)
    }
}
