use serde::{Deserialize, Serialize};

/// A user-configured rule: when `trigger` occurs anywhere in a log,
/// `label` is reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    /// The message shown when the rule matches (usually the fix).
    pub label: String,
    /// Plain substring looked up in the log; not a pattern.
    pub trigger: String,
}

impl CustomRule {
    pub fn new(label: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            trigger: trigger.into(),
        }
    }
}

/// Insertion-ordered label -> trigger mapping.
///
/// Labels are unique. Re-inserting a label replaces its trigger but keeps
/// its original position, so display order is stable across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomRuleSet {
    rules: Vec<CustomRule>,
}

impl CustomRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a rule. Returns the previous trigger if the label existed.
    pub fn insert(&mut self, label: impl Into<String>, trigger: impl Into<String>) -> Option<String> {
        let label = label.into();
        let trigger = trigger.into();

        if let Some(existing) = self.rules.iter_mut().find(|r| r.label == label) {
            return Some(std::mem::replace(&mut existing.trigger, trigger));
        }

        self.rules.push(CustomRule { label, trigger });
        None
    }

    pub fn remove(&mut self, label: &str) -> Option<CustomRule> {
        let index = self.rules.iter().position(|r| r.label == label)?;
        Some(self.rules.remove(index))
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.trigger.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomRule> {
        self.rules.iter()
    }
}

impl<L, T> FromIterator<(L, T)> for CustomRuleSet
where
    L: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut set = CustomRuleSet::new();
        for (label, trigger) in iter {
            set.insert(label, trigger);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CustomRuleSet {
    type Item = &'a CustomRule;
    type IntoIter = std::slice::Iter<'a, CustomRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
