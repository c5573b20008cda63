use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct RuleListViewModel {
    pub rules: Vec<RuleEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct RuleEntryViewModel {
    pub position: usize,
    pub id: String,
    pub severity: String,
    pub glyph: String,
    pub description: String,
}

impl fmt::Display for RuleListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id_width = self.rules.iter().map(|r| r.id.len()).max().unwrap_or(0);

        for rule in &self.rules {
            writeln!(
                f,
                "{:>2}. {} {:<width$}  {:<8}  {}",
                rule.position,
                rule.glyph,
                rule.id,
                rule.severity,
                rule.description,
                width = id_width
            )?;
        }
        Ok(())
    }
}
