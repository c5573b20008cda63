pub mod custom;
pub mod diagnostic;

pub use custom::{CustomRule, CustomRuleSet};
pub use diagnostic::{Diagnostic, DiagnosticReport, DiagnosticSource, Severity};
