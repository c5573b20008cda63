pub mod common;
pub mod custom;
pub mod link;
pub mod report;
pub mod result;
pub mod rules;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use custom::{
    CustomRuleAction, CustomRuleChangeViewModel, CustomRuleEntryViewModel,
    CustomRuleListViewModel,
};
pub use link::PasteLinkViewModel;
pub use report::{DiagnosticViewModel, ReportViewModel};
pub use result::CommandResultViewModel;
pub use rules::{RuleEntryViewModel, RuleListViewModel};
