pub mod custom;
pub mod report;
pub mod rules;

pub use custom::{present_custom_change, present_custom_rules};
pub use report::present_report;
pub use rules::present_rules;
