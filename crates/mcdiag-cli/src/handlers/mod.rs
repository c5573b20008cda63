pub mod analyze;
pub mod custom;
pub mod link;
pub mod rules;
