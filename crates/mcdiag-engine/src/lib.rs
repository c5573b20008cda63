// Engine module - Crash-log interpretation
// Pure functions over decoded log text; fetching and rendering live in the CLI layer

pub mod custom;
pub mod evaluator;
pub mod paste;
pub mod rules;

pub use custom::match_custom_rules;
pub use evaluator::{evaluate, evaluate_messages};
pub use paste::{PasteLink, find_paste_link};
pub use rules::{BUILTIN_RULES, BuiltinRule, RuleId, builtin_rules};
