//! # Presentation Layer
//!
//! Output logic for the CLI, kept apart from the rule engine.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data containers with a plain-text `Display`.
//!   No calculation logic; the JSON form is the machine-readable contract.
//! * `presenters/`: pure functions from engine/types values to view models.
//! * `renderers/`: paints a `CommandResultViewModel` as text or JSON.

pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
