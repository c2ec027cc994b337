//! Entity structs for the Tracker record set.
//!
//! Field names follow the Tracker v5 JSON payloads so the HTTP layer can
//! decode straight into these types. All structs derive `Serialize`,
//! `Deserialize` and `JsonSchema`.

mod epic;
mod iteration;
mod label;
mod project;
mod story;

pub use epic::{Epic, EpicDates, StoryTally};
pub use iteration::Iteration;
pub use label::Label;
pub use project::{Project, ProjectTarget};
pub use story::Story;
