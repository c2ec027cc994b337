//! # roadmap-core
//!
//! Record types shared across the roadmap crates.
//!
//! This crate provides the in-memory record set built from one Tracker
//! snapshot:
//! - Entity structs for labels, epics, stories, iterations and projects
//! - Story type and story state enums, tolerant of values added upstream
//! - Derived per-epic fields (`EpicDates`, `StoryTally`) written by the
//!   correlator in `roadmap-engine`
//! - `ProjectTarget`, the configured list entry for one project

pub mod entities;
pub mod enums;

pub use entities::{
    Epic, EpicDates, Iteration, Label, Project, ProjectTarget, Story, StoryTally,
};
pub use enums::{StoryState, StoryType};
