//! Record builders shared by unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use roadmap_core::{Epic, Iteration, Label, Story, StoryState, StoryType};

pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn label(name: &str) -> Label {
    Label {
        id: 0,
        project_id: 1,
        kind: String::from("label"),
        name: name.to_string(),
    }
}

pub fn epic(id: u64, label_name: &str) -> Epic {
    Epic {
        id,
        project_id: 1,
        name: format!("Epic {id}"),
        label: label(label_name),
        url: None,
        dates: roadmap_core::EpicDates::default(),
        tally: roadmap_core::StoryTally::default(),
    }
}

pub fn story(id: u64, story_type: StoryType, state: StoryState, labels: &[&str]) -> Story {
    Story {
        id,
        name: format!("Story {id}"),
        story_type,
        current_state: state,
        labels: labels.iter().map(|name| label(name)).collect(),
        deadline: None,
    }
}

pub fn feature(id: u64, state: StoryState, labels: &[&str]) -> Story {
    story(id, StoryType::Feature, state, labels)
}

pub fn release(id: u64, labels: &[&str], deadline: DateTime<Utc>) -> Story {
    Story {
        deadline: Some(deadline),
        ..story(id, StoryType::Release, StoryState::Unstarted, labels)
    }
}

/// Two-week iteration starting at `start`, finishing 13 days later.
pub fn sprint(number: u32, start: DateTime<Utc>, stories: Vec<Story>) -> Iteration {
    Iteration {
        number,
        project_id: Some(1),
        start,
        finish: start + Duration::days(13),
        stories,
    }
}

/// `count` back-to-back empty sprints starting at `first`.
pub fn sprints(count: u32, first: DateTime<Utc>) -> Vec<Iteration> {
    (0..count)
        .map(|n| sprint(n + 1, first + Duration::days(14 * i64::from(n)), Vec::new()))
        .collect()
}
