//! Story-to-epic correlation.
//!
//! Stories and epics are joined by label name. A story is applied to every
//! epic whose label matches any of its labels, once per matching label.

use std::collections::HashMap;

use roadmap_core::{Epic, Iteration, Story, StoryType};

/// Walk `iterations` in order and fold each story into the epics it matches.
///
/// For every match:
/// - a feature story sets the epic's start (first match only) and moves its
///   finish to the iteration's finish;
/// - a release story overwrites the epic's release date with its deadline;
/// - the story's state is recorded in the epic's tally.
///
/// Epics without any matching story keep empty dates and a zero tally.
pub fn correlate(epics: &mut [Epic], iterations: &[Iteration]) {
    let index = label_index(epics);
    if index.is_empty() {
        return;
    }

    for iteration in iterations {
        for story in &iteration.stories {
            for name in story.label_names() {
                let Some(matched) = index.get(name) else {
                    continue;
                };
                for &idx in matched {
                    apply_story(&mut epics[idx], iteration, story);
                }
            }
        }
    }
}

/// Label name → positions of the epics carrying it.
///
/// Several epics may share a label; all of them receive the story.
fn label_index(epics: &[Epic]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::with_capacity(epics.len());
    for (idx, epic) in epics.iter().enumerate() {
        index
            .entry(epic.label_name().to_string())
            .or_default()
            .push(idx);
    }
    index
}

fn apply_story(epic: &mut Epic, iteration: &Iteration, story: &Story) {
    match story.story_type {
        StoryType::Feature => {
            epic.dates.start.get_or_insert(iteration.start);
            epic.dates.finish = Some(iteration.finish);
        }
        StoryType::Release => epic.dates.release = story.deadline,
        StoryType::Bug | StoryType::Chore | StoryType::Other => {}
    }
    epic.tally.record(story.current_state);
}
