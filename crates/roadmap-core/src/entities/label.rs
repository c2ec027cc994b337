use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project label. Stories carry any number of these; an epic owns one.
///
/// `name` is the only field used to join stories to epics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Label {
    pub id: u64,
    #[serde(default)]
    pub project_id: u64,
    #[serde(default)]
    pub kind: String,
    pub name: String,
}
