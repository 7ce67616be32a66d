use serde::{Deserialize, Serialize};

/// A calendar entry from the events document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}
