use crate::modules::activities::core::activity::Activity;
use indexmap::IndexMap;

/// An activity as students see it in the directory, keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.to_vec(),
        }
    }
}

/// Activity name to view, in registry order.
pub type ActivityCatalog = IndexMap<String, ActivityView>;
