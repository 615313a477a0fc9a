// In memory activity registry.
//
// Purpose
// - Hold every activity for the lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Keep activities in a map keyed by name, in the order they were seeded.
// - Serialize writers behind one lock so a mutation is atomic for its callers.

use crate::modules::activities::adapters::outbound::activity_store::{ActivityStore, StoreError};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::projection::{
    ActivityCatalog, ActivityView,
};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use indexmap::IndexMap;
use tokio::sync::RwLock;

pub struct InMemoryActivityStore {
    activities: RwLock<IndexMap<String, Activity>>,
    initial: Vec<Activity>,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(Self::index(&activities)),
            initial: activities,
            is_offline: false,
        }
    }

    /// A registry holding the school's fixed list of activities.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn index(activities: &[Activity]) -> IndexMap<String, Activity> {
        activities
            .iter()
            .map(|activity| (activity.name.clone(), activity.clone()))
            .collect()
    }
}

impl Default for InMemoryActivityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn modify<F, T>(&self, activity_name: &str, change: F) -> Result<Option<T>, StoreError>
    where
        F: FnOnce(&mut Activity) -> T + Send,
        T: Send,
    {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }

        let mut guard = self.activities.write().await;
        Ok(guard.get_mut(activity_name).map(change))
    }

    async fn reset(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }

        *self.activities.write().await = Self::index(&self.initial);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        let guard = self.activities.read().await;
        Ok(guard
            .iter()
            .map(|(name, activity)| (name.clone(), ActivityView::from(activity)))
            .collect())
    }

    async fn find_activity(&self, activity_name: &str) -> anyhow::Result<Option<ActivityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        Ok(self
            .activities
            .read()
            .await
            .get(activity_name)
            .map(ActivityView::from))
    }
}
