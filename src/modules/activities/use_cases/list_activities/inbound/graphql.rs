use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl GqlActivity {
    fn from_view(name: String, v: ActivityView) -> Self {
        Self {
            name,
            description: v.description,
            schedule: v.schedule,
            max_participants: v.max_participants,
            participants: v.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let catalog = state.queries.list_activities().await?;
        Ok(catalog
            .into_iter()
            .map(|(name, view)| GqlActivity::from_view(name, view))
            .collect())
    }

    async fn activity(
        &self,
        context: &Context<'_>,
        name: String,
    ) -> GqlResult<Option<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let view = state.queries.find_activity(&name).await?;
        Ok(view.map(|v| GqlActivity::from_view(name, v)))
    }
}
