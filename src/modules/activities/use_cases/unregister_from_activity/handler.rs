use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<String, ApplicationError> {
        let outcome = self
            .store
            .modify(&command.activity_name, |activity| {
                let events = decide_unregister(activity, &command)?;
                *activity = events.iter().cloned().fold(activity.clone(), evolve);
                Ok::<_, DecideError>(events)
            })
            .await?;

        match outcome.unwrap_or(Err(DecideError::ActivityNotFound)) {
            Ok(events) => {
                for event in &events {
                    tracing::info!(?event, "activity event applied");
                }
                Ok(format!(
                    "Unregistered {} from {}",
                    command.email, command.activity_name
                ))
            }
            Err(reason) => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %reason,
                    "unregister rejected"
                );
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
