use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::CapacityPolicy;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
    capacity: CapacityPolicy,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>, capacity: CapacityPolicy) -> Self {
        Self { store, capacity }
    }

    /// Enrolls the email and returns the confirmation shown to the student.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let capacity = self.capacity;
        let outcome = self
            .store
            .modify(&command.activity_name, |activity| {
                let events = decide_sign_up(activity, &command, capacity)?;
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
                    "Signed up {} for {}",
                    command.email, command.activity_name
                ))
            }
            Err(reason) => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %reason,
                    "signup rejected"
                );
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
