use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(
    activity: &Activity,
    command: &UnregisterFromActivity,
) -> Result<Vec<ActivityEvent>, DecideError> {
    if !activity.participants.contains(&command.email) {
        return Err(DecideError::NotSignedUp);
    }
    Ok(vec![ActivityEvent::ParticipantUnregistered {
        activity_name: activity.name.clone(),
        email: command.email.clone(),
    }])
}
