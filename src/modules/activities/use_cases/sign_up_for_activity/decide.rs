// Pure decision function for a signup.
//
// - Rejects an email already enrolled, and a full activity when capacity is enforced.
// - Emits ParticipantSignedUp otherwise.
// - Never performs input or output.

use crate::modules::activities::core::activity::{Activity, CapacityPolicy};
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(
    activity: &Activity,
    command: &SignUpForActivity,
    capacity: CapacityPolicy,
) -> Result<Vec<ActivityEvent>, DecideError> {
    if activity.participants.contains(&command.email) {
        return Err(DecideError::AlreadySignedUp);
    }
    if capacity == CapacityPolicy::Enforced && activity.is_full() {
        return Err(DecideError::ActivityFull);
    }
    Ok(vec![ActivityEvent::ParticipantSignedUp {
        activity_name: activity.name.clone(),
        email: command.email.clone(),
    }])
}
