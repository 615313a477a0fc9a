use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn sign_up(activity_name: &str, email: &str) -> SignUpForActivity {
    SignUpForActivity {
        activity_name: activity_name.to_string(),
        email: email.to_string(),
    }
}

pub fn unregister(activity_name: &str, email: &str) -> UnregisterFromActivity {
    UnregisterFromActivity {
        activity_name: activity_name.to_string(),
        email: email.to_string(),
    }
}
