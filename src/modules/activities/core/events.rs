#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ParticipantSignedUp { activity_name: String, email: String },
    ParticipantUnregistered { activity_name: String, email: String },
}

#[cfg(test)]
mod activity_event_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_tag_the_serialized_event_with_its_type() {
        let event = ActivityEvent::ParticipantSignedUp {
            activity_name: "Chess Club".into(),
            email: "newstudent@mergington.edu".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ParticipantSignedUp",
                "activity_name": "Chess Club",
                "email": "newstudent@mergington.edu"
            })
        );
    }
}
