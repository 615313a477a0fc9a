use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp {
            activity_name,
            email,
        } if activity_name == activity.name => {
            activity.participants.insert(email);
        }
        ActivityEvent::ParticipantUnregistered {
            activity_name,
            email,
        } if activity_name == activity.name => {
            activity.participants.remove(&email);
        }
        _ => {}
    }
    activity
}

#[cfg(test)]
mod activity_evolve_tests {
    use super::*;
    use crate::tests::fixtures::activity::ActivityBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn chess_club() -> Activity {
        ActivityBuilder::new().build()
    }

    #[rstest]
    fn it_should_add_the_signed_up_participant(chess_club: Activity) {
        let next = evolve(
            chess_club,
            ActivityEvent::ParticipantSignedUp {
                activity_name: "Chess Club".into(),
                email: "newstudent@mergington.edu".into(),
            },
        );
        assert_eq!(next.participants.len(), 3);
        assert!(next.participants.contains("newstudent@mergington.edu"));
    }

    #[rstest]
    fn it_should_remove_the_unregistered_participant(chess_club: Activity) {
        let next = evolve(
            chess_club,
            ActivityEvent::ParticipantUnregistered {
                activity_name: "Chess Club".into(),
                email: "michael@mergington.edu".into(),
            },
        );
        assert_eq!(next.participants.to_vec(), vec!["daniel@mergington.edu"]);
    }

    #[rstest]
    fn it_should_ignore_events_of_another_activity(chess_club: Activity) {
        let next = evolve(
            chess_club.clone(),
            ActivityEvent::ParticipantSignedUp {
                activity_name: "Drama Club".into(),
                email: "newstudent@mergington.edu".into(),
            },
        );
        assert_eq!(next, chess_club, "state should be unchanged by fallback arm");
    }
}
