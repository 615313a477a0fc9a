// The activities the registry starts with on every process start.

use crate::modules::activities::core::activity::Activity;

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().copied().collect(),
    }
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Competitive basketball team for games and tournaments",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu"],
        ),
        activity(
            "Tennis Club",
            "Learn tennis skills and participate in friendly matches",
            "Saturdays, 10:00 AM - 11:30 AM",
            10,
            &["sarah@mergington.edu"],
        ),
        activity(
            "Art Studio",
            "Explore painting, drawing, and digital art techniques",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["maya@mergington.edu", "lucas@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Perform in school plays and theatrical productions",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            20,
            &["alex@mergington.edu"],
        ),
        activity(
            "Robotics Club",
            "Design and build robots for competitions",
            "Mondays and Fridays, 3:30 PM - 5:00 PM",
            14,
            &["noah@mergington.edu", "ava@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop argumentation and public speaking skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            12,
            &["isabella@mergington.edu"],
        ),
    ]
}
