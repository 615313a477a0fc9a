// Builder for activities used across unit tests. Defaults to the seeded Chess Club.

use crate::modules::activities::core::activity::Activity;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                name: "Chess Club".to_string(),
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: ["michael@mergington.edu", "daniel@mergington.edu"]
                    .into_iter()
                    .collect(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: Vec<String>) -> Self {
        self.inner.participants = v.into_iter().collect();
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

#[cfg(test)]
mod activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ActivityBuilder::new()
            .name("Choir")
            .description("Sing together")
            .schedule("Mondays")
            .max_participants(3)
            .participants(vec!["a@mergington.edu".into()])
            .build();

        assert_eq!(custom.name, "Choir");
        assert_eq!(custom.description, "Sing together");
        assert_eq!(custom.schedule, "Mondays");
        assert_eq!(custom.max_participants, 3);
        assert_eq!(custom.participants.to_vec(), vec!["a@mergington.edu"]);
    }
}
