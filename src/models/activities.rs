use serde::{Deserialize, Serialize};

// One entry of the activity directory, keyed by activity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    /// Free text, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,
    /// Advisory only; enroll never checks it.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut record = Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        };
        for email in participants {
            let email = email.into();
            if !record.has_participant(&email) {
                record.participants.push(email);
            }
        }
        record
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn participants_count(&self) -> usize {
        self.participants.len()
    }
}
