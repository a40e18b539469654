use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{DirectoryError, Result};
use crate::models::ActivityRecord;

/// In-memory activity directory.
///
/// Entries keep their insertion order, which is also the order they are
/// listed and serialized in. The set of names is fixed once built; only the
/// participant lists change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<(String, ActivityRecord)>,
}

impl Directory {
    /// Builds a directory from `(name, record)` pairs. A repeated name
    /// replaces the earlier record but keeps its position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ActivityRecord)>,
        S: Into<String>,
    {
        let mut directory = Self::default();
        for (name, record) in entries {
            let name = name.into();
            match directory.position(&name) {
                Some(idx) => directory.entries[idx].1 = record,
                None => directory.entries.push((name, record)),
            }
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Appends `email` to the roster of `activity`.
    ///
    /// Capacity is not checked: `max_participants` is informational.
    pub fn enroll(&mut self, activity: &str, email: &str) -> Result<String> {
        let record = self.record_mut(activity)?;
        if record.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        record.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity))
    }

    /// Removes `email` from the roster of `activity`.
    pub fn withdraw(&mut self, activity: &str, email: &str) -> Result<String> {
        let record = self.record_mut(activity)?;
        let Some(idx) = record.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };
        record.participants.remove(idx);
        Ok(format!("Removed {} from {}", email, activity))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    fn record_mut(&mut self, activity: &str) -> Result<&mut ActivityRecord> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == activity)
            .map(|(_, record)| record)
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: activity.to_string(),
            })
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
