use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::database::Directory;
use crate::error::Result;

/// Shared handle to the activity directory.
///
/// Reads take a snapshot under the read lock. Enroll and withdraw hold the
/// write lock for the whole check-then-mutate step, so two requests touching
/// the same roster are applied one after the other.
#[derive(Clone, Debug)]
pub struct ActivitiesService {
    directory: Arc<RwLock<Directory>>,
}

impl ActivitiesService {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    pub async fn list_activities(&self) -> Directory {
        self.directory.read().await.clone()
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let message = self.directory.write().await.enroll(activity, email)?;
        info!(activity = %activity, email = %email, "activity_signup");
        Ok(message)
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let message = self.directory.write().await.withdraw(activity, email)?;
        info!(activity = %activity, email = %email, "activity_unregister");
        Ok(message)
    }
}
