use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{seed_activities, Activity};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
}

/// In-memory activity registry. Handlers receive it through axum `State`;
/// every operation takes the lock once, so a request sees and leaves a
/// consistent mapping.
pub struct ActivityStore {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityStore {
    /// Registry pre-populated with the fixed seed list.
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    pub fn with_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Snapshot of the full mapping. No pagination, no filtering.
    pub async fn list(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Enroll `email` in the named activity. Duplicate signups are rejected;
    /// capacity is advertised but not enforced.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String, StoreError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(StoreError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Drop `email` from the named activity's roster.
    pub async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, StoreError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(StoreError::ActivityNotFound)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(StoreError::ParticipantNotFound);
        };

        activity.participants.remove(position);
        Ok(format!("Removed {} from {}", email, activity_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signup_appends_participant_once() {
        let store = ActivityStore::seeded();

        let message = store
            .signup("Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Signed up newstudent@mergington.edu for Chess Club");

        let activities = store.list().await;
        let roster = &activities["Chess Club"].participants;
        assert_eq!(
            roster
                .iter()
                .filter(|p| *p == "newstudent@mergington.edu")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let store = ActivityStore::seeded();

        store
            .signup("Chess Club", "duplicate@mergington.edu")
            .await
            .unwrap();
        let err = store
            .signup("Chess Club", "duplicate@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadySignedUp);
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let store = ActivityStore::seeded();

        let err = store
            .signup("Knitting Circle", "test@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ActivityNotFound);
    }

    #[tokio::test]
    async fn remove_participant_clears_enrollment() {
        let store = ActivityStore::seeded();

        store
            .signup("Art Club", "removeme@mergington.edu")
            .await
            .unwrap();
        let message = store
            .remove_participant("Art Club", "removeme@mergington.edu")
            .await
            .unwrap();
        assert_eq!(message, "Removed removeme@mergington.edu from Art Club");

        let activities = store.list().await;
        assert!(!activities["Art Club"]
            .participants
            .iter()
            .any(|p| p == "removeme@mergington.edu"));
    }

    #[tokio::test]
    async fn remove_unknown_participant_is_not_found() {
        let store = ActivityStore::seeded();

        let err = store
            .remove_participant("Chess Club", "stranger@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ParticipantNotFound);
    }
}
