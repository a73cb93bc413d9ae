use serde::{Deserialize, Serialize};

use crate::models::application::JobApplication;

pub const DEFAULT_TARGET_JOB_COUNT: u32 = 50;

/// The single mutable root persisted under the storage slot.
///
/// `applied_job_count` is tracked independently of `applications.len()`:
/// manual increments/decrements move only the counter, while add/delete move
/// both. The two values may drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub target_job_count: u32,
    pub applied_job_count: u32,
    pub applications: Vec<JobApplication>,
}

impl TrackerState {
    pub fn with_target(target_job_count: u32) -> Self {
        TrackerState {
            target_job_count,
            ..Default::default()
        }
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        TrackerState {
            target_job_count: DEFAULT_TARGET_JOB_COUNT,
            applied_job_count: 0,
            applications: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = TrackerState::default();
        assert_eq!(state.target_job_count, 50);
        assert_eq!(state.applied_job_count, 0);
        assert!(state.applications.is_empty());
    }

    #[test]
    fn test_persisted_layout_field_names() {
        let json = serde_json::to_value(TrackerState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "targetJobCount": 50,
                "appliedJobCount": 0,
                "applications": []
            })
        );
    }

    #[test]
    fn test_negative_counter_is_rejected() {
        let raw = r#"{"targetJobCount":50,"appliedJobCount":-1,"applications":[]}"#;
        assert!(serde_json::from_str::<TrackerState>(raw).is_err());
    }
}
