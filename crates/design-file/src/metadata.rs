use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a design is in its processing lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignStatus {
    /// Parameters accepted, drawing not produced yet.
    Processing,
    /// A drawing was generated from the stored parameters.
    Generated,
    /// Generation failed; `message` is the error shown to the user.
    Failed { message: String },
}

/// Design record stored alongside the parameter map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub id: Uuid,
    /// Human-readable design name.
    pub name: String,
    /// Name of the parameter sheet the design was loaded from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub status: DesignStatus,
}

impl DesignMetadata {
    /// New record with a fresh id, current timestamp and `Processing` status.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            source_filename: None,
            created: now,
            modified: now,
            status: DesignStatus::Processing,
        }
    }

    pub fn with_source(mut self, filename: impl Into<String>) -> Self {
        self.source_filename = Some(filename.into());
        self
    }

    pub fn mark_generated(&mut self) {
        self.set_status(DesignStatus::Generated);
    }

    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.set_status(DesignStatus::Failed {
            message: message.into(),
        });
    }

    fn set_status(&mut self, status: DesignStatus) {
        self.status = status;
        self.modified = Utc::now();
    }

    pub fn is_generated(&self) -> bool {
        self.status == DesignStatus::Generated
    }
}
