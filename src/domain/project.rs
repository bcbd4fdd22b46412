use chrono::{DateTime, Utc};

use super::{ProjectId, ProjectStatus, UserId};

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub progress: u8,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, description: String, created_by: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            name,
            description,
            status: ProjectStatus::Draft,
            progress: 0,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
