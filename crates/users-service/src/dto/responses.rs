//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use users_core::UserId;

// ============================================================================
// User Responses
// ============================================================================

/// User as exposed over the API. The soft-delete flag is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Result of flipping the active flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleActiveResponse {
    pub is_active: bool,
}

/// Plain confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Liveness message for `GET /`
    pub fn api_running() -> Self {
        Self::new("API running successfully")
    }

    /// Confirmation for a soft delete
    pub fn user_soft_deleted() -> Self {
        Self::new("User soft deleted")
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
