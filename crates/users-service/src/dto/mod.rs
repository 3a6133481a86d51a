//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between DTOs and domain types

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use responses::{
    HealthChecks, MessageResponse, ReadinessResponse, ToggleActiveResponse, UserResponse,
};
