//! # users-service
//!
//! Application layer containing the user service, its DTOs, and service errors.

pub mod dto;
pub mod services;

pub use dto::{
    CreateUserRequest, MessageResponse, ReadinessResponse, ToggleActiveResponse,
    UpdateUserRequest, UserResponse,
};
pub use services::{ServiceContext, ServiceError, ServiceResult, UserService};
