//! Business logic services
//!
//! Each service method runs exactly one storage transaction.

pub mod context;
pub mod error;
pub mod user;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
