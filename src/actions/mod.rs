//! Caller-facing operations. Each resolves the acting employee once, runs the
//! typed database operation, and folds every failure into an
//! [`ActionResponse`](crate::types::response::ActionResponse).

pub mod ownership;
pub mod team_roles;
