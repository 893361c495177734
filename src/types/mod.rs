pub mod error;
pub mod ownership;
pub mod response;
pub mod team;
