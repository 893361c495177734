pub mod members;
pub mod owners;
