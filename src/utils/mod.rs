pub mod actor;
pub mod owner_plan;
pub mod webutils;
