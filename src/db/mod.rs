pub mod database_service;
pub mod employee;
pub mod owner_scope;
pub mod ownership;
pub mod team_roles;
