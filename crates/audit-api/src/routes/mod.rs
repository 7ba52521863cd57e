pub mod audit_types;
pub mod health;
pub mod levels;
pub mod scoring;
