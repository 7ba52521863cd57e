pub mod audit_type;
pub mod bundle;
pub mod compliance;
pub mod form;
pub mod level;
pub mod record;
