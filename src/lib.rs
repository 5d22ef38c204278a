//! Campus Coffee domain services
//!
//! A generic CRUD service over any entity type, with persistence delegated to
//! an injected data access port:
//! - Create-or-update decided by identifier presence
//! - Collaborator failures (not found, duplication) returned unchanged
//! - Structured logging and layered configuration

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{CrudDataService, DomainError, DomainModel, EntityType};
pub use infrastructure::services::{CrudService, CrudServiceTrait};
