//! Domain layer - Entities, ports and errors

pub mod crud;
pub mod error;

pub use crud::{CrudDataService, DomainModel, EntityType};
pub use error::{DomainError, ErrorCause};
