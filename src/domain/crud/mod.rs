//! CRUD domain - Generic entity and data access abstractions

mod entity;
mod repository;

pub use entity::{DomainModel, EntityType};
pub use repository::CrudDataService;

#[cfg(test)]
pub use repository::MockCrudDataService;
