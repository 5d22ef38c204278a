//! Data access port definition

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// Data access port for CRUD operations on one entity type
///
/// Implementations own persistence and uniqueness rules. `get_by_id` fails
/// with [`DomainError::NotFound`] for unknown identifiers; `upsert` fails with
/// [`DomainError::Duplication`] when a non-identifier uniqueness rule is violated.
#[cfg_attr(test, automock)]
pub trait CrudDataService<E, ID>: Send + Sync
where
    E: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Removes all entities
    fn clear(&self) -> Result<(), DomainError>;

    /// Retrieves all entities
    fn get_all(&self) -> Result<Vec<E>, DomainError>;

    /// Retrieves an entity by its identifier
    fn get_by_id(&self, id: &ID) -> Result<E, DomainError>;

    /// Creates or updates an entity, returning the stored version
    fn upsert(&self, entity: E) -> Result<E, DomainError>;

    /// Deletes an entity by its identifier
    fn delete(&self, id: &ID) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crud::EntityType;

    const ITEM: EntityType = EntityType::new("Item");

    #[test]
    fn test_mock_data_service_get_by_id_not_found() {
        let mut mock = MockCrudDataService::<String, u32>::new();
        mock.expect_get_by_id()
            .withf(|id| *id == 3)
            .returning(|id| Err(DomainError::not_found(ITEM, id)));

        let result = mock.get_by_id(&3);
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_mock_data_service_get_all() {
        let mut mock = MockCrudDataService::<String, u32>::new();
        mock.expect_get_all()
            .returning(|| Ok(vec!["a".to_string(), "b".to_string()]));

        assert_eq!(mock.get_all().unwrap(), vec!["a", "b"]);
    }
}
