//! Generic CRUD service delegating persistence to a data access port

use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::crud::{CrudDataService, DomainModel, EntityType};
use crate::domain::error::DomainError;

/// Trait for CRUD services (for dynamic dispatch in higher layers)
pub trait CrudServiceTrait<E, ID>: Send + Sync {
    /// Remove all entities
    fn clear(&self) -> Result<(), DomainError>;

    /// List all entities in the order the backend returns them
    fn get_all(&self) -> Result<Vec<E>, DomainError>;

    /// Get an entity by ID
    fn get_by_id(&self, id: &ID) -> Result<E, DomainError>;

    /// Create the entity if it has no ID, otherwise update the existing one
    fn upsert(&self, entity: E) -> Result<E, DomainError>;

    /// Delete an entity by ID
    fn delete(&self, id: &ID) -> Result<(), DomainError>;
}

/// CRUD service bound to one entity type and its data access port
pub struct CrudService<D, E, ID> {
    data_service: Arc<D>,
    entity_type: EntityType,
    _marker: PhantomData<fn() -> (E, ID)>,
}

impl<D, E, ID> CrudService<D, E, ID>
where
    D: CrudDataService<E, ID>,
    E: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Create a new CRUD service
    pub fn new(data_service: Arc<D>, entity_type: EntityType) -> Self {
        Self {
            data_service,
            entity_type,
            _marker: PhantomData,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn data_service(&self) -> &Arc<D> {
        &self.data_service
    }
}

impl<D, E, ID> CrudService<D, E, ID>
where
    D: CrudDataService<E, ID>,
    E: DomainModel<ID> + Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Create a service using the model's own type descriptor
    pub fn for_model(data_service: Arc<D>) -> Self {
        Self::new(data_service, E::ENTITY_TYPE)
    }
}

impl<D, E, ID> Debug for CrudService<D, E, ID> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudService")
            .field("entity_type", &self.entity_type)
            .finish_non_exhaustive()
    }
}

impl<D, E, ID> CrudServiceTrait<E, ID> for CrudService<D, E, ID>
where
    D: CrudDataService<E, ID>,
    E: DomainModel<ID> + Send + Sync + 'static,
    ID: Debug + Send + Sync + 'static,
{
    #[instrument(skip(self), fields(entity = %self.entity_type))]
    fn clear(&self) -> Result<(), DomainError> {
        info!("Clearing all entities");
        self.data_service.clear()
    }

    #[instrument(skip(self), fields(entity = %self.entity_type))]
    fn get_all(&self) -> Result<Vec<E>, DomainError> {
        self.data_service.get_all()
    }

    #[instrument(skip(self), fields(entity = %self.entity_type))]
    fn get_by_id(&self, id: &ID) -> Result<E, DomainError> {
        self.data_service.get_by_id(id)
    }

    #[instrument(skip(self, entity), fields(entity = %self.entity_type))]
    fn upsert(&self, entity: E) -> Result<E, DomainError> {
        match entity.id() {
            None => {
                debug!("Creating new entity");
            }
            Some(id) => {
                debug!(id = ?id, "Updating existing entity");
                // Existence check; fails with NotFound before any write
                self.data_service.get_by_id(id)?;
            }
        }

        self.data_service.upsert(entity)
    }

    #[instrument(skip(self), fields(entity = %self.entity_type))]
    fn delete(&self, id: &ID) -> Result<(), DomainError> {
        info!(id = ?id, "Deleting entity");
        self.data_service.delete(id)
    }
}
