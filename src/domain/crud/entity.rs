//! Domain model traits and types

use std::fmt;

/// Diagnostic name of an entity type, carried into logs and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityType(&'static str);

impl EntityType {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Trait for entities managed through a CRUD service
///
/// An entity without an identifier is new; one with an identifier is
/// assumed to exist in the backend. Identifiers are assigned by the backend.
pub trait DomainModel<ID> {
    /// Type descriptor used for diagnostics
    const ENTITY_TYPE: EntityType;

    /// Returns the entity's identifier, if it has been assigned one
    fn id(&self) -> Option<&ID>;

    /// Returns true if the entity has not been persisted yet
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
