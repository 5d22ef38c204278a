use std::fmt::Debug;

use thiserror::Error;

use super::crud::EntityType;

/// Boxed underlying cause carried by a duplication failure
pub type ErrorCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: EntityType, id: String },

    #[error("Duplicate {entity_type}: {message}")]
    Duplication {
        entity_type: EntityType,
        message: String,
        #[source]
        source: Option<ErrorCause>,
    },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn not_found<ID: Debug + ?Sized>(entity_type: EntityType, id: &ID) -> Self {
        Self::NotFound {
            entity_type,
            id: format!("{:?}", id),
        }
    }

    pub fn duplication(
        entity_type: EntityType,
        message: impl Into<String>,
        cause: Option<ErrorCause>,
    ) -> Self {
        Self::Duplication {
            entity_type,
            message: message.into(),
            source: cause,
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Entity type the error refers to, if any
    pub fn entity_type(&self) -> Option<EntityType> {
        match self {
            Self::NotFound { entity_type, .. } | Self::Duplication { entity_type, .. } => {
                Some(*entity_type)
            }
            Self::Storage { .. } | Self::Configuration { .. } => None,
        }
    }
}
