use ponics_schemas::levels::LevelKind;
use ponics_schemas::tolerance::InvalidTolerance;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PonicsError {
    #[error("Organism '{0}' not found")]
    OrganismNotFound(Uuid),

    #[error("System '{0}' not found")]
    SystemNotFound(Uuid),

    #[error("Entity '{0}' not found in store, cannot update")]
    EntityNotFound(Uuid),

    #[error("Component '{0}' is not part of the target system")]
    ComponentNotFound(Uuid),

    #[error("A {1} tolerance is already defined for organism '{0}'")]
    ToleranceAlreadyDefined(Uuid, LevelKind),

    #[error("No {1} tolerance is defined for organism '{0}', nothing to update")]
    ToleranceNotDefined(Uuid, LevelKind),

    #[error("Cannot analyse a non-finite {0} reading ({1})")]
    NonFiniteMeasurement(LevelKind, f64),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(#[from] InvalidTolerance),

    #[error("No handler registered for operation '{0}'")]
    HandlerNotFound(&'static str),

    #[error("A handler for operation '{0}' is already registered")]
    HandlerConflict(&'static str),

    #[error("Data store error: {0}")]
    StoreError(String),
}
