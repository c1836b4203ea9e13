use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("ambient field stepped before it was built; call rebuild first")]
    NotInitialized,
}
