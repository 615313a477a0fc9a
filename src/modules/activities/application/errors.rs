use crate::modules::activities::adapters::outbound::activity_store::StoreError;
use crate::modules::activities::core::errors::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}
