use async_graphql::ErrorExtensions;

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::errors::DecideError;

/// Surfaces the same message as the REST API, with a machine readable `code` extension.
pub fn graphql_error(error: ApplicationError) -> async_graphql::Error {
    let code = match &error {
        ApplicationError::Domain(DecideError::ActivityNotFound) => "NOT_FOUND",
        ApplicationError::Domain(_) => "BAD_REQUEST",
        ApplicationError::Store(_) => "INTERNAL_SERVER_ERROR",
    };
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}
