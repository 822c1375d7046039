pub mod photos;
pub mod places;
pub mod sessions;

use axum::extract::{rejection::QueryRejection, Query};

use crate::error::{invalid_input_error, Error};

/// Maps a query-string rejection onto the JSON error body.
pub(crate) fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    match params {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            tracing::debug!("rejected query string: {}", rejection);
            Err(invalid_input_error())
        }
    }
}
