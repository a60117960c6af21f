use crate::errors::ServerError;
use crate::templates::html_error_response;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response, logging server-side failures.
pub fn error_to_response(err: ServerError) -> Response {
    match &err {
        ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
            log::error!("request failed: {err}")
        }
        ServerError::NotFound | ServerError::BadRequest(_) | ServerError::Validation(_) => {
            log::debug!("request rejected: {err}")
        }
    }
    html_error_response(err)
}
