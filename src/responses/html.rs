use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Header htmx turns into a client-side event after the swap.
pub const HX_TRIGGER: &str = "HX-Trigger";

/// Event the board listens for to re-poll and the page uses to close the modal.
pub const LEADS_CHANGED: &str = "leads-changed";

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// HTML fragment that also tells the page the lead set changed.
pub fn html_changed_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header(HX_TRIGGER, LEADS_CHANGED)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Nothing to swap; htmx leaves the target alone on 204.
pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Fragment with only out-of-band content (notices); the request target is left alone.
pub fn html_oob_only_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header("HX-Reswap", "none")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
