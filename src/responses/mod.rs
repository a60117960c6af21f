pub mod errors;
pub mod html;
pub mod xlsx;

pub use errors::{error_to_response, ResultResp};

pub use html::{html_changed_response, html_oob_only_response, html_response, no_content};
pub use xlsx::xlsx_response;
