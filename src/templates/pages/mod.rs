pub mod board;
pub mod lead_form;

pub use board::{board_page, board_region, BoardVm};
pub use lead_form::{lead_form_modal, status_derived};
