use crate::domain::{canon, Status};
use maud::{html, Markup};

pub mod error;
pub mod notice;

pub use error::html_error_response;
pub use notice::{notice_oob, notices};

/// `<option>` list for a select. `blank` adds a leading empty choice with that text.
/// Selection is matched canonically so stored spellings still select.
pub fn select_options(choices: &[&str], selected: &str, blank: Option<&str>) -> Markup {
    let selected = canon(selected);
    html! {
        @if let Some(text) = blank {
            option value="" selected[selected.is_empty()] { (text) }
        }
        @for choice in choices {
            option value=(choice) selected[canon(choice) == selected] { (choice) }
        }
    }
}

pub fn status_labels() -> Vec<&'static str> {
    Status::ALL.iter().map(Status::label).collect()
}

pub fn status_badge(status: Status) -> Markup {
    html! {
        span class="badge badge-soft" {
            i class=(format!("bi {}", status.icon())) {}
            " " (status.label())
        }
    }
}
