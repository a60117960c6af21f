use crate::notice::Notice;
use maud::{html, Markup};

const DISMISS_AFTER_MS: u32 = 4000;

pub fn notice_alert(notice: &Notice) -> Markup {
    html! {
        div
            class=(format!("alert alert-{} alert-dismissible fade show", notice.level.as_str()))
            role="alert"
            data-autodismiss=(DISMISS_AFTER_MS)
        {
            (notice.message)
            button type="button" class="btn-close" aria-label="Close" onclick="this.parentElement.remove()" {}
        }
    }
}

/// Alerts to append to `#alert-host`.
pub fn notices(list: &[Notice]) -> Markup {
    html! {
        @for n in list {
            (notice_alert(n))
        }
    }
}

/// Same alerts, delivered out-of-band next to another swap.
pub fn notice_oob(list: &[Notice]) -> Markup {
    html! {
        div hx-swap-oob="beforeend:#alert-host" {
            (notices(list))
        }
    }
}
