use maud::{html, Markup, PreEscaped, DOCTYPE};

// Alerts remove themselves; a successful save closes the modal.
const PAGE_SCRIPT: &str = r#"
function armAlerts(root) {
  root.querySelectorAll('[data-autodismiss]').forEach(function (el) {
    if (el.dataset.armed) return;
    el.dataset.armed = '1';
    setTimeout(function () { el.remove(); }, Number(el.dataset.autodismiss));
  });
}
document.addEventListener('DOMContentLoaded', function () { armAlerts(document); });
document.addEventListener('htmx:afterSettle', function () { armAlerts(document); });
document.addEventListener('leads-changed', function () {
  var host = document.getElementById('modal-host');
  if (host) host.innerHTML = '';
});
"#;

const PAGE_STYLE: &str = r#"
body { background: #0f1117; color: #e6e6e6; }
.cell-main { font-weight: 600; }
.cell-sub { color: #9aa0a6; }
.cell-chip { background: #1f2430; border-radius: 999px; padding: 2px 8px; font-size: .85em; }
.cell-wrap { white-space: normal; max-width: 16rem; }
.badge-soft { background: #1f2430; color: #cfd3da; font-weight: 500; }
.kpi { background: #171a21; border-radius: 12px; padding: 12px 16px; }
.kpi strong { font-size: 1.6rem; display: block; }
#alert-host { position: fixed; top: 1rem; right: 1rem; z-index: 1080; min-width: 18rem; }
.lead-modal { position: fixed; inset: 0; background: rgba(0,0,0,.6); z-index: 1070; overflow-y: auto; }
.lead-modal .modal-content { background: #171a21; color: #e6e6e6; }
"#;

/// Full page shell. `alerts` lands in the alert area on first load.
pub fn desktop_layout(title: &str, alerts: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
                style { (PreEscaped(PAGE_STYLE)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
            body {
                header class="d-flex align-items-center justify-content-between px-4 py-3 border-bottom border-secondary" {
                    h3 class="m-0" { i class="bi bi-people" {} " Leads · Patrocínio" }
                    nav {
                        a href="/" class="link-light" { "Quadro" }
                    }
                }
                div id="alert-host" { (alerts) }
                div id="modal-host" {}
                (content)
            }
        }
    }
}
