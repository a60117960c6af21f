use crate::db::leads::{
    delete_lead, get_lead, insert_lead, insert_leads, set_lead_status, update_lead,
};
use crate::domain::lead::{short_id, LeadDraft};
use crate::domain::seed::demo_drafts;
use crate::domain::{compute_kpis, filter_leads, status_rule, LeadFilter, Status};
use crate::errors::ServerError;
use crate::feed::LeadSnapshot;
use crate::forms::{draft_from_form, filter_from_query, parse_urlencoded, LeadField};
use crate::notice::Notice;
use crate::responses::{
    html_changed_response, html_oob_only_response, html_response, no_content, ResultResp,
};
use crate::spreadsheets::export_leads_xlsx;
use crate::state::AppState;
use crate::templates::pages::{board_page, board_region, lead_form_modal, status_derived, BoardVm};
use crate::templates::{notice_oob, notices};
use astra::Request;
use chrono::{Local, Utc};
use maud::html;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_urlencoded(req.uri().query().unwrap_or(""));

    log::debug!("{method} {path}");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => board(app, &query),
        ("GET", ["leads", "board"]) => board_partial(app, &query),
        ("GET", ["leads", "new"]) => html_response(lead_form_modal(None, &LeadDraft::default())),
        ("GET", ["leads", "status-rule"]) => {
            let rule = status_rule(query.get(LeadField::Status.name()).map_or("", |s| s));
            html_response(status_derived(rule))
        }
        ("GET", ["leads", "export.xlsx"]) => export(app, &query),
        ("GET", ["leads", id, "edit"]) => edit_form(app, id),

        ("POST", ["leads"]) => create(app, req),
        ("POST", ["leads", "seed"]) => seed(app),
        ("POST", ["leads", id, "status"]) => change_status(app, id, req),
        ("POST", ["leads", id, "delete"]) => remove(app, id),
        ("POST", ["leads", id]) => update(app, id, req),
        ("POST", ["refresh"]) => refresh(app, req),

        _ => Err(ServerError::NotFound),
    }
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut raw = String::new();
    body.reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(parse_urlencoded(&raw))
}

fn board_vm<'a>(app: &AppState, snap: &'a LeadSnapshot, filter: &'a LeadFilter) -> BoardVm<'a> {
    let leads = filter_leads(&snap.leads, filter);
    let now = Local::now();
    let kpis = compute_kpis(leads.iter().copied(), &now);
    BoardVm {
        filter,
        version: snap.version,
        leads,
        kpis,
        now,
        poll_secs: app.poll_secs,
    }
}

// ---------- Pages and partials ----------

fn board(app: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let filter = filter_from_query(query);
    let mut alerts = Vec::new();

    let snap = match app.feed.ensure_loaded(&app.db) {
        Ok(snap) => snap,
        Err(e) => {
            alerts.push(Notice::danger(format!("Sincronização: {e}")));
            app.feed.snapshot()
        }
    };

    html_response(board_page(&board_vm(app, &snap, &filter), &alerts))
}

/// Filter changes render from the current snapshot. The poll (`version=N`)
/// pulls the store first and answers 204 while nothing changed.
fn board_partial(app: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let filter = filter_from_query(query);

    let seen = match query.get("version") {
        Some(v) => Some(
            v.parse::<u64>()
                .map_err(|_| ServerError::BadRequest(format!("Invalid version: {v}")))?,
        ),
        None => None,
    };

    let loaded = match seen {
        Some(_) => app.feed.refresh(&app.db),
        None => app.feed.ensure_loaded(&app.db),
    };

    let snap = match loaded {
        Ok(snap) => snap,
        Err(e) => {
            let alert = Notice::danger(format!("Sincronização: {e}"));
            return html_oob_only_response(notice_oob(&[alert]));
        }
    };

    if seen == Some(snap.version) {
        return no_content();
    }

    html_response(board_region(&board_vm(app, &snap, &filter)))
}

fn edit_form(app: &AppState, id: &str) -> ResultResp {
    let snap = app.feed.snapshot();
    let lead = match snap.find(id) {
        Some(lead) => lead.clone(),
        None => get_lead(&app.db, id)?.ok_or(ServerError::NotFound)?,
    };
    html_response(lead_form_modal(Some(&lead.id), &lead.details))
}

fn export(app: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let filter = filter_from_query(query);
    let snap = app.feed.ensure_loaded(&app.db)?;
    let leads = filter_leads(&snap.leads, &filter);
    log::info!("exporting {} leads", leads.len());
    export_leads_xlsx(&leads, Local::now().date_naive())
}

// ---------- Actions ----------
//
// Actions never produce error pages: failures are logged and shown as a
// single notice. Success adds the leads-changed trigger.

fn action_failed(context: &str, err: ServerError) -> ResultResp {
    match &err {
        ServerError::Validation(msg) => log::warn!("{context}: {msg}"),
        other => log::error!("{context}: {other}"),
    }
    html_response(notices(&[Notice::from_error(context, &err)]))
}

fn action_succeeded(app: &AppState, notice: Option<Notice>) -> ResultResp {
    let list: Vec<Notice> = notice.into_iter().chain(app.sync()).collect();
    html_changed_response(notices(&list))
}

fn create(app: &AppState, req: Request) -> ResultResp {
    let result = read_form(req)
        .and_then(|form| draft_from_form(&form))
        .and_then(LeadDraft::normalized)
        .and_then(|draft| insert_lead(&app.db, &draft, Utc::now()));

    match result {
        Ok(id) => {
            log::info!("lead {id} created");
            action_succeeded(
                app,
                Some(Notice::success(format!("Lead criado ({}...)", short_id(&id)))),
            )
        }
        Err(e) => action_failed("Erro ao salvar", e),
    }
}

fn update(app: &AppState, id: &str, req: Request) -> ResultResp {
    let result = read_form(req)
        .and_then(|form| draft_from_form(&form))
        .and_then(LeadDraft::normalized)
        .and_then(|draft| update_lead(&app.db, id, &draft, Utc::now()));

    match result {
        Ok(()) => {
            log::info!("lead {id} updated");
            action_succeeded(app, Some(Notice::success("Lead atualizado")))
        }
        Err(e) => action_failed("Erro ao salvar", e),
    }
}

fn change_status(app: &AppState, id: &str, req: Request) -> ResultResp {
    let result = read_form(req).and_then(|form| {
        let status = Status::resolve(form.get(LeadField::Status.name()).map_or("", |s| s));
        set_lead_status(&app.db, id, status, Utc::now()).map(|_| status)
    });

    match result {
        Ok(status) => {
            log::info!("lead {id} moved to {}", status.key());
            action_succeeded(app, None)
        }
        Err(e) => action_failed("Erro ao alterar status", e),
    }
}

fn remove(app: &AppState, id: &str) -> ResultResp {
    match delete_lead(&app.db, id) {
        Ok(()) => {
            log::info!("lead {id} deleted");
            action_succeeded(app, Some(Notice::success("Lead deletado")))
        }
        Err(e) => action_failed("Erro ao deletar", e),
    }
}

fn seed(app: &AppState) -> ResultResp {
    let result = demo_drafts()
        .into_iter()
        .map(LeadDraft::normalized)
        .collect::<Result<Vec<_>, _>>()
        .and_then(|drafts| insert_leads(&app.db, &drafts, Utc::now()));

    match result {
        Ok(ids) => {
            log::info!("seeded {} demo leads", ids.len());
            action_succeeded(app, Some(Notice::success("Demo criada")))
        }
        Err(e) => action_failed("Erro ao criar demo", e),
    }
}

/// Re-establishes the feed and re-renders the board in place of the old one.
fn refresh(app: &AppState, req: Request) -> ResultResp {
    let filter = filter_from_query(&read_form(req)?);

    let (snap, alert) = match app.feed.refresh(&app.db) {
        Ok(snap) => (snap, Notice::info("Recarregado")),
        Err(e) => (
            app.feed.snapshot(),
            Notice::danger(format!("Sincronização: {e}")),
        ),
    };

    let vm = board_vm(app, &snap, &filter);
    html_response(html! {
        (board_region(&vm))
        (notice_oob(&[alert]))
    })
}
