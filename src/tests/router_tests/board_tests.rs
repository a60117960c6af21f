use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, post_form};

#[test]
fn board_page_loads_empty() {
    let app = init_test_app();

    let resp = handle(get("/"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("id=\"board\""));
    assert!(body.contains("Nenhum lead encontrado."));
    assert!(body.contains("id=\"alert-host\""));
}

#[test]
fn seeded_board_filters_by_owner_and_segment() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).expect("seed failed");

    let resp = handle(get("/leads/board?owner=bruna&segment=comercio"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("ACIA"));
    assert!(!body.contains("ExpoCo"));
    assert!(!body.contains("ServPro"));

    // A partial, not a page.
    assert!(!body.contains("<html"));
}

#[test]
fn board_search_ignores_accents_and_case() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).unwrap();

    let body = body_string(handle(get("/leads/board?q=jo%C3%A3o"), &app).unwrap());
    assert!(body.contains("Joao Vitor"));
    assert!(!body.contains("Mirelli"));
}

#[test]
fn poll_with_current_version_is_no_content() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).unwrap();

    let version = app.feed.snapshot().version;
    let resp = handle(get(&format!("/leads/board?version={version}")), &app).unwrap();
    assert_eq!(resp.status(), 204);

    let resp = handle(get("/leads/board?version=0"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(&format!("version={version}")));
}

#[test]
fn poll_picks_up_writes_made_elsewhere() {
    let app = init_test_app();
    handle(get("/"), &app).unwrap();
    let version = app.feed.snapshot().version;

    // Written straight to the store, bypassing the handlers.
    crate::db::leads::insert_leads(
        &app.db,
        &crate::domain::seed::demo_drafts(),
        chrono::Utc::now(),
    )
    .unwrap();

    let resp = handle(get(&format!("/leads/board?version={version}")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("ExpoCo"));
    assert!(app.feed.snapshot().version > version);
}

#[test]
fn bad_poll_version_is_bad_request() {
    let app = init_test_app();
    let err = handle(get("/leads/board?version=abc"), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}

#[test]
fn refresh_rerenders_board_with_notice() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).unwrap();

    let resp = handle(post_form("/refresh", "owner=JAMES"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("id=\"board\""));
    assert!(body.contains("ServPro"));
    assert!(!body.contains("ACIA"));
    assert!(body.contains("hx-swap-oob"));
    assert!(body.contains("Recarregado"));
}

#[test]
fn new_lead_form_defaults_to_pending() {
    let app = init_test_app();

    let body = body_string(handle(get("/leads/new"), &app).unwrap());
    assert!(body.contains("Novo lead"));
    assert!(body.contains("1º CONTATO + PITCH"));
    assert!(body.contains("ENVIAR PROPOSTA"));
}

#[test]
fn status_rule_preview_follows_selection() {
    let app = init_test_app();

    let body = body_string(handle(get("/leads/status-rule?status=em%20negocia%C3%A7%C3%A3o"), &app).unwrap());
    assert!(body.contains("NEGOCIANDO PROPOSTA"));
    assert!(body.contains("ENVIAR CONTRATO"));

    let body = body_string(handle(get("/leads/status-rule?status=XYZ"), &app).unwrap());
    assert!(body.contains("1º CONTATO + PITCH"));
}

#[test]
fn edit_form_for_missing_lead_is_not_found() {
    let app = init_test_app();
    let err = handle(get("/leads/nope/edit"), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app();
    let err = handle(get("/admin"), &app).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
}

#[test]
fn export_returns_workbook() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).unwrap();

    let resp = handle(get("/leads/export.xlsx?status=perdido"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers().get("Content-Disposition").unwrap().to_str().unwrap();
    assert!(disposition.contains("leads_"));
    assert!(disposition.contains(".xlsx"));
}

fn drop_leads_table(app: &crate::state::AppState) {
    app.db
        .with_conn(|conn| {
            conn.execute_batch("DROP TABLE leads")
                .map_err(crate::errors::ServerError::from)
        })
        .unwrap();
}

#[test]
fn failed_refresh_keeps_previous_snapshot() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).unwrap();
    let before = app.feed.snapshot();

    drop_leads_table(&app);

    let resp = handle(post_form("/refresh", ""), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("alert-danger"));
    assert!(body.contains("Sincronização: Database Error"));
    assert!(body.contains("ACIA"), "board still shows the last good list");

    let after = app.feed.snapshot();
    assert_eq!(after.version, before.version);
    assert_eq!(after.leads.len(), 3);
}

#[test]
fn failed_poll_only_sends_notice() {
    let app = init_test_app();
    handle(post_form("/leads/seed", ""), &app).unwrap();
    let version = app.feed.snapshot().version;

    drop_leads_table(&app);

    let resp = handle(get(&format!("/leads/board?version={version}")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("HX-Reswap").unwrap(), "none");

    let body = body_string(resp);
    assert!(body.contains("hx-swap-oob"));
    assert!(body.contains("Sincronização"));
    assert!(!body.contains("id=\"board\""));
    assert_eq!(app.feed.snapshot().version, version);
}

#[test]
fn search_box_searches_while_typing() {
    let app = init_test_app();
    let body = body_string(handle(get("/"), &app).unwrap());

    let input = body
        .split("<input")
        .find(|tag| tag.contains("name=\"q\""))
        .expect("search input");
    assert!(input.contains("hx-trigger=\"input changed delay:300ms, search\""));
    assert!(input.contains("hx-get=\"/leads/board\""));
    assert!(input.contains("hx-include=\"#filters\""));
    assert!(!body.contains("input changed delay:300ms, change"));
}
