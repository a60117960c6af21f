use crate::db::leads::{get_lead, list_leads};
use crate::domain::Status;
use crate::responses::html::LEADS_CHANGED;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, post_form};

const NEW_LEAD: &str = "first_name=Joao&last_name=Vitor&company=ACIA\
&segment=comercio&owner=bruna&status=AVAN%C3%87ADO&last_contact=2024-05-02";

#[test]
fn create_derives_feedback_from_status() {
    let app = init_test_app();

    let resp = handle(post_form("/leads", NEW_LEAD), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("HX-Trigger").unwrap(), LEADS_CHANGED);

    let body = body_string(resp);
    assert!(body.contains("Lead criado ("));
    assert!(body.contains("alert-success"));
    assert!(!body.contains("<html"));

    let leads = list_leads(&app.db).unwrap();
    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert_eq!(lead.status(), Status::Avancado);
    assert_eq!(lead.status().feedback(), "CLIENTE INTERESSADO");
    assert_eq!(lead.status().next_action(), "NEGOCIAR/FECHAR");
    assert_eq!(lead.details.segment, "COMERCIO");
    assert_eq!(lead.details.owner, "BRUNA");
    assert!(body.contains(lead.short_id()));

    // The feed already holds the new lead.
    assert_eq!(app.feed.snapshot().leads.len(), 1);
}

#[test]
fn submitted_feedback_fields_are_ignored() {
    let app = init_test_app();
    let form = format!("{NEW_LEAD}&feedback=QUALQUER&next_action=OUTRA");

    handle(post_form("/leads", &form), &app).unwrap();

    let lead = list_leads(&app.db).unwrap().remove(0);
    assert_eq!(lead.status().feedback(), "CLIENTE INTERESSADO");
}

#[test]
fn create_without_name_or_company_warns() {
    let app = init_test_app();

    let resp = handle(post_form("/leads", "first_name=+&company="), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("HX-Trigger").is_none());

    let body = body_string(resp);
    assert!(body.contains("alert-warning"));
    assert!(body.contains("Preencha nome ou empresa."));
    assert!(list_leads(&app.db).unwrap().is_empty());
}

#[test]
fn create_with_bad_date_reports_error() {
    let app = init_test_app();

    let body = body_string(handle(post_form("/leads", "company=ACIA&last_contact=ontem"), &app).unwrap());
    assert!(body.contains("alert-danger"));
    assert!(body.contains("Erro ao salvar"));
    assert!(list_leads(&app.db).unwrap().is_empty());
}

#[test]
fn inline_status_change_only_touches_status() {
    let app = init_test_app();
    handle(post_form("/leads", NEW_LEAD), &app).unwrap();
    let before = list_leads(&app.db).unwrap().remove(0);

    let resp = handle(
        post_form(&format!("/leads/{}/status", before.id), "status=perdido"),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("HX-Trigger").unwrap(), LEADS_CHANGED);

    let after = get_lead(&app.db, &before.id).unwrap().unwrap();
    assert_eq!(after.status(), Status::Perdido);
    assert_eq!(after.status().feedback(), "NÃO APROVADO");
    assert_eq!(after.status().next_action(), "NEGÓCIO PERDIDO");
    assert_eq!(after.details.company, before.details.company);
    assert_eq!(after.details.last_contact, before.details.last_contact);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn status_change_on_missing_lead_reports_not_found() {
    let app = init_test_app();

    let resp = handle(post_form("/leads/nope/status", "status=PERDIDO"), &app).unwrap();
    assert!(resp.headers().get("HX-Trigger").is_none());

    let body = body_string(resp);
    assert!(body.contains("Erro ao alterar status: lead não encontrado"));
}

#[test]
fn update_rewrites_lead() {
    let app = init_test_app();
    handle(post_form("/leads", NEW_LEAD), &app).unwrap();
    let id = list_leads(&app.db).unwrap().remove(0).id;

    let form = "first_name=Joao&last_name=Vitor&company=ACIA+Eventos&owner=JAMES&status=APROVADO";
    let body = body_string(handle(post_form(&format!("/leads/{id}"), form), &app).unwrap());
    assert!(body.contains("Lead atualizado"));

    let lead = get_lead(&app.db, &id).unwrap().unwrap();
    assert_eq!(lead.details.company, "ACIA Eventos");
    assert_eq!(lead.details.owner, "JAMES");
    assert_eq!(lead.status(), Status::Aprovado);
    assert_eq!(lead.details.last_contact, None);
}

#[test]
fn edit_form_shows_stored_values() {
    let app = init_test_app();
    handle(post_form("/leads", NEW_LEAD), &app).unwrap();
    let id = list_leads(&app.db).unwrap().remove(0).id;

    let body = body_string(handle(get(&format!("/leads/{id}/edit")), &app).unwrap());
    assert!(body.contains("Editar lead"));
    assert!(body.contains("value=\"ACIA\""));
    assert!(body.contains("2024-05-02"));
    assert!(body.contains("CLIENTE INTERESSADO"));
}

#[test]
fn delete_removes_lead_from_board() {
    let app = init_test_app();
    handle(post_form("/leads", NEW_LEAD), &app).unwrap();
    let id = list_leads(&app.db).unwrap().remove(0).id;

    let body = body_string(handle(post_form(&format!("/leads/{id}/delete"), ""), &app).unwrap());
    assert!(body.contains("Lead deletado"));
    assert!(get_lead(&app.db, &id).unwrap().is_none());
    assert!(app.feed.snapshot().leads.is_empty());

    let again = body_string(handle(post_form(&format!("/leads/{id}/delete"), ""), &app).unwrap());
    assert!(again.contains("Erro ao deletar"));
}

#[test]
fn seed_creates_three_demo_leads() {
    let app = init_test_app();

    let resp = handle(post_form("/leads/seed", ""), &app).unwrap();
    assert_eq!(resp.headers().get("HX-Trigger").unwrap(), LEADS_CHANGED);
    assert!(body_string(resp).contains("Demo criada"));

    let leads = list_leads(&app.db).unwrap();
    assert_eq!(leads.len(), 3);
    assert!(leads.iter().any(|l| l.details.company == "ExpoCo" && l.status() == Status::Avancado));
}

#[test]
fn store_failure_on_create_is_one_danger_notice() {
    let app = init_test_app();
    app.db
        .with_conn(|conn| {
            conn.execute_batch("DROP TABLE leads")
                .map_err(crate::errors::ServerError::from)
        })
        .unwrap();

    let resp = handle(post_form("/leads", NEW_LEAD), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("HX-Trigger").is_none());

    let body = body_string(resp);
    assert_eq!(body.matches("alert-danger").count(), 1);
    assert!(body.contains("Erro ao salvar: Database Error"));
    assert!(app.feed.snapshot().leads.is_empty());
}
