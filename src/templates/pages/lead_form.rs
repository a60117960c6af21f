use crate::domain::LeadDraft;
use crate::domain::{Status, StatusRule};
use crate::forms::LeadField;
use crate::templates::components::{select_options, status_badge, status_labels};
use maud::{html, Markup};

/// Modal for creating (`id == None`) or editing a lead.
pub fn lead_form_modal(id: Option<&str>, draft: &LeadDraft) -> Markup {
    let (title, action) = match id {
        Some(id) => ("Editar lead", format!("/leads/{id}")),
        None => ("Novo lead", "/leads".to_string()),
    };

    html! {
        div class="lead-modal" id="lead-modal" {
            div class="modal-dialog modal-lg modal-dialog-scrollable py-4" {
                form
                    class="modal-content"
                    hx-post=(action)
                    hx-target="#alert-host"
                    hx-swap="beforeend"
                {
                    div class="modal-header" {
                        h5 class="modal-title" id="lead-modal-title" { (title) }
                        @if id.is_some() {
                            span class="ms-2" { (status_badge(draft.status)) }
                        }
                        button
                            type="button"
                            class="btn-close btn-close-white"
                            aria-label="Fechar"
                            onclick="document.getElementById('modal-host').innerHTML = ''"
                        {}
                    }
                    div class="modal-body" {
                        div class="row g-3" {
                            (text_field(LeadField::FirstName, draft, "col-md-4"))
                            (text_field(LeadField::LastName, draft, "col-md-4"))
                            (text_field(LeadField::Company, draft, "col-md-4"))

                            (select_field(LeadField::Segment, draft))
                            (select_field(LeadField::SizeTier, draft))
                            (select_field(LeadField::Tenure, draft))
                            (select_field(LeadField::SponsorshipHistory, draft))
                            (select_field(LeadField::HistoryType, draft))
                            (select_field(LeadField::Event, draft))

                            (select_field(LeadField::PackageIdeal, draft))
                            (select_field(LeadField::PackageOption2, draft))
                            (select_field(LeadField::PackageOption3, draft))

                            (select_field(LeadField::Owner, draft))
                            (status_field(draft.status))
                            (date_field(LeadField::LastContact, draft))

                            div class="col-12" id="status-derived" {
                                (status_derived(draft.status.rule()))
                            }

                            (text_field(LeadField::Contact, draft, "col-md-12"))
                            (notes_field(draft))
                        }
                    }
                    div class="modal-footer" {
                        @if let Some(id) = id {
                            button
                                type="button"
                                id="btn-delete-lead"
                                class="btn btn-outline-danger me-auto"
                                hx-post=(format!("/leads/{id}/delete"))
                                hx-confirm="Deletar este lead?"
                                hx-target="#alert-host"
                                hx-swap="beforeend"
                            {
                                i class="bi bi-trash" {} " Deletar"
                            }
                        }
                        button
                            type="button"
                            class="btn btn-outline-secondary"
                            onclick="document.getElementById('modal-host').innerHTML = ''"
                        { "Cancelar" }
                        button type="submit" class="btn btn-primary" { "Salvar" }
                    }
                }
            }
        }
    }
}

fn text_field(field: LeadField, draft: &LeadDraft, col: &str) -> Markup {
    html! {
        div class=(col) {
            label class="form-label" for=(field.name()) { (field.label()) }
            input type="text" class="form-control" id=(field.name()) name=(field.name()) value=(field.read(draft));
        }
    }
}

fn date_field(field: LeadField, draft: &LeadDraft) -> Markup {
    html! {
        div class="col-md-4" {
            label class="form-label" for=(field.name()) { (field.label()) }
            input type="date" class="form-control" id=(field.name()) name=(field.name()) value=(field.read(draft));
        }
    }
}

fn select_field(field: LeadField, draft: &LeadDraft) -> Markup {
    let choices = field.choices().unwrap_or(&[]);
    html! {
        div class="col-md-4" {
            label class="form-label" for=(field.name()) { (field.label()) }
            select class="form-select" id=(field.name()) name=(field.name()) {
                (select_options(choices, &field.read(draft), Some("-")))
            }
        }
    }
}

fn notes_field(draft: &LeadDraft) -> Markup {
    let field = LeadField::Notes;
    html! {
        div class="col-12" {
            label class="form-label" for=(field.name()) { (field.label()) }
            textarea class="form-control" rows="3" id=(field.name()) name=(field.name()) { (field.read(draft)) }
        }
    }
}

// No blank choice: a lead always has a status.
fn status_field(status: Status) -> Markup {
    let field = LeadField::Status;
    let labels = status_labels();
    html! {
        div class="col-md-4" {
            label class="form-label" for=(field.name()) { (field.label()) }
            select
                class="form-select"
                id=(field.name())
                name=(field.name())
                hx-get="/leads/status-rule"
                hx-trigger="change"
                hx-target="#status-derived"
                hx-swap="innerHTML"
            {
                (select_options(&labels, status.label(), None))
            }
        }
    }
}

/// Read-only feedback / next action for the selected status.
/// These inputs carry no `name`, so they are never submitted.
pub fn status_derived(rule: StatusRule) -> Markup {
    html! {
        div class="row g-3" {
            div class="col-md-6" {
                label class="form-label" for="feedback" { "Feedback" }
                input type="text" class="form-control" id="feedback" value=(rule.feedback) readonly;
            }
            div class="col-md-6" {
                label class="form-label" for="next_action" { "Próxima ação" }
                input type="text" class="form-control" id="next_action" value=(rule.next_action) readonly;
            }
        }
    }
}
