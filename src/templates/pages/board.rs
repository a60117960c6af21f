use crate::domain::filter::LeadFilter;
use crate::domain::Kpis;
use crate::domain::Lead;
use crate::domain::options::{OWNERS, SEGMENTS};
use crate::domain::status::Status;
use crate::forms::{filter_to_query, FILTER_OWNER, FILTER_QUERY, FILTER_SEGMENT, FILTER_STATUS};
use crate::notice::Notice;
use crate::templates::components::{notices, select_options, status_badge, status_labels};
use crate::templates::desktop_layout;
use chrono::{DateTime, Local};
use maud::{html, Markup};

pub struct BoardVm<'a> {
    pub filter: &'a LeadFilter,
    /// Snapshot version the board was rendered from; the poll sends it back.
    pub version: u64,
    pub leads: Vec<&'a Lead>,
    pub kpis: Kpis,
    pub now: DateTime<Local>,
    pub poll_secs: u64,
}

pub fn board_page(vm: &BoardVm, alerts: &[Notice]) -> Markup {
    desktop_layout(
        "Leads · Patrocínio",
        notices(alerts),
        html! {
            main class="container-fluid px-4 py-3" {
                (toolbar())
                (filter_bar(vm.filter))
                (board_region(vm))
            }
        },
    )
}

fn toolbar() -> Markup {
    html! {
        div class="d-flex gap-2 mb-3" {
            button class="btn btn-primary" hx-get="/leads/new" hx-target="#modal-host" hx-swap="innerHTML" {
                i class="bi bi-plus-lg" {} " Novo lead"
            }
            button
                class="btn btn-outline-light"
                hx-post="/refresh"
                hx-include="#filters"
                hx-target="#board"
                hx-swap="outerHTML"
            {
                i class="bi bi-arrow-clockwise" {} " Recarregar"
            }
            button
                class="btn btn-outline-secondary"
                hx-post="/leads/seed"
                hx-target="#alert-host"
                hx-swap="beforeend"
            {
                i class="bi bi-magic" {} " Criar demo"
            }
        }
    }
}

fn filter_bar(filter: &LeadFilter) -> Markup {
    let statuses = status_labels();
    html! {
        form
            id="filters"
            class="row g-2 align-items-center mb-3"
            action="/"
            method="get"
            hx-get="/leads/board"
            hx-target="#board"
            hx-swap="outerHTML"
            hx-trigger="change"
        {
            div class="col-md-4" {
                input
                    type="search"
                    class="form-control"
                    hx-get="/leads/board"
                    hx-include="#filters"
                    hx-target="#board"
                    hx-swap="outerHTML"
                    hx-trigger="input changed delay:300ms, search"
                    name=(FILTER_QUERY)
                    value=(filter.query)
                    placeholder="Buscar nome, empresa, responsável, evento…";
            }
            div class="col-md-2" {
                select class="form-select" name=(FILTER_STATUS) {
                    (select_options(&statuses, &filter.status, Some("Status: todos")))
                }
            }
            div class="col-md-2" {
                select class="form-select" name=(FILTER_OWNER) {
                    (select_options(OWNERS, &filter.owner, Some("Responsável: todos")))
                }
            }
            div class="col-md-2" {
                select class="form-select" name=(FILTER_SEGMENT) {
                    (select_options(SEGMENTS, &filter.segment, Some("Segmento: todos")))
                }
            }
            div class="col-md-2 d-flex gap-2" {
                a href="/" class="btn btn-outline-secondary" { "Limpar" }
                button type="submit" class="btn btn-outline-success" formaction="/leads/export.xlsx" {
                    i class="bi bi-file-earmark-spreadsheet" {} " Exportar"
                }
            }
        }
    }
}

/// KPIs and table. Swapped as a unit by filters, refresh and the poll.
pub fn board_region(vm: &BoardVm) -> Markup {
    let qs = filter_to_query(vm.filter);
    let poll_url = if qs.is_empty() {
        format!("/leads/board?version={}", vm.version)
    } else {
        format!("/leads/board?version={}&{}", vm.version, qs)
    };

    html! {
        div
            id="board"
            data-version=(vm.version)
            hx-get=(poll_url)
            hx-trigger=(format!("every {}s, leads-changed from:body", vm.poll_secs))
            hx-swap="outerHTML"
        {
            (kpi_strip(&vm.kpis))
            (lead_table(vm))
        }
    }
}

fn kpi_strip(k: &Kpis) -> Markup {
    html! {
        div class="row g-3 mb-3" {
            div class="col" { div class="kpi" id="kpi-total" { span { "Total" } strong { (k.total) } } }
            div class="col" { div class="kpi" id="kpi-hot" { span { "Quentes" } strong { (k.hot) } } }
            div class="col" { div class="kpi" id="kpi-lost" { span { "Perdidos" } strong { (k.lost) } } }
            div class="col" { div class="kpi" id="kpi-today" { span { "Mexidos hoje" } strong { (k.touched_today) } } }
        }
    }
}

fn lead_table(vm: &BoardVm) -> Markup {
    html! {
        div class="table-responsive" {
            table class="table table-dark table-hover align-middle" {
                thead {
                    tr {
                        th { "Nome" }
                        th { "Empresa" }
                        th { "Responsável" }
                        th { "Status" }
                        th { "Feedback" }
                        th { "Próxima ação" }
                        th { "Último contato" }
                        th { "Dias" }
                        th class="text-end" { "" }
                    }
                }
                tbody id="table-body" {
                    @if vm.leads.is_empty() {
                        tr { td colspan="9" class="text-center text-secondary py-4" { "Nenhum lead encontrado." } }
                    }
                    @for lead in &vm.leads {
                        (lead_row(lead, &vm.now))
                    }
                }
            }
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn lead_row(lead: &Lead, now: &DateTime<Local>) -> Markup {
    let d = &lead.details;
    let status = lead.status();
    let name = lead.full_name();
    let last_contact = d
        .last_contact
        .map(|day| day.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".into());

    html! {
        tr id=(format!("lead-{}", lead.id)) hx-get=(format!("/leads/{}/edit", lead.id)) hx-trigger="dblclick" hx-target="#modal-host" hx-swap="innerHTML" {
            td { div class="cell-main" { (or_dash(&name)) } }
            td { div class="cell-sub" { (or_dash(&d.company)) } }
            td { span class="cell-chip" { i class="bi bi-person" {} " " (or_dash(&d.owner)) } }
            td {
                div class="mb-1" { (status_badge(status)) }
                select
                    class="form-select form-select-sm bg-transparent text-light border-0"
                    name="status"
                    hx-post=(format!("/leads/{}/status", lead.id))
                    hx-trigger="change"
                    hx-target="#alert-host"
                    hx-swap="beforeend"
                {
                    @for s in Status::ALL {
                        option value=(s.label()) selected[s == status] { (s.label()) }
                    }
                }
            }
            td { div class="cell-wrap" { (status.feedback()) } }
            td { div class="cell-wrap" { (status.next_action()) } }
            td { (last_contact) }
            td { (lead.lead_time_days(now)) }
            td class="text-end text-nowrap" {
                button
                    class="btn btn-sm btn-outline-light"
                    title="Editar"
                    hx-get=(format!("/leads/{}/edit", lead.id))
                    hx-target="#modal-host"
                    hx-swap="innerHTML"
                { i class="bi bi-pencil" {} }
                " "
                button
                    class="btn btn-sm btn-outline-danger"
                    title="Deletar"
                    hx-post=(format!("/leads/{}/delete", lead.id))
                    hx-confirm="Deletar este lead?"
                    hx-target="#alert-host"
                    hx-swap="beforeend"
                { i class="bi bi-trash" {} }
            }
        }
    }
}
