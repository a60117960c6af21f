use crate::domain::lead::Lead;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 20] = [
    "Nome",
    "Empresa",
    "Segmento",
    "Porte",
    "Tempo de associação",
    "Histórico de patrocínio",
    "Histórico",
    "Evento",
    "Cota ideal",
    "Cota opção 2",
    "Cota opção 3",
    "Responsável",
    "Status",
    "Feedback",
    "Próxima ação",
    "Último contato",
    "Contato",
    "Observações",
    "Criado em",
    "Atualizado em",
];

fn lead_cells(lead: &Lead) -> [String; 20] {
    let d = &lead.details;
    let status = lead.status();
    let stamp = |t: chrono::DateTime<chrono::Utc>| t.format("%Y-%m-%d %H:%M").to_string();

    [
        lead.full_name(),
        d.company.clone(),
        d.segment.clone(),
        d.size_tier.clone(),
        d.tenure.clone(),
        d.sponsorship_history.clone(),
        d.history_type.clone(),
        d.event.clone(),
        d.package_ideal.clone(),
        d.package_option2.clone(),
        d.package_option3.clone(),
        d.owner.clone(),
        status.label().to_string(),
        status.feedback().to_string(),
        status.next_action().to_string(),
        d.last_contact
            .map(|day| day.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        d.contact.clone(),
        d.notes.clone(),
        stamp(lead.created_at),
        lead.updated_at.map(stamp).unwrap_or_default(),
    ]
}

/// Workbook bytes for the given leads, one row each, in the given order.
pub fn build_leads_workbook(leads: &[&Lead]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in lead_cells(lead).iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(|e| {
                    ServerError::XlsxError(format!(
                        "Failed to write {} for lead {}: {}",
                        HEADERS[col], lead.id, e
                    ))
                })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_leads_xlsx(leads: &[&Lead], today: NaiveDate) -> ResultResp {
    let buffer = build_leads_workbook(leads)?;
    xlsx_response(buffer, &format!("leads_{}.xlsx", today.format("%Y-%m-%d")))
}
