// src/forms.rs
//
// Explicit mapping between the typed records and the HTML form controls.
// Templates read values through `LeadField::read`, handlers write them back
// through `LeadField::write`, so a control name lives in exactly one place.

use crate::domain::filter::LeadFilter;
use crate::domain::lead::LeadDraft;
use crate::domain::options;
use crate::domain::status::Status;
use crate::errors::ServerError;
use chrono::NaiveDate;
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decode an `application/x-www-form-urlencoded` body or query string.
/// Later duplicates win.
pub fn parse_urlencoded(input: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Company,
    Segment,
    SizeTier,
    Tenure,
    SponsorshipHistory,
    HistoryType,
    Event,
    PackageIdeal,
    PackageOption2,
    PackageOption3,
    Owner,
    Status,
    LastContact,
    Contact,
    Notes,
}

impl LeadField {
    pub const ALL: [LeadField; 17] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::Company,
        LeadField::Segment,
        LeadField::SizeTier,
        LeadField::Tenure,
        LeadField::SponsorshipHistory,
        LeadField::HistoryType,
        LeadField::Event,
        LeadField::PackageIdeal,
        LeadField::PackageOption2,
        LeadField::PackageOption3,
        LeadField::Owner,
        LeadField::Status,
        LeadField::LastContact,
        LeadField::Contact,
        LeadField::Notes,
    ];

    /// Form control name (also the element id).
    pub fn name(&self) -> &'static str {
        match self {
            LeadField::FirstName => "first_name",
            LeadField::LastName => "last_name",
            LeadField::Company => "company",
            LeadField::Segment => "segment",
            LeadField::SizeTier => "size_tier",
            LeadField::Tenure => "tenure",
            LeadField::SponsorshipHistory => "sponsorship_history",
            LeadField::HistoryType => "history_type",
            LeadField::Event => "event",
            LeadField::PackageIdeal => "package_ideal",
            LeadField::PackageOption2 => "package_option2",
            LeadField::PackageOption3 => "package_option3",
            LeadField::Owner => "owner",
            LeadField::Status => "status",
            LeadField::LastContact => "last_contact",
            LeadField::Contact => "contact",
            LeadField::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadField::FirstName => "Nome",
            LeadField::LastName => "Sobrenome",
            LeadField::Company => "Empresa",
            LeadField::Segment => "Segmento",
            LeadField::SizeTier => "Porte",
            LeadField::Tenure => "Tempo de associação",
            LeadField::SponsorshipHistory => "Histórico de patrocínio",
            LeadField::HistoryType => "Histórico",
            LeadField::Event => "Evento",
            LeadField::PackageIdeal => "Cota ideal",
            LeadField::PackageOption2 => "Cota opção 2",
            LeadField::PackageOption3 => "Cota opção 3",
            LeadField::Owner => "Responsável",
            LeadField::Status => "Status",
            LeadField::LastContact => "Último contato",
            LeadField::Contact => "Contato",
            LeadField::Notes => "Observações",
        }
    }

    /// Fixed choices for select controls; `None` for free input.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            LeadField::Segment => Some(options::SEGMENTS),
            LeadField::SizeTier => Some(options::SIZE_TIERS),
            LeadField::Tenure => Some(options::TENURES),
            LeadField::SponsorshipHistory => Some(options::SPONSORSHIP_HISTORY),
            LeadField::HistoryType => Some(options::HISTORY_TYPES),
            LeadField::Event => Some(options::EVENTS),
            LeadField::PackageIdeal | LeadField::PackageOption2 | LeadField::PackageOption3 => {
                Some(options::PACKAGE_TIERS)
            }
            LeadField::Owner => Some(options::OWNERS),
            _ => None,
        }
    }

    /// Current value as the control shows it.
    pub fn read(&self, d: &LeadDraft) -> String {
        match self {
            LeadField::FirstName => d.first_name.clone(),
            LeadField::LastName => d.last_name.clone(),
            LeadField::Company => d.company.clone(),
            LeadField::Segment => d.segment.clone(),
            LeadField::SizeTier => d.size_tier.clone(),
            LeadField::Tenure => d.tenure.clone(),
            LeadField::SponsorshipHistory => d.sponsorship_history.clone(),
            LeadField::HistoryType => d.history_type.clone(),
            LeadField::Event => d.event.clone(),
            LeadField::PackageIdeal => d.package_ideal.clone(),
            LeadField::PackageOption2 => d.package_option2.clone(),
            LeadField::PackageOption3 => d.package_option3.clone(),
            LeadField::Owner => d.owner.clone(),
            LeadField::Status => d.status.label().to_string(),
            LeadField::LastContact => d
                .last_contact
                .map(|day| day.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            LeadField::Contact => d.contact.clone(),
            LeadField::Notes => d.notes.clone(),
        }
    }

    /// Store a submitted value. Status is total (unknown → PENDENTE);
    /// a malformed date is a bad request.
    pub fn write(&self, d: &mut LeadDraft, value: &str) -> Result<(), ServerError> {
        let v = value.to_string();
        match self {
            LeadField::FirstName => d.first_name = v,
            LeadField::LastName => d.last_name = v,
            LeadField::Company => d.company = v,
            LeadField::Segment => d.segment = v,
            LeadField::SizeTier => d.size_tier = v,
            LeadField::Tenure => d.tenure = v,
            LeadField::SponsorshipHistory => d.sponsorship_history = v,
            LeadField::HistoryType => d.history_type = v,
            LeadField::Event => d.event = v,
            LeadField::PackageIdeal => d.package_ideal = v,
            LeadField::PackageOption2 => d.package_option2 = v,
            LeadField::PackageOption3 => d.package_option3 = v,
            LeadField::Owner => d.owner = v,
            LeadField::Status => d.status = Status::resolve(value),
            LeadField::LastContact => d.last_contact = parse_date(value)?,
            LeadField::Contact => d.contact = v,
            LeadField::Notes => d.notes = v,
        }
        Ok(())
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, ServerError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|e| ServerError::BadRequest(format!("Data inválida '{value}': {e}")))
}

/// Build a draft from submitted fields. Missing controls count as empty.
/// The result still needs `LeadDraft::normalized`.
pub fn draft_from_form(form: &HashMap<String, String>) -> Result<LeadDraft, ServerError> {
    let mut draft = LeadDraft::default();
    for field in LeadField::ALL {
        let value = form.get(field.name()).map(String::as_str).unwrap_or("");
        field.write(&mut draft, value)?;
    }
    Ok(draft)
}

// Filter bar control names.
pub const FILTER_QUERY: &str = "q";
pub const FILTER_STATUS: &str = "status";
pub const FILTER_OWNER: &str = "owner";
pub const FILTER_SEGMENT: &str = "segment";

pub fn filter_from_query(params: &HashMap<String, String>) -> LeadFilter {
    let get = |k: &str| params.get(k).cloned().unwrap_or_default();
    LeadFilter {
        query: get(FILTER_QUERY),
        status: get(FILTER_STATUS),
        owner: get(FILTER_OWNER),
        segment: get(FILTER_SEGMENT),
    }
}

/// Query string carrying the active filters (empty ones left out).
pub fn filter_to_query(filter: &LeadFilter) -> String {
    let mut out = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in [
        (FILTER_QUERY, &filter.query),
        (FILTER_STATUS, &filter.status),
        (FILTER_OWNER, &filter.owner),
        (FILTER_SEGMENT, &filter.segment),
    ] {
        if !v.trim().is_empty() {
            out.append_pair(k, v);
        }
    }
    out.finish()
}
