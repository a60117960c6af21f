// src/domain/lead.rs

use crate::domain::options::{
    pick, EVENTS, HISTORY_TYPES, OWNERS, PACKAGE_TIERS, SEGMENTS, SIZE_TIERS,
    SPONSORSHIP_HISTORY, TENURES,
};
use crate::domain::status::Status;
use crate::errors::ServerError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Everything a user can type or pick for a lead.
///
/// Feedback and next action are deliberately absent: they come from `status`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadDraft {
    pub first_name: String,
    pub last_name: String,
    pub company: String,

    // Categorical attributes (see domain::options)
    pub segment: String,
    pub size_tier: String,
    pub tenure: String,
    pub sponsorship_history: String,
    pub history_type: String,
    pub event: String,
    pub package_ideal: String,
    pub package_option2: String,
    pub package_option3: String,
    pub owner: String,

    pub status: Status,

    pub contact: String,
    pub notes: String,
    pub last_contact: Option<NaiveDate>,
}

impl LeadDraft {
    /// "First Last", trimmed; empty when both parts are empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Trims free text, snaps categorical values to their canonical spelling
    /// and checks that the lead can be identified by name or company.
    pub fn normalized(self) -> Result<Self, ServerError> {
        let draft = LeadDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            company: self.company.trim().to_string(),
            segment: choose("segmento", SEGMENTS, &self.segment)?,
            size_tier: choose("porte", SIZE_TIERS, &self.size_tier)?,
            tenure: choose("tempo de associação", TENURES, &self.tenure)?,
            sponsorship_history: choose(
                "histórico de patrocínio",
                SPONSORSHIP_HISTORY,
                &self.sponsorship_history,
            )?,
            history_type: choose("histórico", HISTORY_TYPES, &self.history_type)?,
            event: choose("evento", EVENTS, &self.event)?,
            package_ideal: choose("cota ideal", PACKAGE_TIERS, &self.package_ideal)?,
            package_option2: choose("cota opção 2", PACKAGE_TIERS, &self.package_option2)?,
            package_option3: choose("cota opção 3", PACKAGE_TIERS, &self.package_option3)?,
            owner: choose("responsável", OWNERS, &self.owner)?,
            status: self.status,
            contact: self.contact.trim().to_string(),
            notes: self.notes.trim().to_string(),
            last_contact: self.last_contact,
        };

        if draft.company.is_empty() && draft.full_name().is_empty() {
            return Err(ServerError::Validation("Preencha nome ou empresa.".into()));
        }

        Ok(draft)
    }
}

fn choose(field: &str, choices: &[&'static str], value: &str) -> Result<String, ServerError> {
    pick(choices, value)
        .map(str::to_string)
        .ok_or_else(|| ServerError::BadRequest(format!("Valor inválido para {field}: {value}")))
}

/// A stored lead.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: String,
    pub details: LeadDraft,
    pub created_at: DateTime<Utc>,
    /// Missing only for rows written before the column was filled.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        self.details.full_name()
    }

    pub fn status(&self) -> Status {
        self.details.status
    }

    /// Most recent write: update timestamp, else creation timestamp.
    pub fn last_touched(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Whole days since the last contact (or since creation when no contact
    /// date was recorded). A contact date counts from midnight in `now`'s
    /// time zone.
    pub fn lead_time_days<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> i64 {
        let base = match self.details.last_contact {
            Some(day) => {
                let midnight = day.and_time(NaiveTime::MIN);
                midnight
                    .and_local_timezone(now.timezone())
                    .earliest()
                    .map(|t| t.with_timezone(&Utc))
                    .unwrap_or_else(|| midnight.and_utc())
            }
            None => self.created_at,
        };
        (now.with_timezone(&Utc) - base).num_days().abs()
    }

    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// First characters of an id, as shown in notices.
pub fn short_id(id: &str) -> &str {
    let end = id.char_indices().nth(6).map(|(i, _)| i).unwrap_or(id.len());
    &id[..end]
}
