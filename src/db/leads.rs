// src/db/leads.rs
use crate::db::connection::Database;
use crate::domain::lead::{Lead, LeadDraft};
use crate::domain::status::Status;
use crate::errors::ServerError;
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::RngCore;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_LEADS: &str = r#"
    SELECT
        id,                    -- 0
        first_name,            -- 1
        last_name,             -- 2
        company,               -- 3
        segment,               -- 4
        size_tier,             -- 5
        tenure,                -- 6
        sponsorship_history,   -- 7
        history_type,          -- 8
        event,                 -- 9
        package_ideal,         -- 10
        package_option2,       -- 11
        package_option3,       -- 12
        owner,                 -- 13
        status,                -- 14
        status_key,            -- 15
        contact,               -- 16
        notes,                 -- 17
        last_contact,          -- 18
        created_at,            -- 19
        updated_at             -- 20
    FROM leads
"#;

/// 15 random bytes, url-safe base64 without padding: 20 characters.
fn generate_lead_id() -> String {
    let mut bytes = [0u8; 15];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn row_to_lead(row: &Row<'_>) -> rusqlite::Result<Lead> {
    let status_label: String = row.get(14)?;
    let status_key: String = row.get(15)?;

    // The stored feedback/next_action columns are never read back: the status
    // alone decides them.
    let status = Status::parse(&status_key)
        .or_else(|| Status::parse(&status_label))
        .unwrap_or_default();

    Ok(Lead {
        id: row.get(0)?,
        details: LeadDraft {
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            company: row.get(3)?,
            segment: row.get(4)?,
            size_tier: row.get(5)?,
            tenure: row.get(6)?,
            sponsorship_history: row.get(7)?,
            history_type: row.get(8)?,
            event: row.get(9)?,
            package_ideal: row.get(10)?,
            package_option2: row.get(11)?,
            package_option3: row.get(12)?,
            owner: row.get(13)?,
            status,
            contact: row.get(16)?,
            notes: row.get(17)?,
            last_contact: row.get(18)?,
        },
        created_at: row.get(19)?,
        updated_at: row.get(20)?,
    })
}

fn insert_with_conn(
    conn: &Connection,
    draft: &LeadDraft,
    now: DateTime<Utc>,
) -> Result<String, ServerError> {
    let id = generate_lead_id();
    let status = draft.status;

    conn.execute(
        r#"
        INSERT INTO leads (
            id, first_name, last_name, name, company,
            segment, size_tier, tenure, sponsorship_history, history_type, event,
            package_ideal, package_option2, package_option3, owner,
            status, status_key, feedback, next_action,
            last_contact, contact, notes,
            created_at, updated_at
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5,
            ?6, ?7, ?8, ?9, ?10, ?11,
            ?12, ?13, ?14, ?15,
            ?16, ?17, ?18, ?19,
            ?20, ?21, ?22,
            ?23, ?23
        )
        "#,
        params![
            id,
            draft.first_name,
            draft.last_name,
            draft.full_name(),
            draft.company,
            draft.segment,
            draft.size_tier,
            draft.tenure,
            draft.sponsorship_history,
            draft.history_type,
            draft.event,
            draft.package_ideal,
            draft.package_option2,
            draft.package_option3,
            draft.owner,
            status.label(),
            status.key(),
            status.feedback(),
            status.next_action(),
            draft.last_contact,
            draft.contact,
            draft.notes,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;

    Ok(id)
}

/// Creates a lead and returns its generated id.
pub fn insert_lead(db: &Database, draft: &LeadDraft, now: DateTime<Utc>) -> Result<String, ServerError> {
    db.with_conn(|conn| insert_with_conn(conn, draft, now))
}

/// Inserts several leads in one transaction; nothing is written if any insert fails.
pub fn insert_leads(
    db: &Database,
    drafts: &[LeadDraft],
    now: DateTime<Utc>,
) -> Result<Vec<String>, ServerError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(insert_with_conn(&tx, draft, now)?);
        }
        tx.commit()?;
        Ok(ids)
    })
}

/// Overwrites every user-editable field and refreshes `updated_at`.
/// `created_at` is kept.
pub fn update_lead(
    db: &Database,
    id: &str,
    draft: &LeadDraft,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    let status = draft.status;
    let changed = db.with_conn(|conn| {
        conn.execute(
            r#"
            UPDATE leads SET
                first_name = ?2,
                last_name = ?3,
                name = ?4,
                company = ?5,
                segment = ?6,
                size_tier = ?7,
                tenure = ?8,
                sponsorship_history = ?9,
                history_type = ?10,
                event = ?11,
                package_ideal = ?12,
                package_option2 = ?13,
                package_option3 = ?14,
                owner = ?15,
                status = ?16,
                status_key = ?17,
                feedback = ?18,
                next_action = ?19,
                last_contact = ?20,
                contact = ?21,
                notes = ?22,
                updated_at = ?23
            WHERE id = ?1
            "#,
            params![
                id,
                draft.first_name,
                draft.last_name,
                draft.full_name(),
                draft.company,
                draft.segment,
                draft.size_tier,
                draft.tenure,
                draft.sponsorship_history,
                draft.history_type,
                draft.event,
                draft.package_ideal,
                draft.package_option2,
                draft.package_option3,
                draft.owner,
                status.label(),
                status.key(),
                status.feedback(),
                status.next_action(),
                draft.last_contact,
                draft.contact,
                draft.notes,
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update lead failed: {e}")))
    })?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

/// Inline status change: status and its derived columns only.
pub fn set_lead_status(
    db: &Database,
    id: &str,
    status: Status,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    let changed = db.with_conn(|conn| {
        conn.execute(
            r#"
            UPDATE leads SET
                status = ?2,
                status_key = ?3,
                feedback = ?4,
                next_action = ?5,
                updated_at = ?6
            WHERE id = ?1
            "#,
            params![
                id,
                status.label(),
                status.key(),
                status.feedback(),
                status.next_action(),
                now
            ],
        )
        .map_err(|e| ServerError::DbError(format!("set status failed: {e}")))
    })?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_lead(db: &Database, id: &str) -> Result<(), ServerError> {
    let changed = db.with_conn(|conn| {
        conn.execute("DELETE FROM leads WHERE id = ?", params![id])
            .map_err(|e| ServerError::DbError(format!("delete lead failed: {e}")))
    })?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn get_lead(db: &Database, id: &str) -> Result<Option<Lead>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(&format!("{SELECT_LEADS} WHERE id = ?"), params![id], row_to_lead)
            .optional()
            .map_err(|e| ServerError::DbError(format!("load lead failed: {e}")))
    })
}

/// Every lead, most recently touched first.
pub fn list_leads(db: &Database) -> Result<Vec<Lead>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&format!(
                "{SELECT_LEADS} ORDER BY coalesce(updated_at, created_at) DESC, rowid DESC"
            ))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_lead)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}
