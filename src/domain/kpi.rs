// src/domain/kpi.rs

use crate::domain::lead::Lead;
use crate::domain::status::Status;
use chrono::{DateTime, TimeZone};

/// Counters shown above the lead table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kpis {
    pub total: usize,
    pub hot: usize,
    pub lost: usize,
    pub touched_today: usize,
}

/// Aggregates over an already-filtered list.
///
/// "Today" is the calendar day of `now` in `now`'s own time zone, so the
/// server passes `Local::now()` and tests can pin any zone.
pub fn compute_kpis<'a, Tz, I>(leads: I, now: &DateTime<Tz>) -> Kpis
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a Lead>,
{
    let tz = now.timezone();
    let today = now.date_naive();

    leads.into_iter().fold(Kpis::default(), |mut k, lead| {
        let status = lead.status();
        k.total += 1;
        if status.is_hot() {
            k.hot += 1;
        }
        if status == Status::Perdido {
            k.lost += 1;
        }
        if lead.last_touched().with_timezone(&tz).date_naive() == today {
            k.touched_today += 1;
        }
        k
    })
}
