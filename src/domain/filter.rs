// src/domain/filter.rs

use crate::domain::lead::Lead;
use crate::domain::status::canon;

/// Board filters. An empty field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub query: String,
    pub status: String,
    pub owner: String,
    pub segment: String,
}

impl LeadFilter {
    pub fn is_empty(&self) -> bool {
        [&self.query, &self.status, &self.owner, &self.segment]
            .iter()
            .all(|v| v.trim().is_empty())
    }
}

// Canonicalized once per filter run instead of once per lead.
struct Criteria {
    query: String,
    status: String,
    owner: String,
    segment: String,
}

impl From<&LeadFilter> for Criteria {
    fn from(f: &LeadFilter) -> Self {
        Criteria {
            query: canon(&f.query),
            status: canon(&f.status),
            owner: canon(&f.owner),
            segment: canon(&f.segment),
        }
    }
}

impl Criteria {
    fn matches(&self, lead: &Lead) -> bool {
        let d = &lead.details;

        if !self.status.is_empty() && lead.status().key() != self.status {
            return false;
        }
        if !self.owner.is_empty() && canon(&d.owner) != self.owner {
            return false;
        }
        if !self.segment.is_empty() && canon(&d.segment) != self.segment {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }

        let haystack = canon(&format!(
            "{} {} {} {} {}",
            lead.full_name(),
            d.company,
            d.owner,
            d.event,
            d.segment
        ));
        haystack.contains(&self.query)
    }
}

/// Leads matching all active criteria, in input order.
pub fn filter_leads<'a>(leads: &'a [Lead], filter: &LeadFilter) -> Vec<&'a Lead> {
    if filter.is_empty() {
        return leads.iter().collect();
    }
    let criteria = Criteria::from(filter);
    leads.iter().filter(|l| criteria.matches(l)).collect()
}
