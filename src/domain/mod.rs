pub mod filter;
pub mod kpi;
pub mod lead;
pub mod options;
pub mod seed;
pub mod status;

pub use filter::{filter_leads, LeadFilter};
pub use kpi::{compute_kpis, Kpis};
pub use lead::{Lead, LeadDraft};
pub use status::{canon, status_rule, Status, StatusRule};
