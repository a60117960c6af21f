// src/domain/options.rs
//
// Fixed choices for the categorical lead attributes, in the order the
// selectors show them.

use crate::domain::status::canon;

pub const SEGMENTS: &[&str] = &["INDUSTRIA", "COMERCIO", "PRESTADOR SERVICO"];

pub const SIZE_TIERS: &[&str] = &["POTENTE", "GRANDE", "MEDIO", "BAIXO"];

pub const TENURES: &[&str] = &[
    "MENOS DE 1 ANO",
    "ENTRE 1 E 3 ANOS",
    "ENTRE 3 E 5 ANOS",
    "ENTRE 5 E 7 ANOS",
    "ACIMA DE 7 ANOS",
    "NAO ASSOCIADO",
];

pub const SPONSORSHIP_HISTORY: &[&str] = &[
    "NUNCA",
    "ALGUMAS VEZES",
    "RECORRENTE",
    "EVENTO ANTERIOR",
    "OUTRO EVENTO",
];

pub const HISTORY_TYPES: &[&str] = &["ASSOCIADO", "ACIA NETWORKING", "BENEFICIOS"];

pub const EVENTS: &[&str] = &[
    "TODOS",
    "65 ANOS",
    "JANTAR EMPRESARIO",
    "EXPOEMPRESAS",
    "65 ANOS + JANTAR",
    "JANTAR + EXPO",
    "65 ANOS + EXPO",
];

pub const OWNERS: &[&str] = &[
    "BRUNA", "GERSON", "JULIAO", "JAMES", "ADOLPHO", "LEONARDO", "MONICA", "THAIS",
];

pub const PACKAGE_TIERS: &[&str] = &[
    "NAMING RIGHTS",
    "DIAMANTE",
    "SAFIRA",
    "OURO",
    "EXPOSITORA",
    "CONVIDADA",
];

/// Match `value` against `choices` ignoring case and accents.
///
/// Empty input is a valid "no selection" and maps to `Some("")`.
/// Returns `None` when the value is not one of the choices.
pub fn pick(choices: &[&'static str], value: &str) -> Option<&'static str> {
    let key = canon(value);
    if key.is_empty() {
        return Some("");
    }
    choices.iter().copied().find(|c| canon(c) == key)
}
