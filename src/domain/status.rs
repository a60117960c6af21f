// src/domain/status.rs

use unicode_normalization::UnicodeNormalization;

/// Canonical form used for every status comparison and for text search:
/// trimmed, upper-cased, NFD-decomposed, with combining diacritical marks removed.
///
/// `canon("  Avançado ")` and `canon("AVANCADO")` both give `"AVANCADO"`.
pub fn canon(value: &str) -> String {
    let stripped: String = value
        .to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.trim().to_string()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Feedback and next action that go with a status (the 1-1-1 rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRule {
    pub feedback: &'static str,
    pub next_action: &'static str,
}

/// Pipeline stage of a lead.
///
/// Variant order is the order shown in selectors; the first one is the default
/// for new leads and the fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pendente,
    Avancado,
    EmNegociacao,
    Fechamento,
    Aprovado,
    StandBy,
    Perdido,
}

impl Status {
    pub const ALL: [Status; 7] = [
        Status::Pendente,
        Status::Avancado,
        Status::EmNegociacao,
        Status::Fechamento,
        Status::Aprovado,
        Status::StandBy,
        Status::Perdido,
    ];

    /// Accented label shown to users and stored in the `status` column.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pendente => "PENDENTE",
            Status::Avancado => "AVANÇADO",
            Status::EmNegociacao => "EM NEGOCIAÇÃO",
            Status::Fechamento => "FECHAMENTO",
            Status::Aprovado => "APROVADO",
            Status::StandBy => "STAND BY",
            Status::Perdido => "PERDIDO",
        }
    }

    /// Canonical key; always equal to `canon(self.label())`.
    pub fn key(&self) -> &'static str {
        match self {
            Status::Pendente => "PENDENTE",
            Status::Avancado => "AVANCADO",
            Status::EmNegociacao => "EM NEGOCIACAO",
            Status::Fechamento => "FECHAMENTO",
            Status::Aprovado => "APROVADO",
            Status::StandBy => "STAND BY",
            Status::Perdido => "PERDIDO",
        }
    }

    pub fn rule(&self) -> StatusRule {
        let (feedback, next_action) = match self {
            Status::Pendente => ("1º CONTATO + PITCH", "ENVIAR PROPOSTA"),
            Status::Avancado => ("CLIENTE INTERESSADO", "NEGOCIAR/FECHAR"),
            Status::EmNegociacao => ("NEGOCIANDO PROPOSTA", "ENVIAR CONTRATO"),
            Status::Fechamento => ("CONTRATO ENVIADO", "NEGÓCIO FECHADO"),
            Status::Aprovado => ("PAGAMENTO/CONTRATO", "CONFIRMAR PAGTO."),
            Status::StandBy => ("SEM INTERESSE", "NOVO CONTATO 15 DIAS"),
            Status::Perdido => ("NÃO APROVADO", "NEGÓCIO PERDIDO"),
        };
        StatusRule {
            feedback,
            next_action,
        }
    }

    pub fn feedback(&self) -> &'static str {
        self.rule().feedback
    }

    pub fn next_action(&self) -> &'static str {
        self.rule().next_action
    }

    /// Active pipeline stage (neither pending nor terminal).
    pub fn is_hot(&self) -> bool {
        matches!(
            self,
            Status::Avancado | Status::EmNegociacao | Status::Fechamento | Status::Aprovado
        )
    }

    /// Bootstrap icon used by the status badge.
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Pendente => "bi-dot",
            Status::Avancado => "bi-rocket-takeoff",
            Status::EmNegociacao => "bi-chat-left-dots",
            Status::Fechamento => "bi-file-earmark-text",
            Status::Aprovado => "bi-check2-circle",
            Status::StandBy => "bi-pause-circle",
            Status::Perdido => "bi-x-circle",
        }
    }

    /// Exact lookup by label or key, ignoring case and accents.
    pub fn parse(value: &str) -> Option<Status> {
        let key = canon(value);
        Status::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Total lookup: unknown or empty values resolve to `Pendente`.
    pub fn resolve(value: &str) -> Status {
        Status::parse(value).unwrap_or_default()
    }
}

/// Feedback / next action for any status text. Never fails: unrecognized
/// values get the PENDENTE rule.
pub fn status_rule(value: &str) -> StatusRule {
    Status::resolve(value).rule()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_strips_accents_and_case() {
        assert_eq!(canon("Avançado"), "AVANCADO");
        assert_eq!(canon("AVANCADO"), "AVANCADO");
        assert_eq!(canon("  em negociação "), "EM NEGOCIACAO");
        assert_eq!(canon("João"), "JOAO");
        assert_eq!(canon(""), "");
    }

    #[test]
    fn canon_is_idempotent() {
        for raw in [
            "Avançado",
            "  stand by",
            "NÃO APROVADO",
            "1º contato",
            "Ça va",
            "perdido \u{0301}",
            "\u{0301} aprovado",
        ] {
            let once = canon(raw);
            assert_eq!(canon(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn keys_are_canonical_labels() {
        for status in Status::ALL {
            assert_eq!(status.key(), canon(status.label()));
        }
    }

    #[test]
    fn rule_table_matches_statuses() {
        assert_eq!(
            status_rule("PENDENTE"),
            StatusRule {
                feedback: "1º CONTATO + PITCH",
                next_action: "ENVIAR PROPOSTA"
            }
        );
        assert_eq!(status_rule("avançado").feedback, "CLIENTE INTERESSADO");
        assert_eq!(status_rule("AVANCADO").next_action, "NEGOCIAR/FECHAR");
        assert_eq!(status_rule("Em Negociação").next_action, "ENVIAR CONTRATO");
        assert_eq!(status_rule("FECHAMENTO").next_action, "NEGÓCIO FECHADO");
        assert_eq!(status_rule("aprovado").next_action, "CONFIRMAR PAGTO.");
        assert_eq!(status_rule("stand by").next_action, "NOVO CONTATO 15 DIAS");
        assert_eq!(status_rule("PERDIDO").feedback, "NÃO APROVADO");
    }

    #[test]
    fn unknown_status_falls_back_to_pendente() {
        let rule = status_rule("garbage");
        assert_eq!(rule.feedback, "1º CONTATO + PITCH");
        assert_eq!(rule.next_action, "ENVIAR PROPOSTA");
        assert_eq!(Status::resolve(""), Status::Pendente);
        assert_eq!(Status::parse("garbage"), None);
    }

    #[test]
    fn stray_mark_after_space_still_resolves() {
        assert_eq!(canon("perdido \u{0301}"), "PERDIDO");
        assert_eq!(Status::resolve("perdido \u{0301}"), Status::Perdido);
    }

    #[test]
    fn every_rule_is_non_empty() {
        for status in Status::ALL {
            assert!(!status.feedback().is_empty());
            assert!(!status.next_action().is_empty());
        }
    }

    #[test]
    fn hot_statuses() {
        let hot: Vec<_> = Status::ALL.into_iter().filter(Status::is_hot).collect();
        assert_eq!(
            hot,
            vec![
                Status::Avancado,
                Status::EmNegociacao,
                Status::Fechamento,
                Status::Aprovado
            ]
        );
    }
}
