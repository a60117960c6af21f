// src/domain/seed.rs

use crate::domain::lead::LeadDraft;
use crate::domain::status::Status;

struct DemoLead {
    first: &'static str,
    last: &'static str,
    company: &'static str,
    segment: &'static str,
    size_tier: &'static str,
    tenure: &'static str,
    sponsorship_history: &'static str,
    history_type: &'static str,
    event: &'static str,
    packages: [&'static str; 3],
    owner: &'static str,
    status: Status,
}

const DEMO: [DemoLead; 3] = [
    DemoLead {
        first: "Joao",
        last: "Vitor",
        company: "ACIA",
        segment: "COMERCIO",
        size_tier: "MEDIO",
        tenure: "ENTRE 1 E 3 ANOS",
        sponsorship_history: "ALGUMAS VEZES",
        history_type: "ASSOCIADO",
        event: "65 ANOS",
        packages: ["OURO", "SAFIRA", "EXPOSITORA"],
        owner: "BRUNA",
        status: Status::Pendente,
    },
    DemoLead {
        first: "Mirelli",
        last: "Basso",
        company: "ExpoCo",
        segment: "INDUSTRIA",
        size_tier: "GRANDE",
        tenure: "ACIMA DE 7 ANOS",
        sponsorship_history: "RECORRENTE",
        history_type: "BENEFICIOS",
        event: "JANTAR + EXPO",
        packages: ["DIAMANTE", "OURO", "SAFIRA"],
        owner: "LEONARDO",
        status: Status::Avancado,
    },
    DemoLead {
        first: "Ana",
        last: "Lima",
        company: "ServPro",
        segment: "PRESTADOR SERVICO",
        size_tier: "BAIXO",
        tenure: "MENOS DE 1 ANO",
        sponsorship_history: "NUNCA",
        history_type: "ACIA NETWORKING",
        event: "TODOS",
        packages: ["CONVIDADA", "EXPOSITORA", "OURO"],
        owner: "JAMES",
        status: Status::StandBy,
    },
];

/// The three sample leads inserted by "Criar demo".
pub fn demo_drafts() -> Vec<LeadDraft> {
    DEMO.iter()
        .map(|d| LeadDraft {
            first_name: d.first.into(),
            last_name: d.last.into(),
            company: d.company.into(),
            segment: d.segment.into(),
            size_tier: d.size_tier.into(),
            tenure: d.tenure.into(),
            sponsorship_history: d.sponsorship_history.into(),
            history_type: d.history_type.into(),
            event: d.event.into(),
            package_ideal: d.packages[0].into(),
            package_option2: d.packages[1].into(),
            package_option3: d.packages[2].into(),
            owner: d.owner.into(),
            status: d.status,
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_drafts_are_valid() {
        let drafts = demo_drafts();
        assert_eq!(drafts.len(), 3);
        for d in drafts {
            let normalized = d.clone().normalized().expect("demo lead should validate");
            assert_eq!(normalized, d);
        }
    }
}
