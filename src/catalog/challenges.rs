use crate::domain::{ChallengeKind, ChallengeTemplate, Difficulty};

pub const LEISURE_CATEGORY: &str = "Lazer";
pub const DEBT_CATEGORY: &str = "Dívidas";

/// Pool the weekly draw picks from.
pub static CHALLENGE_TEMPLATES: &[ChallengeTemplate] = &[
    ChallengeTemplate {
        kind: ChallengeKind::Save200,
        title: "Economize R$ 200",
        description: "Termine a semana com pelo menos R$ 200 a mais do que gastou",
        difficulty: Difficulty::Medium,
        xp_reward: 150,
        target: 200.0,
        icon: "💰",
        color: "#22c55e",
    },
    ChallengeTemplate {
        kind: ChallengeKind::Streak7,
        title: "Semana Completa",
        description: "Registre pelo menos uma transação em cada dia da semana",
        difficulty: Difficulty::Hard,
        xp_reward: 200,
        target: 7.0,
        icon: "🔥",
        color: "#f97316",
    },
    ChallengeTemplate {
        kind: ChallengeKind::CategoryLimit,
        title: "Lazer sob Controle",
        description: "Gaste no máximo R$ 100 com Lazer nesta semana",
        difficulty: Difficulty::Easy,
        xp_reward: 100,
        target: 100.0,
        icon: "🎮",
        color: "#3b82f6",
    },
    ChallengeTemplate {
        kind: ChallengeKind::Invest,
        title: "Hora de Investir",
        description: "Invista pelo menos R$ 100 nesta semana",
        difficulty: Difficulty::Medium,
        xp_reward: 175,
        target: 100.0,
        icon: "📈",
        color: "#8b5cf6",
    },
    ChallengeTemplate {
        kind: ChallengeKind::NoDebt,
        title: "Semana Sem Dívidas",
        description: "Não registre nenhum gasto com Dívidas nesta semana",
        difficulty: Difficulty::Epic,
        xp_reward: 250,
        target: 1.0,
        icon: "🛡️",
        color: "#ef4444",
    },
];

pub fn template(kind: ChallengeKind) -> &'static ChallengeTemplate {
    match kind {
        ChallengeKind::Save200 => &CHALLENGE_TEMPLATES[0],
        ChallengeKind::Streak7 => &CHALLENGE_TEMPLATES[1],
        ChallengeKind::CategoryLimit => &CHALLENGE_TEMPLATES[2],
        ChallengeKind::Invest => &CHALLENGE_TEMPLATES[3],
        ChallengeKind::NoDebt => &CHALLENGE_TEMPLATES[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_lookup_matches_pool_entry() {
        for kind in ChallengeKind::ALL {
            assert_eq!(template(kind).kind, kind);
        }
    }
}
