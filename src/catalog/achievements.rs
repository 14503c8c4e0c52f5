use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::{
    Achievement, AchievementCategory as Category, AchievementRule as Rule,
    ExternalRequirement as External, Rarity,
};

pub const INVESTMENT_CATEGORY: &str = "Investimentos";

/// Every achievement, in display order.
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_transaction",
        name: "Primeiro Passo",
        description: "Registre sua primeira transação",
        icon: "🎯",
        category: Category::Progress,
        rarity: Rarity::Common,
        xp_reward: 50,
        rule: Rule::TransactionCount { min: 1 },
    },
    Achievement {
        id: "saver_beginner",
        name: "Poupador Iniciante",
        description: "Acumule R$ 100 em economias",
        icon: "🐷",
        category: Category::Economic,
        rarity: Rarity::Common,
        xp_reward: 100,
        rule: Rule::SavingsAtLeast { threshold: 100.0 },
    },
    Achievement {
        id: "saver_intermediate",
        name: "Poupador Intermediário",
        description: "Acumule R$ 1.000 em economias",
        icon: "💰",
        category: Category::Economic,
        rarity: Rarity::Rare,
        xp_reward: 250,
        rule: Rule::SavingsAtLeast { threshold: 1_000.0 },
    },
    Achievement {
        id: "saver_advanced",
        name: "Poupador Avançado",
        description: "Acumule R$ 10.000 em economias",
        icon: "💎",
        category: Category::Economic,
        rarity: Rarity::Epic,
        xp_reward: 1_000,
        rule: Rule::SavingsAtLeast {
            threshold: 10_000.0,
        },
    },
    Achievement {
        id: "investor",
        name: "Investidor",
        description: "Registre seu primeiro investimento",
        icon: "📈",
        category: Category::Economic,
        rarity: Rarity::Rare,
        xp_reward: 200,
        rule: Rule::UsesCategory {
            category: INVESTMENT_CATEGORY,
        },
    },
    Achievement {
        id: "debt_free",
        name: "Livre de Dívidas",
        description: "Quite todas as suas dívidas",
        icon: "🕊️",
        category: Category::Economic,
        rarity: Rarity::Epic,
        xp_reward: 500,
        rule: Rule::External {
            requirement: External::DebtsSettled,
        },
    },
    Achievement {
        id: "streak_7",
        name: "Semana Consistente",
        description: "Mantenha uma sequência de 7 dias",
        icon: "🔥",
        category: Category::Consistency,
        rarity: Rarity::Common,
        xp_reward: 100,
        rule: Rule::External {
            requirement: External::StreakDays(7),
        },
    },
    Achievement {
        id: "streak_30",
        name: "Mês Dedicado",
        description: "Mantenha uma sequência de 30 dias",
        icon: "⚡",
        category: Category::Consistency,
        rarity: Rarity::Rare,
        xp_reward: 300,
        rule: Rule::External {
            requirement: External::StreakDays(30),
        },
    },
    Achievement {
        id: "streak_100",
        name: "Centenário",
        description: "Mantenha uma sequência de 100 dias",
        icon: "🏆",
        category: Category::Consistency,
        rarity: Rarity::Legendary,
        xp_reward: 1_000,
        rule: Rule::External {
            requirement: External::StreakDays(100),
        },
    },
    Achievement {
        id: "punctual",
        name: "Pontual",
        description: "Registre transações sempre no mesmo horário",
        icon: "⏰",
        category: Category::Consistency,
        rarity: Rarity::Rare,
        xp_reward: 150,
        rule: Rule::ConsistentHour {
            window: 7,
            tolerance_hours: 2.0,
        },
    },
    Achievement {
        id: "workaholic",
        name: "Workaholic",
        description: "Registre 100 transações em um único mês",
        icon: "💼",
        category: Category::Consistency,
        rarity: Rarity::Epic,
        xp_reward: 400,
        rule: Rule::MonthlyTransactions { min: 100 },
    },
    Achievement {
        id: "dreamer",
        name: "Sonhador",
        description: "Crie sua primeira meta",
        icon: "🌟",
        category: Category::Goals,
        rarity: Rarity::Common,
        xp_reward: 50,
        rule: Rule::External {
            requirement: External::GoalsCreated(1),
        },
    },
    Achievement {
        id: "achiever",
        name: "Realizador",
        description: "Complete sua primeira meta",
        icon: "✅",
        category: Category::Goals,
        rarity: Rarity::Rare,
        xp_reward: 200,
        rule: Rule::External {
            requirement: External::GoalsCompleted(1),
        },
    },
    Achievement {
        id: "ambitious",
        name: "Ambicioso",
        description: "Crie 5 metas",
        icon: "🚀",
        category: Category::Goals,
        rarity: Rarity::Rare,
        xp_reward: 150,
        rule: Rule::External {
            requirement: External::GoalsCreated(5),
        },
    },
    Achievement {
        id: "conqueror",
        name: "Conquistador",
        description: "Complete 10 metas",
        icon: "👑",
        category: Category::Goals,
        rarity: Rarity::Legendary,
        xp_reward: 1_000,
        rule: Rule::External {
            requirement: External::GoalsCompleted(10),
        },
    },
    Achievement {
        id: "level_up",
        name: "Subindo de Nível",
        description: "Alcance 1.000 XP",
        icon: "⬆️",
        category: Category::Progress,
        rarity: Rarity::Common,
        xp_reward: 100,
        rule: Rule::XpAtLeast { threshold: 1_000 },
    },
    Achievement {
        id: "xp_master",
        name: "Mestre do XP",
        description: "Alcance 10.000 XP",
        icon: "🧠",
        category: Category::Progress,
        rarity: Rarity::Epic,
        xp_reward: 500,
        rule: Rule::XpAtLeast { threshold: 10_000 },
    },
    Achievement {
        id: "financial_master",
        name: "Mestre Financeiro",
        description: "Alcance 15.000 XP e conquiste a liberdade",
        icon: "🎓",
        category: Category::Progress,
        rarity: Rarity::Legendary,
        xp_reward: 1_000,
        rule: Rule::XpAtLeast { threshold: 15_000 },
    },
    Achievement {
        id: "legend",
        name: "Lenda",
        description: "Alcance 50.000 XP",
        icon: "🌌",
        category: Category::Progress,
        rarity: Rarity::Legendary,
        xp_reward: 2_500,
        rule: Rule::XpAtLeast { threshold: 50_000 },
    },
    Achievement {
        id: "early_adopter",
        name: "Pioneiro",
        description: "Esteve entre os primeiros usuários",
        icon: "🌱",
        category: Category::Special,
        rarity: Rarity::Rare,
        xp_reward: 250,
        rule: Rule::External {
            requirement: External::EarlyAccount,
        },
    },
    Achievement {
        id: "evangelist",
        name: "Evangelista",
        description: "Indique 5 amigos",
        icon: "📣",
        category: Category::Special,
        rarity: Rarity::Epic,
        xp_reward: 500,
        rule: Rule::External {
            requirement: External::Referrals(5),
        },
    },
    Achievement {
        id: "perfectionist",
        name: "Perfeccionista",
        description: "Complete 10 missões sem falhar nenhuma",
        icon: "💯",
        category: Category::Special,
        rarity: Rarity::Epic,
        xp_reward: 500,
        rule: Rule::External {
            requirement: External::MissionsCompleted(10),
        },
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static Achievement>> =
    Lazy::new(|| ACHIEVEMENTS.iter().map(|entry| (entry.id, entry)).collect());

/// Looks up a catalog entry by id.
pub fn achievement(id: &str) -> Option<&'static Achievement> {
    BY_ID.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn lookup_resolves_known_and_rejects_unknown() {
        assert_eq!(achievement("legend").map(|a| a.xp_reward), Some(2_500));
        assert!(achievement("moonshot").is_none());
    }
}
