use crate::domain::{ContentItem, ContentKind, EducationalLevel, LevelContent};

/// The ladder, ascending by `min_xp`.
pub static LEVELS: &[EducationalLevel] = &[
    EducationalLevel {
        id: 0,
        name: "Primeiro Dia",
        description: "Você deu o primeiro passo rumo à organização financeira",
        min_xp: 0,
        concepts: &["Receitas e despesas", "Registro diário"],
        unlocks: &["Painel básico", "Registro de transações"],
    },
    EducationalLevel {
        id: 1,
        name: "Consciência",
        description: "Você entende para onde vai o seu dinheiro",
        min_xp: 1_000,
        concepts: &["Orçamento mensal", "Gastos essenciais e supérfluos"],
        unlocks: &["Relatórios por categoria", "Desafios semanais"],
    },
    EducationalLevel {
        id: 2,
        name: "Organização",
        description: "Suas finanças têm estrutura e rotina",
        min_xp: 2_500,
        concepts: &["Reserva de emergência", "Regra 50/30/20"],
        unlocks: &["Metas financeiras", "Alertas de orçamento"],
    },
    EducationalLevel {
        id: 3,
        name: "Planejamento",
        description: "Você pensa no médio e no longo prazo",
        min_xp: 5_000,
        concepts: &["Juros compostos", "Planejamento de longo prazo"],
        unlocks: &["Simulador de metas", "Projeções de saldo"],
    },
    EducationalLevel {
        id: 4,
        name: "Investidor",
        description: "Seu dinheiro trabalha para você",
        min_xp: 10_000,
        concepts: &["Renda fixa", "Diversificação", "Perfil de risco"],
        unlocks: &["Carteira de investimentos", "Comparador de rendimentos"],
    },
    EducationalLevel {
        id: 5,
        name: "Liberdade",
        description: "Você alcançou a independência nas suas decisões financeiras",
        min_xp: 15_000,
        concepts: &["Independência financeira", "Renda passiva"],
        unlocks: &["Modo mentor", "Conteúdo avançado"],
    },
];

const fn article(title: &'static str, minutes: u32) -> ContentItem {
    ContentItem {
        kind: ContentKind::Article,
        title,
        minutes,
    }
}

const fn video(title: &'static str, minutes: u32) -> ContentItem {
    ContentItem {
        kind: ContentKind::ShortVideo,
        title,
        minutes,
    }
}

/// Learning material per level. Index 0 doubles as the fallback bundle.
pub static LEVEL_CONTENT: &[LevelContent] = &[
    LevelContent {
        level_id: 0,
        items: &[
            article("Por que anotar cada gasto muda tudo", 4),
            article("Receitas e despesas: o básico que ninguém ensina", 5),
            video("Seu primeiro registro em 60 segundos", 1),
        ],
    },
    LevelContent {
        level_id: 1,
        items: &[
            article("Como montar seu primeiro orçamento", 6),
            article("Gastos invisíveis: onde o dinheiro escapa", 5),
            video("Essencial ou supérfluo?", 2),
        ],
    },
    LevelContent {
        level_id: 2,
        items: &[
            article("Reserva de emergência: quanto e onde guardar", 7),
            article("A regra 50/30/20 na prática", 5),
            video("Organize suas contas em 3 passos", 2),
        ],
    },
    LevelContent {
        level_id: 3,
        items: &[
            article("Juros compostos: o oitavo milagre", 8),
            article("Planejando metas de longo prazo", 6),
            video("Quanto vale começar cedo?", 2),
        ],
    },
    LevelContent {
        level_id: 4,
        items: &[
            article("Renda fixa para iniciantes", 8),
            article("Diversificação sem complicação", 7),
            video("Descubra seu perfil de investidor", 3),
            video("Tesouro Direto em 2 minutos", 2),
        ],
    },
    LevelContent {
        level_id: 5,
        items: &[
            article("O que é independência financeira", 9),
            article("Construindo fontes de renda passiva", 8),
            video("Como manter a liberdade conquistada", 3),
        ],
    },
];
