use serde::Serialize;

use super::common::Displayable;

/// One rung of the educational ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalLevel {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub min_xp: u64,
    pub concepts: &'static [&'static str],
    pub unlocks: &'static [&'static str],
}

impl Displayable for EducationalLevel {
    fn display_label(&self) -> String {
        format!("Level {} - {} ({} XP)", self.id, self.name, self.min_xp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    ShortVideo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub title: &'static str,
    pub minutes: u32,
}

/// Learning material attached to a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    pub level_id: u32,
    pub items: &'static [ContentItem],
}

impl LevelContent {
    pub fn articles(&self) -> impl Iterator<Item = &ContentItem> {
        self.items
            .iter()
            .filter(|item| item.kind == ContentKind::Article)
    }

    pub fn videos(&self) -> impl Iterator<Item = &ContentItem> {
        self.items
            .iter()
            .filter(|item| item.kind == ContentKind::ShortVideo)
    }
}
