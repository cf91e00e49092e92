//! Quest catalog loader.

use std::path::Path;

use rpg_core::Quest;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Quest catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestCatalogFile {
    pub quests: Vec<Quest>,
}

/// Loader for quest catalogs from RON files.
pub struct QuestLoader;

impl QuestLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Quest>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Quest>> {
        let file: QuestCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest catalog RON: {}", e))?;

        for quest in &file.quests {
            if quest.name.trim().is_empty() {
                anyhow::bail!("Quest catalog contains a quest without a name");
            }
        }
        Ok(file.quests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpg_core::{ClearCondition, ItemHandle, RewardKind};

    #[test]
    fn parses_quests_with_defaults() {
        let quests = QuestLoader::parse(
            r#"(
    quests: [
        (
            name: "Wolf Problem",
            description: "Thin out the pack.",
            reward: (kind: Experience, experience: 2500.0),
            objectives: [
                (clear: Slay, enemy: Some("wolf"), description: "Slay wolves", required: 5),
            ],
        ),
        (
            name: "Lost Blade",
            reward: (kind: Item, item: Some(2)),
        ),
    ],
)"#,
        )
        .unwrap();

        assert_eq!(quests.len(), 2);
        assert_eq!(quests[0].reward.kind, RewardKind::Experience);
        assert_eq!(quests[0].objectives[0].clear, ClearCondition::Slay);
        assert_eq!(quests[0].objectives[0].item, None);
        assert_eq!(quests[1].reward.item, Some(ItemHandle(2)));
        assert!(quests[1].objectives.is_empty());
        assert_eq!(quests[1].description, "");
    }

    #[test]
    fn nameless_quests_are_rejected() {
        let err = QuestLoader::parse(r#"(quests: [(name: "  ")])"#).unwrap_err();
        assert!(err.to_string().contains("without a name"));
    }
}
