//! Quest definitions: objectives and rewards.
//!
//! Quests are passive data. They are authored through the setters below (or
//! loaded from content files) and only interact with a character when the
//! reward is claimed.

use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemHandle;

/// What completing a quest pays out.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RewardKind {
    #[default]
    Default,
    Experience,
    Item,
}

/// How an objective is cleared.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ClearCondition {
    #[default]
    Default,
    Slay,
    Collect,
    Travel,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Reward {
    pub kind: RewardKind,
    pub item: Option<ItemHandle>,
    pub experience: f32,
}

impl Reward {
    pub fn experience(amount: f32) -> Self {
        Self {
            kind: RewardKind::Experience,
            item: None,
            experience: amount,
        }
    }

    pub fn item(item: ItemHandle) -> Self {
        Self {
            kind: RewardKind::Item,
            item: Some(item),
            experience: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Objective {
    pub clear: ClearCondition,
    /// Enemy template to slay, by name.
    pub enemy: Option<String>,
    /// Item to collect.
    pub item: Option<ItemHandle>,
    pub description: String,
    pub required: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Quest {
    pub name: String,
    pub description: String,
    pub reward: Reward,
    pub objectives: Vec<Objective>,
}

impl Quest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn set_details(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.name = name.into();
        self.description = description.into();
    }

    /// Resizes the objective list, filling new slots with default objectives.
    pub fn set_objective_count(&mut self, count: usize) {
        self.objectives.resize_with(count, Objective::default);
    }

    /// Fills in objective `index`.
    ///
    /// The clear condition follows from the targets: an enemy makes it a slay
    /// objective, otherwise an item makes it a collect objective. An existing
    /// condition is kept when neither target is given.
    pub fn set_objective(
        &mut self,
        index: usize,
        enemy: Option<String>,
        item: Option<ItemHandle>,
        description: impl Into<String>,
        required: u32,
    ) -> Result<&Objective, QuestError> {
        let count = self.objectives.len();
        let objective = self
            .objectives
            .get_mut(index)
            .ok_or(QuestError::ObjectiveOutOfRange { index, count })?;

        objective.clear = match (&enemy, &item) {
            (Some(_), _) => ClearCondition::Slay,
            (None, Some(_)) => ClearCondition::Collect,
            (None, None) => objective.clear,
        };
        objective.enemy = enemy;
        objective.item = item;
        objective.description = description.into();
        objective.required = required;

        Ok(objective)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("objective {index} does not exist (quest has {count})")]
    ObjectiveOutOfRange { index: usize, count: usize },

    #[error("unknown quest '{0}'")]
    UnknownQuest(String),
}

impl GameError for QuestError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ObjectiveOutOfRange { .. } => "objective_out_of_range",
            Self::UnknownQuest(_) => "unknown_quest",
        }
    }
}
