//! Interactive character session driven by line input.
//!
//! A [`Session`] owns one [`Character`] together with the content it was
//! built from. Input lines are parsed by [`InputHandler`], applied through
//! [`Character::dispatch`], and answered with a status line in the configured
//! [`StatusFormat`].

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use rpg_core::{
    ActionError, ActionOutcome, Character, CharacterStatus, ErrorSeverity, GameConfig, GameError,
    InputAction, ItemCatalog, ItemOracle, Quest, QuestError, RewardKind,
};

use crate::config::{ClientConfig, StatusFormat};
use crate::input::{Command, InputError, InputHandler, help_text};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error("reward for '{0}' was already claimed")]
    AlreadyClaimed(String),

    #[error("failed to encode status: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Input(err) => err.severity(),
            Self::Action(err) => err.severity(),
            Self::Quest(err) => err.severity(),
            Self::AlreadyClaimed(_) => ErrorSeverity::Recoverable,
            Self::Encode(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(err) => err.error_code(),
            Self::Action(err) => err.error_code(),
            Self::Quest(err) => err.error_code(),
            Self::AlreadyClaimed(_) => "already_claimed",
            Self::Encode(_) => "status_encode",
        }
    }
}

/// Result of handling one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Keep reading; print the text if any.
    Continue(Option<String>),
    Quit,
}

/// Counters reported when the session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub lines: usize,
    pub actions: usize,
    pub errors: usize,
    pub levels_gained: u32,
    pub status: CharacterStatus,
}

pub struct Session {
    character: Character,
    config: GameConfig,
    items: ItemCatalog,
    quests: Vec<Quest>,
    claimed: BTreeSet<String>,
    status_format: StatusFormat,
    actions: usize,
    errors: usize,
    levels_gained: u32,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn is_claimed(&self, quest: &str) -> bool {
        self.claimed.contains(&quest.to_lowercase())
    }

    /// Parses and applies one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Step, SessionError> {
        let command = InputHandler::new(&self.items).parse_line(line)?;

        let text = match command {
            Command::None => return Ok(Step::Continue(None)),
            Command::Quit => return Ok(Step::Quit),
            Command::Help => help_text(),
            Command::Status => self.render_status()?,
            Command::Inventory => self.render_inventory(),
            Command::Quests => self.render_quests(),
            Command::Claim(name) => {
                let (quest, action) = self.claim(&name)?;
                self.apply(&action)?;
                self.claimed.insert(quest.to_lowercase());
                self.render_status()?
            }
            Command::Submit(action) => {
                self.apply(&action)?;
                self.render_status()?
            }
        };

        Ok(Step::Continue(Some(text)))
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Rejected lines are reported as `error: ...` and do not end the session.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut count = 0;

        tracing::info!("Session started for {}", self.character.name);

        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            count += 1;
            let reply = match self.handle_line(&line) {
                Ok(Step::Quit) => break,
                Ok(Step::Continue(reply)) => reply,
                Err(err) => {
                    self.errors += 1;
                    tracing::warn!(
                        code = err.error_code(),
                        severity = %err.severity(),
                        line = count,
                        "Rejected input: {}",
                        err
                    );
                    Some(format!("error: {err}"))
                }
            };

            if let Some(text) = reply {
                writer
                    .write_all(format!("{text}\n").as_bytes())
                    .await
                    .context("Failed to write output")?;
            }
        }

        writer.flush().await.context("Failed to flush output")?;

        let summary = SessionSummary {
            lines: count,
            actions: self.actions,
            errors: self.errors,
            levels_gained: self.levels_gained,
            status: self.character.status(),
        };
        tracing::info!(
            lines = summary.lines,
            actions = summary.actions,
            errors = summary.errors,
            "Session ended at level {}",
            summary.status.level
        );
        Ok(summary)
    }

    fn apply(&mut self, action: &InputAction) -> Result<ActionOutcome, SessionError> {
        let outcome = self
            .character
            .dispatch(action, &self.config, &self.items)?;
        self.actions += 1;

        tracing::debug!(action = %action.kind(), "{:?}", outcome);
        match &outcome {
            ActionOutcome::ExperienceGained { report, .. } if report.levels_gained > 0 => {
                self.levels_gained += report.levels_gained;
                tracing::info!(
                    "Level up: {} reached level {}{}",
                    self.character.name,
                    report.new_level,
                    if report.capped { " (cap)" } else { "" }
                );
            }
            ActionOutcome::Damaged(report) if report.armor_broken => {
                tracing::info!("Armor broken on {}", self.character.name);
            }
            _ => {}
        }
        if self.character.resources().is_depleted() {
            tracing::warn!("{} has no health left", self.character.name);
        }

        Ok(outcome)
    }

    /// Looks up an unclaimed quest and returns its name with the reward action.
    fn claim(&self, name: &str) -> Result<(String, InputAction), SessionError> {
        let quest = self
            .quests
            .iter()
            .find(|quest| quest.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| QuestError::UnknownQuest(name.to_string()))?;

        if self.is_claimed(&quest.name) {
            return Err(SessionError::AlreadyClaimed(quest.name.clone()));
        }
        Ok((
            quest.name.clone(),
            InputAction::ClaimReward(quest.reward.clone()),
        ))
    }

    fn render_status(&self) -> Result<String, SessionError> {
        let status = self.character.status();
        Ok(match self.status_format {
            StatusFormat::Text => status.to_string(),
            StatusFormat::Json => serde_json::to_string(&status)?,
        })
    }

    fn render_inventory(&self) -> String {
        let inventory = &self.character.inventory;
        let mut text = format!(
            "inventory: {} items, weight {:.1}/{:.1}",
            inventory.len(),
            inventory.total_weight(&self.items),
            inventory.weight_limit
        );
        if inventory.is_over_weight_limit(&self.items) {
            text.push_str(" (over limit)");
        }
        for handle in inventory.items() {
            let name = self
                .items
                .definition(*handle)
                .map_or("<unknown>", |definition| definition.name.as_str());
            let marker = if self.character.equipped_weapon() == Some(*handle) {
                " [wielded]"
            } else {
                ""
            };
            text.push_str(&format!("\n  {handle} {name}{marker}"));
        }
        text
    }

    fn render_quests(&self) -> String {
        let mut text = format!("quests: {}", self.quests.len());
        for quest in &self.quests {
            let mark = if self.is_claimed(&quest.name) { "x" } else { " " };
            let reward = match quest.reward.kind {
                RewardKind::Experience => format!("{:.0} xp", quest.reward.experience),
                RewardKind::Item => quest
                    .reward
                    .item
                    .map_or_else(|| "item".to_string(), |item| format!("item {item}")),
                RewardKind::Default => "nothing".to_string(),
            };
            text.push_str(&format!(
                "\n  [{mark}] {} - {} ({reward})",
                quest.name, quest.description
            ));
        }
        text
    }
}

/// Builder for [`Session`].
///
/// The game config is required; content defaults to empty catalogs.
#[derive(Default)]
pub struct SessionBuilder {
    character_name: Option<String>,
    config: Option<GameConfig>,
    items: ItemCatalog,
    quests: Vec<Quest>,
    status_format: StatusFormat,
    weight_limit: Option<f32>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the host settings from a [`ClientConfig`].
    pub fn client_config(mut self, config: &ClientConfig) -> Self {
        self.character_name = Some(config.character_name.clone());
        self.status_format = config.status_format;
        self.weight_limit = Some(config.weight_limit);
        self
    }

    pub fn character_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }

    /// Set the gameplay tuning (required).
    pub fn game_config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn items(mut self, items: ItemCatalog) -> Self {
        self.items = items;
        self
    }

    pub fn quests(mut self, quests: Vec<Quest>) -> Self {
        self.quests = quests;
        self
    }

    pub fn status_format(mut self, format: StatusFormat) -> Self {
        self.status_format = format;
        self
    }

    pub fn weight_limit(mut self, limit: f32) -> Self {
        self.weight_limit = Some(limit);
        self
    }

    /// Build the Session.
    ///
    /// # Errors
    ///
    /// Returns an error if the game config is missing or two quests share a
    /// name (names are compared case-insensitively).
    pub fn build(self) -> Result<Session> {
        let config = self
            .config
            .context("Game config is required. Use .game_config() to set it.")?;

        let mut names = BTreeSet::new();
        for quest in &self.quests {
            if !names.insert(quest.name.to_lowercase()) {
                bail!("Duplicate quest name '{}'", quest.name);
            }
        }

        let name = self.character_name.unwrap_or_else(|| "Hero".to_string());
        let weight_limit = self
            .weight_limit
            .unwrap_or(ClientConfig::DEFAULT_WEIGHT_LIMIT);
        let character = Character::new(name, &config).with_weight_limit(weight_limit);

        Ok(Session {
            character,
            config,
            items: self.items,
            quests: self.quests,
            claimed: BTreeSet::new(),
            status_format: self.status_format,
            actions: 0,
            errors: 0,
            levels_gained: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpg_core::{
        ArmorState, ItemDefinition, ItemHandle, ItemKind, Reward, WeaponData, WeaponKind,
    };

    fn session() -> Session {
        let items: ItemCatalog = [
            ItemDefinition::new(ItemHandle(1), "Torch", 0.5, ItemKind::Misc),
            ItemDefinition::weapon(
                ItemHandle(13),
                "Bearded Axe",
                6.0,
                WeaponData::new(WeaponKind::Axe, 3, 0.3, 0.7),
            ),
        ]
        .into_iter()
        .collect();

        let mut wolves = Quest::new("Wolf Problem", "Sheep keep vanishing");
        wolves.reward = Reward::experience(2500.0);
        let mut herbs = Quest::new("Herbalist", "Pick herbs");
        herbs.reward = Reward::item(ItemHandle(1));

        Session::builder()
            .character_name("Tester")
            .game_config(GameConfig::default())
            .items(items)
            .quests(vec![wolves, herbs])
            .build()
            .unwrap()
    }

    fn text(step: Step) -> String {
        match step {
            Step::Continue(Some(text)) => text,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn build_requires_game_config() {
        let err = Session::builder().build().err().unwrap();
        assert!(err.to_string().contains("Game config is required"));
    }

    #[test]
    fn build_rejects_duplicate_quest_names() {
        let err = Session::builder()
            .game_config(GameConfig::default())
            .quests(vec![Quest::new("Rats", ""), Quest::new("RATS", "")])
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Duplicate quest name"));
    }

    #[test]
    fn actions_answer_with_status_line() {
        let mut session = session();

        let reply = text(session.handle_line("damage 1.5").unwrap());
        assert!(reply.starts_with("Tester | HP 0.50 | AR 0.00 (unarmored)"));
        assert_eq!(
            session.character().resources().armor_state(),
            ArmorState::Unarmored
        );

        assert_eq!(session.handle_line("# nothing").unwrap(), Step::Continue(None));
        assert_eq!(session.handle_line("quit").unwrap(), Step::Quit);
    }

    #[test]
    fn claiming_a_quest_pays_out_once() {
        let mut session = session();

        let reply = text(session.handle_line("claim wolf problem").unwrap());
        assert!(reply.contains("LV 2"));
        assert!(session.is_claimed("Wolf Problem"));
        assert_eq!(session.character().progression().experience(), 500.0);

        let err = session.handle_line("claim Wolf Problem").unwrap_err();
        assert!(matches!(err, SessionError::AlreadyClaimed(_)));
        assert_eq!(session.character().progression().experience(), 500.0);

        let err = session.handle_line("claim WOLF PROBLEM").unwrap_err();
        assert!(matches!(err, SessionError::AlreadyClaimed(name) if name == "Wolf Problem"));

        let err = session.handle_line("claim Dragon").unwrap_err();
        assert_eq!(err.error_code(), "unknown_quest");
    }

    #[test]
    fn rejected_actions_report_error_codes() {
        let mut session = session();
        session.handle_line("pick_up Bearded Axe").unwrap();

        let err = session.handle_line("wield 13").unwrap_err();
        assert_eq!(err.error_code(), "level_too_low");
        assert!(session.character().equipped_weapon().is_none());

        let err = session.handle_line("heal -1").unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn inventory_and_quests_are_listed() {
        let mut session = session();
        session.handle_line("claim herbalist").unwrap();

        let inventory = text(session.handle_line("inventory").unwrap());
        assert!(inventory.starts_with("inventory: 1 items, weight 0.5/50.0"));
        assert!(inventory.contains("#1 Torch"));

        let quests = text(session.handle_line("quests").unwrap());
        assert!(quests.contains("[ ] Wolf Problem"));
        assert!(quests.contains("[x] Herbalist"));
        assert!(quests.contains("2500 xp"));
    }

    #[test]
    fn json_status_is_machine_readable() {
        let mut session = session();
        session.status_format = StatusFormat::Json;

        let reply = text(session.handle_line("gain_experience 2500").unwrap());
        let json: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(json["level"], 2);
        assert_eq!(json["experience_threshold"], 2500.0);
    }
}
