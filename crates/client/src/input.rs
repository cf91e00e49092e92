//! Line input processing for the client.
//!
//! This module owns the text-to-command mapping so the session loop stays
//! agnostic about the concrete syntax. One line holds one command:
//!
//! ```text
//! <action> [argument]     # game action, e.g. `damage 1.5`, `pick_up Torch`
//! status | help | quit    # session commands
//! claim <quest name>      # pay out a quest reward
//! ```
//!
//! Blank lines and `#` comments are ignored. `#` followed by a digit is an
//! item handle (`wield #11`), not a comment.

use std::str::FromStr;

use rpg_core::{
    ActionArgument, Amount, AmountError, Attribute, ErrorSeverity, GameError, InputAction,
    InputActionKind, ItemCatalog, ItemHandle, ItemOracle,
};

/// High-level outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// End the session.
    Quit,
    /// Print the current status.
    Status,
    /// List the available commands.
    Help,
    /// List inventory contents.
    Inventory,
    /// List quests and whether their reward was claimed.
    Quests,
    /// Claim the reward of the named quest.
    Claim(String),
    /// Apply a decoded game action.
    Submit(InputAction),
    /// Nothing to do (blank line or comment).
    None,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: String,
        expected: ActionArgument,
    },

    #[error("'{0}' takes no argument")]
    UnexpectedArgument(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
}

impl GameError for InputError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::MissingArgument { .. } => "missing_argument",
            Self::UnexpectedArgument(_) => "unexpected_argument",
            Self::NotANumber(_) => "not_a_number",
            Self::InvalidAmount(err) => err.error_code(),
            Self::UnknownItem(_) => "unknown_item",
            Self::UnknownAttribute(_) => "unknown_attribute",
        }
    }
}

/// Translates input lines into [`Command`]s, resolving item names against
/// the loaded catalog.
pub struct InputHandler<'a> {
    items: &'a ItemCatalog,
}

impl<'a> InputHandler<'a> {
    pub fn new(items: &'a ItemCatalog) -> Self {
        Self { items }
    }

    pub fn parse_line(&self, line: &str) -> Result<Command, InputError> {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            return Ok(Command::None);
        }

        let (word, argument) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim()).filter(|rest| !rest.is_empty())),
            None => (line, None),
        };

        match word.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return self.bare(word, argument, Command::Quit),
            "status" => return self.bare(word, argument, Command::Status),
            "help" => return self.bare(word, argument, Command::Help),
            "inventory" => return self.bare(word, argument, Command::Inventory),
            "quests" => return self.bare(word, argument, Command::Quests),
            "claim" => {
                let quest = argument.ok_or_else(|| InputError::MissingArgument {
                    command: word.to_string(),
                    expected: ActionArgument::Quest,
                })?;
                return Ok(Command::Claim(quest.to_string()));
            }
            _ => {}
        }

        let kind = InputActionKind::from_str(word)
            .map_err(|_| InputError::UnknownCommand(word.to_string()))?;
        self.action(kind, argument).map(Command::Submit)
    }

    fn bare(&self, word: &str, argument: Option<&str>, command: Command) -> Result<Command, InputError> {
        match argument {
            Some(_) => Err(InputError::UnexpectedArgument(word.to_string())),
            None => Ok(command),
        }
    }

    fn action(&self, kind: InputActionKind, argument: Option<&str>) -> Result<InputAction, InputError> {
        let expected = kind.argument();
        let required = || InputError::MissingArgument {
            command: kind.to_string(),
            expected,
        };

        let action = match expected {
            ActionArgument::None => {
                if argument.is_some() {
                    return Err(InputError::UnexpectedArgument(kind.to_string()));
                }
                match kind {
                    InputActionKind::Sprint => InputAction::Sprint,
                    InputActionKind::StopSprinting => InputAction::StopSprinting,
                    InputActionKind::ZoomIn => InputAction::ZoomIn,
                    InputActionKind::StopZoom => InputAction::StopZoom,
                    InputActionKind::Punch => InputAction::Punch,
                    InputActionKind::StopPunch => InputAction::StopPunch,
                    InputActionKind::LeaveItem => InputAction::LeaveItem,
                    InputActionKind::Equip => InputAction::Equip,
                    _ => return Err(InputError::UnknownCommand(kind.to_string())),
                }
            }
            ActionArgument::OptionalAmount => {
                let amount = argument.map(parse_amount).transpose()?;
                match kind {
                    InputActionKind::Damage => InputAction::Damage(amount),
                    InputActionKind::Heal => InputAction::Heal(amount),
                    InputActionKind::HealArmor => InputAction::HealArmor(amount),
                    InputActionKind::StaminaAdd => InputAction::StaminaAdd(amount),
                    InputActionKind::StaminaMinus => InputAction::StaminaMinus(amount),
                    _ => return Err(InputError::UnknownCommand(kind.to_string())),
                }
            }
            ActionArgument::Amount => {
                let amount = parse_amount(argument.ok_or_else(required)?)?;
                InputAction::GainExperience(amount)
            }
            ActionArgument::Item => {
                let item = self.resolve_item(argument.ok_or_else(required)?)?;
                match kind {
                    InputActionKind::OverlapItem => InputAction::OverlapItem(item),
                    InputActionKind::PickUp => InputAction::PickUp(item),
                    InputActionKind::Wield => InputAction::Wield(item),
                    _ => return Err(InputError::UnknownCommand(kind.to_string())),
                }
            }
            ActionArgument::Attribute => {
                let raw = argument.ok_or_else(required)?;
                let attribute = Attribute::from_str(raw)
                    .map_err(|_| InputError::UnknownAttribute(raw.to_string()))?;
                InputAction::Allocate(attribute)
            }
            // Quest rewards go through `claim` so the session can track them.
            ActionArgument::Quest => {
                return Err(InputError::UnknownCommand(kind.to_string()));
            }
        };

        Ok(action)
    }

    /// Accepts a numeric handle or an item name.
    fn resolve_item(&self, raw: &str) -> Result<ItemHandle, InputError> {
        let by_handle = raw
            .trim_start_matches('#')
            .parse::<u32>()
            .ok()
            .and_then(|id| self.items.definition(ItemHandle(id)));

        by_handle
            .or_else(|| self.items.find_by_name(raw))
            .map(|definition| definition.handle)
            .ok_or_else(|| InputError::UnknownItem(raw.to_string()))
    }
}

/// Cuts a trailing `# comment`.
///
/// `#` opens a comment at the start of a token unless a digit follows, so
/// item handles written as `#11` survive.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        if *byte != b'#' {
            continue;
        }
        let token_start = index == 0 || bytes[index - 1].is_ascii_whitespace();
        let handle = bytes.get(index + 1).is_some_and(u8::is_ascii_digit);
        if token_start && !handle {
            return &line[..index];
        }
    }
    line
}

fn parse_amount(raw: &str) -> Result<Amount, InputError> {
    let value = raw
        .parse::<f32>()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    Ok(Amount::new(value)?)
}

/// Usage text printed by `help`.
pub fn help_text() -> String {
    use strum::IntoEnumIterator;

    let mut text = String::from("session: status | inventory | quests | claim <quest> | help | quit\nactions:");
    for kind in InputActionKind::iter() {
        if kind.argument() == ActionArgument::Quest {
            continue;
        }
        let usage = match kind.argument() {
            ActionArgument::None => String::new(),
            ActionArgument::OptionalAmount => " [amount]".to_string(),
            other => format!(" <{other}>"),
        };
        text.push_str(&format!("\n  {kind}{usage}"));
    }
    text
}
