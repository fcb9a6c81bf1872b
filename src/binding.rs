//! Terminal binding for the list controller
//!
//! Each input line maps to one controller call. The binding keeps no
//! selection state of its own.

use std::str::FromStr;

use crate::backend::VideoBackend;
use crate::controller::{ConfirmOutcome, PaginatedListController};
use crate::error::{ListError, Result};
use crate::models::PageSelection;
use crate::notify::Notifier;

pub const HELP_TEXT: &str = "\
Commands:
  limit <n>   stage a new page size
  page <n>    stage a new page number
  go          fetch the staged selection (alias: confirm)
  show        print the current list
  help        print this help
  quit        leave (alias: exit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingCommand {
    SetLimit(u32),
    SetPage(u32),
    Confirm,
    Show,
    Help,
    Quit,
}

impl FromStr for BindingCommand {
    type Err = ListError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let keyword = parts
            .next()
            .ok_or_else(|| ListError::InvalidCommand("empty input".to_string()))?
            .to_ascii_lowercase();
        let argument = parts.next();

        if parts.next().is_some() {
            return Err(ListError::InvalidCommand(format!(
                "too many arguments in '{}'",
                line.trim()
            )));
        }

        let command = match (keyword.as_str(), argument) {
            ("limit", Some(value)) => BindingCommand::SetLimit(parse_number(value)?),
            ("page", Some(value)) => BindingCommand::SetPage(parse_number(value)?),
            ("limit", None) | ("page", None) => {
                return Err(ListError::InvalidCommand(format!(
                    "'{}' needs a number",
                    keyword
                )))
            }
            ("go" | "confirm", None) => BindingCommand::Confirm,
            ("show", None) => BindingCommand::Show,
            ("help" | "?", None) => BindingCommand::Help,
            ("quit" | "exit", None) => BindingCommand::Quit,
            _ => {
                return Err(ListError::InvalidCommand(format!(
                    "unknown command '{}'",
                    line.trim()
                )))
            }
        };

        Ok(command)
    }
}

fn parse_number(value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| {
        ListError::InvalidCommand(format!("'{}' is not a positive integer", value))
    })
}

/// What the binding should show after handling a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingResponse {
    Staged(PageSelection),
    Confirmed(ConfirmOutcome),
    Show,
    Help,
    Quit,
}

/// Forward one command to the controller.
pub async fn dispatch<B, N>(
    controller: &mut PaginatedListController<B, N>,
    command: BindingCommand,
) -> Result<BindingResponse>
where
    B: VideoBackend,
    N: Notifier,
{
    let response = match command {
        BindingCommand::SetLimit(value) => {
            controller.set_pending_limit(value)?;
            BindingResponse::Staged(controller.pending())
        }
        BindingCommand::SetPage(value) => {
            controller.set_pending_page(value)?;
            BindingResponse::Staged(controller.pending())
        }
        BindingCommand::Confirm => BindingResponse::Confirmed(controller.confirm_selection().await),
        BindingCommand::Show => BindingResponse::Show,
        BindingCommand::Help => BindingResponse::Help,
        BindingCommand::Quit => BindingResponse::Quit,
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("limit 20".parse::<BindingCommand>().unwrap(), BindingCommand::SetLimit(20));
        assert_eq!("  PAGE 3 ".parse::<BindingCommand>().unwrap(), BindingCommand::SetPage(3));
        assert_eq!("go".parse::<BindingCommand>().unwrap(), BindingCommand::Confirm);
        assert_eq!("confirm".parse::<BindingCommand>().unwrap(), BindingCommand::Confirm);
        assert_eq!("show".parse::<BindingCommand>().unwrap(), BindingCommand::Show);
        assert_eq!("?".parse::<BindingCommand>().unwrap(), BindingCommand::Help);
        assert_eq!("exit".parse::<BindingCommand>().unwrap(), BindingCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for line in ["", "limit", "page -1", "page two", "go now", "limit 1 2", "jump 4"] {
            assert!(
                matches!(line.parse::<BindingCommand>(), Err(ListError::InvalidCommand(_))),
                "expected '{}' to be rejected",
                line
            );
        }
    }

    #[test]
    fn test_zero_parses_but_is_left_to_the_controller() {
        // Range validation belongs to the controller, not the parser.
        assert_eq!("limit 0".parse::<BindingCommand>().unwrap(), BindingCommand::SetLimit(0));
    }
}
