//! Routes input lines to handlers and translates failures into replies.

use super::command::{help_text, Command};
use super::handlers;
use super::parser::parse_input;
use crate::clock::{Clock, SystemClock};
use crate::directory::{Directory, DEFAULT_LOOKAHEAD_DAYS};
use crate::domain::ValidationError;
use crate::error::{CommandError, CommandResult};
use tracing::debug;

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading.
    Reply(String),
    /// Print the farewell and stop.
    Exit(String),
}

/// Owns the directory for the lifetime of a session and dispatches
/// commands against it.
pub struct Router<C: Clock = SystemClock> {
    directory: Directory,
    clock: C,
    lookahead_days: u32,
}

impl Router<SystemClock> {
    pub fn new(lookahead_days: u32) -> Self {
        Self::with_clock(SystemClock, lookahead_days)
    }
}

impl Default for Router<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD_DAYS)
    }
}

impl<C: Clock> Router<C> {
    pub fn with_clock(clock: C, lookahead_days: u32) -> Self {
        Self {
            directory: Directory::new(),
            clock,
            lookahead_days,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Handle one input line. Never fails: errors become replies.
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        match self.try_dispatch(line) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(error = %err, "command failed");
                Outcome::Reply(render_error(&err))
            }
        }
    }

    fn try_dispatch(&mut self, line: &str) -> CommandResult<Outcome> {
        let (keyword, args) = parse_input(line).ok_or(CommandError::Empty)?;
        let command = Command::parse(keyword, &args)?;
        debug!(?command, "dispatching");
        self.execute(command)
    }

    fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        let directory = &mut self.directory;
        let reply = match command {
            Command::Hello => handlers::hello(),
            Command::Help => help_text(),
            Command::Exit => return Ok(Outcome::Exit("Goodbye!".to_string())),
            Command::Add { name, phone } => handlers::add(directory, &name, phone.as_deref())?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => handlers::change(directory, &name, &old_phone, &new_phone)?,
            Command::Phone { name } => handlers::phone(directory, &name)?,
            Command::RemovePhone { name, phone } => {
                handlers::remove_phone(directory, &name, &phone)?
            }
            Command::Delete { name } => handlers::delete(directory, &name)?,
            Command::All => handlers::all(directory),
            Command::AddBirthday { name, birthday } => {
                handlers::add_birthday(directory, &name, &birthday)?
            }
            Command::ShowBirthday { name } => handlers::show_birthday(directory, &name)?,
            Command::Birthdays { days } => handlers::birthdays(
                directory,
                self.clock.today(),
                days.unwrap_or(self.lookahead_days),
            ),
        };
        Ok(Outcome::Reply(reply))
    }
}

/// The one place where command failures become user-facing text.
pub fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::Empty => "No command entered.".to_string(),
        CommandError::UnknownCommand(_) => "Invalid command.".to_string(),
        CommandError::Arity { .. } => "Invalid number of parameters.".to_string(),
        CommandError::ContactNotFound(_) => "Contact not found.".to_string(),
        CommandError::PhoneNotFound(_) => "Phone number not found.".to_string(),
        CommandError::Validation(ValidationError::InvalidBirthday(_)) => {
            "Invalid date format. Use DD.MM.YYYY".to_string()
        }
        CommandError::Validation(e) => e.to_string(),
        CommandError::InvalidInput(_) => {
            "Invalid input. Please enter the correct data.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn router() -> Router<FixedClock> {
        // Wednesday
        let today = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        Router::with_clock(FixedClock(today), DEFAULT_LOOKAHEAD_DAYS)
    }

    fn reply(text: &str) -> Outcome {
        Outcome::Reply(text.to_string())
    }

    #[test]
    fn test_render_error_messages() {
        assert_eq!(render_error(&CommandError::Empty), "No command entered.");
        assert_eq!(
            render_error(&CommandError::UnknownCommand("x".to_string())),
            "Invalid command."
        );
        assert_eq!(
            render_error(&CommandError::Arity {
                command: "phone",
                usage: "phone <name>",
                got: 0
            }),
            "Invalid number of parameters."
        );
        assert_eq!(
            render_error(&CommandError::ContactNotFound("x".to_string())),
            "Contact not found."
        );
        assert_eq!(
            render_error(&CommandError::PhoneNotFound("x".to_string())),
            "Phone number not found."
        );
        assert_eq!(
            render_error(&CommandError::Validation(ValidationError::InvalidBirthday(
                "x".to_string()
            ))),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            render_error(&CommandError::Validation(ValidationError::OldPhoneNotFound(
                "0501234567".to_string()
            ))),
            "Old phone number not found"
        );
        assert_eq!(
            render_error(&CommandError::InvalidInput("x".to_string())),
            "Invalid input. Please enter the correct data."
        );
    }

    #[test]
    fn test_dispatch_basic_commands() {
        let mut router = router();
        assert_eq!(router.dispatch("hello"), reply("How can I help you?"));
        assert_eq!(router.dispatch(""), reply("No command entered."));
        assert_eq!(router.dispatch("jump"), reply("Invalid command."));
        assert_eq!(router.dispatch("exit"), Outcome::Exit("Goodbye!".to_string()));
        assert_eq!(router.dispatch("close"), Outcome::Exit("Goodbye!".to_string()));
    }

    #[test]
    fn test_dispatch_errors_do_not_mutate() {
        let mut router = router();
        assert_eq!(
            router.dispatch("add Alice 12345"),
            reply("Invalid phone number: 12345 (expected 10 digits)")
        );
        assert!(router.directory().is_empty());
        assert_eq!(router.dispatch("phone"), reply("Invalid number of parameters."));
        assert_eq!(router.dispatch("phone Alice"), reply("Contact not found."));
    }

    #[test]
    fn test_dispatch_birthdays_uses_clock_and_default_window() {
        let mut router = router();
        router.dispatch("add Alice 0501234567");
        router.dispatch("add-birthday Alice 16.06.1990");
        router.dispatch("add Bob");
        router.dispatch("add-birthday Bob 17.06.1990");

        assert_eq!(router.dispatch("birthdays"), reply("Alice: 2026-06-16"));
        assert_eq!(
            router.dispatch("birthdays 8"),
            reply("Alice: 2026-06-16\nBob: 2026-06-17")
        );
        assert_eq!(
            router.dispatch("birthdays soon"),
            reply("Invalid input. Please enter the correct data.")
        );
    }
}
