//! The command table and typed commands.

use crate::error::{CommandError, CommandResult};

/// Every command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Hello,
    Help,
    Exit,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
}

/// One row of the command table.
#[derive(Debug)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub keyword: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    min_args: usize,
    max_args: usize,
}

const fn spec(
    kind: CommandKind,
    keyword: &'static str,
    usage: &'static str,
    summary: &'static str,
    min_args: usize,
    max_args: usize,
) -> CommandSpec {
    CommandSpec {
        kind,
        keyword,
        usage,
        summary,
        min_args,
        max_args,
    }
}

/// Keyword lookup table, in the order shown by `help`.
pub const COMMANDS: &[CommandSpec] = &[
    spec(CommandKind::Hello, "hello", "hello", "Greet the bot", 0, 0),
    spec(CommandKind::Help, "help", "help", "Show this help message", 0, 0),
    spec(CommandKind::Exit, "exit", "exit", "Exit the bot", 0, 0),
    spec(CommandKind::Exit, "close", "close", "Exit the bot", 0, 0),
    spec(
        CommandKind::Add,
        "add",
        "add <name> [phone]",
        "Add a contact or a phone number to an existing contact",
        1,
        2,
    ),
    spec(
        CommandKind::Change,
        "change",
        "change <name> <old_phone> <new_phone>",
        "Change the phone number of a contact",
        3,
        3,
    ),
    spec(
        CommandKind::Phone,
        "phone",
        "phone <name>",
        "Show the phone numbers of a contact",
        1,
        1,
    ),
    spec(
        CommandKind::RemovePhone,
        "remove-phone",
        "remove-phone <name> <phone>",
        "Remove a phone number from a contact",
        2,
        2,
    ),
    spec(
        CommandKind::Delete,
        "delete",
        "delete <name>",
        "Delete a contact",
        1,
        1,
    ),
    spec(CommandKind::All, "all", "all", "List all contacts", 0, 0),
    spec(
        CommandKind::AddBirthday,
        "add-birthday",
        "add-birthday <name> <DD.MM.YYYY>",
        "Add a birthday for a contact",
        2,
        2,
    ),
    spec(
        CommandKind::ShowBirthday,
        "show-birthday",
        "show-birthday <name>",
        "Show the birthday of a contact",
        1,
        1,
    ),
    spec(
        CommandKind::Birthdays,
        "birthdays",
        "birthdays [days]",
        "Show birthdays celebrated in the coming days",
        0,
        1,
    ),
];

/// Find the table row for a keyword. Keywords are case-sensitive.
pub fn lookup(keyword: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.keyword == keyword)
}

/// A command with its arguments checked for count and shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Add {
        name: String,
        phone: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays {
        days: Option<u32>,
    },
}

impl Command {
    /// Build a command from a keyword and its positional arguments.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for a keyword not in the table.
    /// - `CommandError::Arity` when the argument count is out of range.
    /// - `CommandError::InvalidInput` when `birthdays` gets a non-numeric window.
    pub fn parse(keyword: &str, args: &[&str]) -> CommandResult<Self> {
        let spec =
            lookup(keyword).ok_or_else(|| CommandError::UnknownCommand(keyword.to_string()))?;
        spec.check_arity(args.len())?;

        let arg = |i: usize| args[i].to_string();

        let command = match spec.kind {
            CommandKind::Hello => Command::Hello,
            CommandKind::Help => Command::Help,
            CommandKind::Exit => Command::Exit,
            CommandKind::Add => Command::Add {
                name: arg(0),
                phone: args.get(1).map(|p| p.to_string()),
            },
            CommandKind::Change => Command::Change {
                name: arg(0),
                old_phone: arg(1),
                new_phone: arg(2),
            },
            CommandKind::Phone => Command::Phone { name: arg(0) },
            CommandKind::RemovePhone => Command::RemovePhone {
                name: arg(0),
                phone: arg(1),
            },
            CommandKind::Delete => Command::Delete { name: arg(0) },
            CommandKind::All => Command::All,
            CommandKind::AddBirthday => Command::AddBirthday {
                name: arg(0),
                birthday: arg(1),
            },
            CommandKind::ShowBirthday => Command::ShowBirthday { name: arg(0) },
            CommandKind::Birthdays => Command::Birthdays {
                days: args.first().map(|raw| parse_days(raw)).transpose()?,
            },
        };

        Ok(command)
    }
}

impl CommandSpec {
    fn check_arity(&self, got: usize) -> CommandResult<()> {
        if got < self.min_args || got > self.max_args {
            return Err(CommandError::Arity {
                command: self.keyword,
                usage: self.usage,
                got,
            });
        }
        Ok(())
    }
}

fn parse_days(raw: &str) -> CommandResult<u32> {
    raw.parse::<u32>()
        .map_err(|_| CommandError::InvalidInput(format!("not a day count: {}", raw)))
}

/// The `help` text, generated from the command table.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|spec| spec.usage.len()).max().unwrap_or(0);
    let mut text = String::from("Available commands:");
    for spec in COMMANDS {
        text.push_str(&format!(
            "\n    {:<width$}  {}",
            spec.usage,
            spec.summary,
            width = width
        ));
    }
    text
}
