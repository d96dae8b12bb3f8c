//! Command handlers.
//!
//! Each handler takes the directory and already-counted arguments, calls
//! into the record or directory, and formats the reply text. Failures are
//! returned as `CommandError` and rendered by the router.

use crate::directory::Directory;
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// Add a contact, or add a phone to an existing contact.
pub fn add(directory: &mut Directory, name: &str, phone: Option<&str>) -> CommandResult<String> {
    if let Some(record) = directory.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        return Ok("Contact updated.".to_string());
    }

    // Build the record fully before storing it so a bad phone leaves no
    // half-created contact behind.
    let mut record = ContactRecord::with_name(name)?;
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    directory.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change(
    directory: &mut Directory,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    record_mut(directory, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

pub fn phone(directory: &Directory, name: &str) -> CommandResult<String> {
    let record = record(directory, name)?;
    Ok(format!("{}: {}", name, record.phones_display()))
}

pub fn remove_phone(directory: &mut Directory, name: &str, phone: &str) -> CommandResult<String> {
    record_mut(directory, name)?.remove_phone(phone)?;
    Ok("Phone number removed.".to_string())
}

pub fn delete(directory: &mut Directory, name: &str) -> CommandResult<String> {
    if !directory.contains(name) {
        return Err(CommandError::ContactNotFound(name.to_string()));
    }
    directory.delete(name);
    Ok("Contact deleted.".to_string())
}

pub fn all(directory: &Directory) -> String {
    if directory.is_empty() {
        return "No contacts found.".to_string();
    }

    directory
        .records()
        .map(|record| format!("{}: {}", record.name(), record.phones_display()))
        .collect::<Vec<_>>()
        .join("\n- ")
}

pub fn add_birthday(directory: &mut Directory, name: &str, birthday: &str) -> CommandResult<String> {
    record_mut(directory, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(directory: &Directory, name: &str) -> CommandResult<String> {
    let reply = match record(directory, name)?.birthday() {
        Some(birthday) => format!("{}'s birthday is {}.", name, birthday),
        None => "Birthday not set.".to_string(),
    };
    Ok(reply)
}

/// List contacts celebrating within `days` days of `today`, one per line.
pub fn birthdays(directory: &Directory, today: NaiveDate, days: u32) -> String {
    let upcoming = directory.upcoming_birthdays_from(today, days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.celebration_date))
        .collect::<Vec<_>>()
        .join("\n")
}

fn record<'a>(directory: &'a Directory, name: &str) -> CommandResult<&'a ContactRecord> {
    directory
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn record_mut<'a>(directory: &'a mut Directory, name: &str) -> CommandResult<&'a mut ContactRecord> {
    directory
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}
