//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A contact in the directory.
///
/// The name is fixed at creation. Phone numbers form a set, so adding a
/// number twice is a no-op. The birthday slot is empty until one is set and
/// may be replaced any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: BTreeSet<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: BTreeSet::new(),
            birthday: None,
        }
    }

    /// Validate `name` and create an empty record for it.
    pub fn with_name(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phone numbers in ascending digit order.
    pub fn phones(&self) -> impl Iterator<Item = &PhoneNumber> {
        self.phones.iter()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and add a phone number. Adding a stored number is a no-op.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.insert(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `raw` is not a valid phone number,
    ///   checked before membership.
    /// - `RecordError::PhoneNotFound` if the number is not stored.
    pub fn remove_phone(&mut self, raw: &str) -> RecordResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if !self.phones.remove(&phone) {
            return Err(RecordError::PhoneNotFound(phone.into_inner()));
        }
        Ok(())
    }

    /// Replace `old_raw` with `new_raw`.
    ///
    /// The new number is inserted before the old one is removed, so editing
    /// a number into itself leaves it in place.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidPhone` if either number is malformed.
    /// - `ValidationError::OldPhoneNotFound` if `old_raw` is not stored.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<(), ValidationError> {
        let old = PhoneNumber::new(old_raw)?;
        if !self.phones.contains(&old) {
            return Err(ValidationError::OldPhoneNotFound(old.into_inner()));
        }

        self.phones.insert(PhoneNumber::new(new_raw)?);
        if old.as_str() != new_raw {
            self.phones.remove(&old);
        }
        Ok(())
    }

    /// Look up a stored phone by its raw digits. A malformed query simply
    /// finds nothing.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Phone numbers joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}
