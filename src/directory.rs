//! The in-memory contact directory.
//!
//! Records are keyed by their name and kept in insertion order, which is
//! also the order of listings and of the upcoming-birthdays query.

use crate::clock::{Clock, SystemClock};
use crate::domain::Name;
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::trace;

/// Default lookahead window, in days, for upcoming birthdays.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// A contact whose birthday is celebrated inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub celebration_date: NaiveDate,
}

/// All contact records, one per unique name.
#[derive(Debug, Default)]
pub struct Directory {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// A record with the same name is replaced outright, phones and birthday
    /// included, and keeps its original position.
    pub fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        trace!(contact = %key, "storing contact record");
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by raw name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by raw name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove a record. Removing an unknown name does nothing.
    ///
    /// Linear in the number of records, since the insertion order is a
    /// plain vector that has to be searched.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            trace!(contact = name, "removed contact record");
            self.order.retain(|key| key != name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts celebrating within `days_ahead` days of the local date.
    pub fn upcoming_birthdays(&self, days_ahead: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(SystemClock.today(), days_ahead)
    }

    /// Contacts whose next celebration date falls in `[today, today + days_ahead)`.
    ///
    /// Results follow insertion order, not date order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days_ahead: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(days_ahead);

        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let celebration_date = birthday.next_celebration(today);
                let days_until = (celebration_date - today).num_days();
                (0..window).contains(&days_until).then(|| UpcomingBirthday {
                    name: record.name().clone(),
                    celebration_date,
                })
            })
            .collect()
    }
}
