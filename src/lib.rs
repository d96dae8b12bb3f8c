//! Assistant Bot - an interactive contact directory.
//!
//! This library keeps an in-memory phone book of contacts with validated
//! fields and works out when each contact's birthday is celebrated,
//! including the Feb 29 and weekend adjustments.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record aggregate
//! - **directory**: The keyed collection and the upcoming-birthdays query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **clock**: Source of "today"
//! - **bot**: Command parsing, routing and the interactive session

pub mod bot;
pub mod clock;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use bot::{Outcome, Router};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use directory::{Directory, UpcomingBirthday, DEFAULT_LOOKAHEAD_DAYS};
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::ContactRecord;
