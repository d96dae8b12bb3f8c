//! Data models for the contact directory.
//!
//! This module contains the aggregate that groups a contact's validated
//! fields together.

pub mod record;

pub use record::ContactRecord;
