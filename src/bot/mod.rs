//! Text command interpreter.
//!
//! Lines are tokenized by [`parser`], checked against the [`command`] table,
//! executed by [`handlers`] and turned into replies by the [`router`], whose
//! [`render_error`] is the single place failures become user-facing text.
//! [`session`] drives the loop over any async reader/writer pair.

pub mod command;
pub mod handlers;
pub mod parser;
pub mod router;
pub mod session;

pub use command::{Command, CommandKind, COMMANDS};
pub use parser::parse_input;
pub use router::{render_error, Outcome, Router};
