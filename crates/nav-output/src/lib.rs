//! `nav-output`: delivering and recording navigation session events.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`topic`]    | `Topic`: push-channel destinations                       |
//! | [`push`]     | `PushMessage`, `encode_event`, `status_message`           |
//! | [`row`]      | `EventRow`: one logged event                             |
//! | [`writer`]   | `EventWriter` trait                                       |
//! | [`csv`]      | `CsvEventWriter` → `session_events.csv`                   |
//! | [`observer`] | `EventLogObserver<W>`, `PushQueue`                        |
//! | [`error`]    | `OutputError`, `OutputResult`                             |
//!
//! Both observers implement `nav_session::SessionObserver` and plug into
//! `SessionRegistry::handle_command` / `handle_fix`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CsvEventWriter, EventLogObserver};
//!
//! let writer = CsvEventWriter::new(Path::new("./output")).unwrap();
//! let mut log = EventLogObserver::new(writer);
//! registry.handle_fix(id, fix, &mut log)?;
//! log.finish().map_err(|e| eprintln!("output error: {e}")).ok();
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod push;
pub mod row;
pub mod topic;
pub mod writer;


pub use crate::csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{EventLogObserver, PushQueue};
pub use push::{encode_event, status_message, PushMessage};
pub use row::EventRow;
pub use topic::Topic;
pub use writer::EventWriter;
