//! Persistence layer for taskdesk.
//!
//! Tasks are kept in a single JSON file rewritten on every save. See
//! [`tasks::Tasks`] for the load and save rules.

pub mod tasks;
