//! Bus timing query server.
//!
//! A web service that answers: "when do buses leave for this
//! destination?" against a fixed catalog of routes, tolerating
//! misspelled and partially-worded queries.

pub mod catalog;
pub mod matcher;
pub mod web;
