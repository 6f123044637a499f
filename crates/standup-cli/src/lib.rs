//! standup-cli library
//!
//! This module exports the presentation layer of the standup binary for use in
//! integration tests: option parsing, terminal report rendering and clipboard
//! access. The commit pipeline itself lives in `standup-git`.

pub mod clipboard;
pub mod config;
pub mod report;
pub mod run;
