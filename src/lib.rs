//! ConverseEasy analysis backend.
//!
//! Backend for the ConverseEasy demo workspace: a user types a workplace
//! message, picks a target language, and receives a simulated translation,
//! a list of detected cultural-nuance issues, and a heuristic tone
//! analysis. Free users are capped at 50 analyses per day.

pub mod analysis;
pub mod config;
pub mod error;
pub mod i18n;
pub mod usage;
pub mod web;
