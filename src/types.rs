//! Core types for the request sequencer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Count of mutating requests a controller has performed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Sequence(pub u64);

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({})", self.0)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sequence {
    pub fn next(self) -> Self {
        Sequence(self.0 + 1)
    }

    pub fn is_initial(self) -> bool {
        self.0 == 0
    }
}

/// Build the identifier recorded for a request: `<template>&seq=<sequence>`.
pub fn identifier(template: &str, sequence: Sequence) -> String {
    format!("{template}&seq={sequence}")
}

/// How a request reads its result back after mutating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadBack {
    /// Downgrade the exclusive guard to a shared one. The caller always sees
    /// the state its own mutation produced.
    #[default]
    Downgrade,
    /// Release the exclusive guard, then take a fresh shared guard. Another
    /// mutation may land in between, so the caller sees whatever is current.
    Reacquire,
}

/// Consistent view of a controller's state, taken under one shared lock.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSnapshot {
    pub sequence: Sequence,
    pub last_identifier: String,
}
