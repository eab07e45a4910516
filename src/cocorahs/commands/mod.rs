//! # Command Layer
//!
//! The reporting workflow, free of terminal concerns. Commands call the
//! [`CocorahsApi`](crate::api::CocorahsApi) and return structured results;
//! the CLI decides how to print them and which exit code to use.
//!
//! Anything needing the user (choosing among several stations) goes through
//! a trait the caller implements, so tests drive it with scripted answers.
//!
//! ## Command Modules
//!
//! - [`station`]: Work out which station to report for
//! - [`report`]: Submit the observation and describe the outcome

use crate::model::ReportOutcome;

pub mod report;
pub mod station;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of one reporting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResult {
    /// The station the report was submitted for.
    pub station: String,
    pub outcome: ReportOutcome,
    pub messages: Vec<CmdMessage>,
}

impl ReportResult {
    pub fn new(station: String, outcome: ReportOutcome) -> Self {
        Self {
            station,
            outcome,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Whether the API accepted the report.
    pub fn is_created(&self) -> bool {
        matches!(self.outcome, ReportOutcome::Created { .. })
    }
}
