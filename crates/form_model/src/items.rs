//! List item types: key players, open issues, and feature requests

use crate::{FormModelError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text shown for an item without a due date
pub const DUE_DATE_NOT_SET: &str = "Not set";

/// Priority of an issue or feature request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities in menu order
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = FormModelError;

    fn from_str(s: &str) -> Result<Self> {
        Priority::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| FormModelError::UnknownLabel {
                kind: "priority",
                label: s.to_string(),
            })
    }
}

/// Progress of an issue or feature request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    New,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Almost finished")]
    AlmostFinished,
}

impl Status {
    /// All statuses in menu order
    pub const ALL: [Status; 3] = [Status::New, Status::InProgress, Status::AlmostFinished];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In progress",
            Status::AlmostFinished => "Almost finished",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = FormModelError;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|st| st.label() == s)
            .ok_or_else(|| FormModelError::UnknownLabel {
                kind: "status",
                label: s.to_string(),
            })
    }
}

/// Yes/No answer for single-choice questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl FromStr for YesNo {
    type Err = FormModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            other => Err(FormModelError::UnknownLabel {
                kind: "yes/no",
                label: other.to_string(),
            }),
        }
    }
}

/// Format an optional due date as `YYYY-MM-DD`, or "Not set" when absent
pub fn due_date_label(due_date: Option<NaiveDate>) -> String {
    match due_date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => DUE_DATE_NOT_SET.to_string(),
    }
}

/// A stakeholder on the customer side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPlayer {
    pub name: String,
    pub focus_area: String,
    pub geographic_location: String,
    pub kpis: String,
}

/// An open issue tracked during onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Issue {
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// Calendar date only; `None` means "not set"
    pub due_date: Option<NaiveDate>,
}

impl Issue {
    pub fn due_date_label(&self) -> String {
        due_date_label(self.due_date)
    }
}

/// A feature request raised by the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureRequest {
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    pub ticket_link: String,
    pub jira_link: String,
}

impl FeatureRequest {
    pub fn due_date_label(&self) -> String {
        due_date_label(self.due_date)
    }
}
