//! The root form aggregate

use crate::{FeatureRequest, Issue, KeyPlayer, TechnicalStack};
use serde::{Deserialize, Serialize};

/// Planning horizon of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl GoalHorizon {
    /// All horizons in form order
    pub const ALL: [GoalHorizon; 3] = [
        GoalHorizon::ShortTerm,
        GoalHorizon::MediumTerm,
        GoalHorizon::LongTerm,
    ];

    /// Label shown in front of the goal text
    pub fn label(&self) -> &'static str {
        match self {
            GoalHorizon::ShortTerm => "Short-term",
            GoalHorizon::MediumTerm => "Medium-term",
            GoalHorizon::LongTerm => "Long-term",
        }
    }
}

/// Account goals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goals {
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
}

impl Goals {
    pub fn get(&self, horizon: GoalHorizon) -> &str {
        match horizon {
            GoalHorizon::ShortTerm => &self.short_term,
            GoalHorizon::MediumTerm => &self.medium_term,
            GoalHorizon::LongTerm => &self.long_term,
        }
    }

    pub fn get_mut(&mut self, horizon: GoalHorizon) -> &mut String {
        match horizon {
            GoalHorizon::ShortTerm => &mut self.short_term,
            GoalHorizon::MediumTerm => &mut self.medium_term,
            GoalHorizon::LongTerm => &mut self.long_term,
        }
    }
}

/// The list-valued sections of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListSection {
    KeyPlayers,
    OpenIssues,
    FeatureRequests,
}

/// Complete onboarding form state
///
/// Created empty at session start and replaced wholesale by every
/// [`FormUpdate`](crate::FormUpdate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub account_name: String,
    pub primary_business_case: String,
    pub goals: Goals,
    pub key_players: Vec<KeyPlayer>,
    pub technical_stack: TechnicalStack,
    pub open_issues: Vec<Issue>,
    pub beta_features: String,
    pub org_id: String,
    pub feature_requests: Vec<FeatureRequest>,
    pub trouble_areas: String,
}

impl FormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in a list section
    pub fn list_len(&self, section: ListSection) -> usize {
        match section {
            ListSection::KeyPlayers => self.key_players.len(),
            ListSection::OpenIssues => self.open_issues.len(),
            ListSection::FeatureRequests => self.feature_requests.len(),
        }
    }

    /// Apply an update, consuming this state and returning the next one
    pub fn update(self, update: crate::FormUpdate) -> Self {
        update.apply(&self)
    }
}
