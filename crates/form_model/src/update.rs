//! Form updates
//!
//! Every valid change to the form is one [`FormUpdate`] variant, tagged by
//! section and field. Applying an update never mutates its input: it returns
//! a new [`FormState`] in which only the targeted field differs.
//!
//! Updates are total. An index that does not address an existing item (which
//! the form never produces, since indices come from iterating the current
//! list) leaves the state unchanged.

use crate::{
    FeatureRequest, FormState, GoalHorizon, Issue, KeyPlayer, ListSection, Priority,
    StackCategory, StackSelection, Status, YesNo,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A new value for one key player field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum KeyPlayerField {
    Name(String),
    FocusArea(String),
    GeographicLocation(String),
    Kpis(String),
}

/// A new value for one open issue field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum IssueField {
    Description(String),
    Priority(Priority),
    Status(Status),
    DueDate(Option<NaiveDate>),
}

/// A new value for one feature request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum FeatureRequestField {
    Description(String),
    Priority(Priority),
    Status(Status),
    DueDate(Option<NaiveDate>),
    TicketLink(String),
    JiraLink(String),
}

/// The closed set of form mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "op")]
pub enum FormUpdate {
    AccountName { value: String },
    PrimaryBusinessCase { value: String },
    Goal { horizon: GoalHorizon, value: String },
    KeyPlayer { index: usize, field: KeyPlayerField },
    Issue { index: usize, field: IssueField },
    FeatureRequest { index: usize, field: FeatureRequestField },
    /// Replace the selected-option set of a category wholesale
    SetSelection { category: StackCategory, options: Vec<String> },
    StackOther { category: StackCategory, value: String },
    MultiToken { value: Option<YesNo> },
    BetaFeatures { value: String },
    OrgId { value: String },
    TroubleAreas { value: String },
    /// Append a default-initialized item
    AddItem { section: ListSection },
    /// Remove the item at `index`, shifting later items down
    RemoveItem { section: ListSection, index: usize },
}

impl FormUpdate {
    /// Produce the next state from `state`
    pub fn apply(&self, state: &FormState) -> FormState {
        let mut next = state.clone();
        match self {
            FormUpdate::AccountName { value } => next.account_name = value.clone(),
            FormUpdate::PrimaryBusinessCase { value } => next.primary_business_case = value.clone(),
            FormUpdate::Goal { horizon, value } => *next.goals.get_mut(*horizon) = value.clone(),
            FormUpdate::KeyPlayer { index, field } => match next.key_players.get_mut(*index) {
                Some(player) => apply_key_player_field(player, field),
                None => self.log_missing_index(ListSection::KeyPlayers, *index, state),
            },
            FormUpdate::Issue { index, field } => match next.open_issues.get_mut(*index) {
                Some(issue) => apply_issue_field(issue, field),
                None => self.log_missing_index(ListSection::OpenIssues, *index, state),
            },
            FormUpdate::FeatureRequest { index, field } => {
                match next.feature_requests.get_mut(*index) {
                    Some(request) => apply_feature_request_field(request, field),
                    None => self.log_missing_index(ListSection::FeatureRequests, *index, state),
                }
            }
            FormUpdate::SetSelection { category, options } => {
                let selection = next.technical_stack.get_mut(*category);
                let other = std::mem::take(&mut selection.other);
                *selection = StackSelection::new(options.iter().cloned());
                selection.other = other;
            }
            FormUpdate::StackOther { category, value } => {
                next.technical_stack.get_mut(*category).other = value.clone();
            }
            FormUpdate::MultiToken { value } => next.technical_stack.multi_token = *value,
            FormUpdate::BetaFeatures { value } => next.beta_features = value.clone(),
            FormUpdate::OrgId { value } => next.org_id = value.clone(),
            FormUpdate::TroubleAreas { value } => next.trouble_areas = value.clone(),
            FormUpdate::AddItem { section } => match section {
                ListSection::KeyPlayers => next.key_players.push(KeyPlayer::default()),
                ListSection::OpenIssues => next.open_issues.push(Issue::default()),
                ListSection::FeatureRequests => next.feature_requests.push(FeatureRequest::default()),
            },
            FormUpdate::RemoveItem { section, index } => {
                if *index < state.list_len(*section) {
                    match section {
                        ListSection::KeyPlayers => {
                            next.key_players.remove(*index);
                        }
                        ListSection::OpenIssues => {
                            next.open_issues.remove(*index);
                        }
                        ListSection::FeatureRequests => {
                            next.feature_requests.remove(*index);
                        }
                    }
                } else {
                    self.log_missing_index(*section, *index, state);
                }
            }
        }
        next
    }

    /// Get a display name for this update
    pub fn display_name(&self) -> &'static str {
        match self {
            FormUpdate::AccountName { .. } => "Set Account Name",
            FormUpdate::PrimaryBusinessCase { .. } => "Set Primary Business Case",
            FormUpdate::Goal { .. } => "Set Goal",
            FormUpdate::KeyPlayer { .. } => "Edit Key Player",
            FormUpdate::Issue { .. } => "Edit Open Issue",
            FormUpdate::FeatureRequest { .. } => "Edit Feature Request",
            FormUpdate::SetSelection { .. } => "Select Stack Options",
            FormUpdate::StackOther { .. } => "Set Other Stack Option",
            FormUpdate::MultiToken { .. } => "Set Multi Token",
            FormUpdate::BetaFeatures { .. } => "Set Beta Features",
            FormUpdate::OrgId { .. } => "Set Organization ID",
            FormUpdate::TroubleAreas { .. } => "Set Trouble Areas",
            FormUpdate::AddItem { .. } => "Add Item",
            FormUpdate::RemoveItem { .. } => "Remove Item",
        }
    }

    fn log_missing_index(&self, section: ListSection, index: usize, state: &FormState) {
        tracing::debug!(
            "{} ignored: {:?} has no item {} (len {})",
            self.display_name(),
            section,
            index,
            state.list_len(section)
        );
    }
}

fn apply_key_player_field(player: &mut KeyPlayer, field: &KeyPlayerField) {
    match field {
        KeyPlayerField::Name(v) => player.name = v.clone(),
        KeyPlayerField::FocusArea(v) => player.focus_area = v.clone(),
        KeyPlayerField::GeographicLocation(v) => player.geographic_location = v.clone(),
        KeyPlayerField::Kpis(v) => player.kpis = v.clone(),
    }
}

fn apply_issue_field(issue: &mut Issue, field: &IssueField) {
    match field {
        IssueField::Description(v) => issue.description = v.clone(),
        IssueField::Priority(p) => issue.priority = *p,
        IssueField::Status(s) => issue.status = *s,
        IssueField::DueDate(d) => issue.due_date = *d,
    }
}

fn apply_feature_request_field(request: &mut FeatureRequest, field: &FeatureRequestField) {
    match field {
        FeatureRequestField::Description(v) => request.description = v.clone(),
        FeatureRequestField::Priority(p) => request.priority = *p,
        FeatureRequestField::Status(s) => request.status = *s,
        FeatureRequestField::DueDate(d) => request.due_date = *d,
        FeatureRequestField::TicketLink(v) => request.ticket_link = v.clone(),
        FeatureRequestField::JiraLink(v) => request.jira_link = v.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OTHER_OPTION;

    fn with_players(names: &[&str]) -> FormState {
        let mut state = FormState::new();
        for (i, name) in names.iter().enumerate() {
            state = state
                .update(FormUpdate::AddItem { section: ListSection::KeyPlayers })
                .update(FormUpdate::KeyPlayer {
                    index: i,
                    field: KeyPlayerField::Name(name.to_string()),
                });
        }
        state
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = FormState::new();
        let after = FormUpdate::AccountName { value: "Acme Corp".to_string() }.apply(&before);
        assert_eq!(before.account_name, "");
        assert_eq!(after.account_name, "Acme Corp");
    }

    #[test]
    fn test_goal_update_preserves_siblings() {
        let state = FormState::new()
            .update(FormUpdate::Goal {
                horizon: GoalHorizon::ShortTerm,
                value: "Pilot".to_string(),
            })
            .update(FormUpdate::Goal {
                horizon: GoalHorizon::LongTerm,
                value: "Rollout".to_string(),
            });
        assert_eq!(state.goals.short_term, "Pilot");
        assert_eq!(state.goals.medium_term, "");
        assert_eq!(state.goals.long_term, "Rollout");
    }

    #[test]
    fn test_add_item_appends_defaults() {
        let state = FormState::new()
            .update(FormUpdate::AddItem { section: ListSection::FeatureRequests });
        assert_eq!(state.feature_requests, vec![FeatureRequest::default()]);
        assert_eq!(state.feature_requests[0].priority, Priority::High);
        assert_eq!(state.feature_requests[0].status, Status::New);
    }

    #[test]
    fn test_remove_item_keeps_relative_order() {
        let state = with_players(&["Ann", "Bob", "Cid", "Dee"]);
        let state = state.update(FormUpdate::RemoveItem {
            section: ListSection::KeyPlayers,
            index: 1,
        });
        let names: Vec<_> = state.key_players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Cid", "Dee"]);
    }

    #[test]
    fn test_out_of_range_updates_are_no_ops() {
        let state = with_players(&["Ann"]);
        let removed = FormUpdate::RemoveItem {
            section: ListSection::KeyPlayers,
            index: 5,
        }
        .apply(&state);
        assert_eq!(removed, state);

        let edited = FormUpdate::Issue {
            index: 0,
            field: IssueField::Description("nothing here".to_string()),
        }
        .apply(&state);
        assert_eq!(edited, state);
    }

    #[test]
    fn test_issue_field_updates() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let state = FormState::new()
            .update(FormUpdate::AddItem { section: ListSection::OpenIssues })
            .update(FormUpdate::Issue { index: 0, field: IssueField::Priority(Priority::Low) })
            .update(FormUpdate::Issue { index: 0, field: IssueField::Status(Status::InProgress) })
            .update(FormUpdate::Issue { index: 0, field: IssueField::DueDate(Some(date)) });
        let issue = &state.open_issues[0];
        assert_eq!(issue.priority, Priority::Low);
        assert_eq!(issue.status, Status::InProgress);
        assert_eq!(issue.due_date, Some(date));

        let cleared = state.update(FormUpdate::Issue { index: 0, field: IssueField::DueDate(None) });
        assert_eq!(cleared.open_issues[0].due_date, None);
    }

    #[test]
    fn test_set_selection_replaces_wholesale_and_keeps_other_text() {
        let state = FormState::new()
            .update(FormUpdate::SetSelection {
                category: StackCategory::SourceControl,
                options: vec!["GitHub".to_string(), "Gerrit".to_string()],
            })
            .update(FormUpdate::StackOther {
                category: StackCategory::SourceControl,
                value: "Perforce".to_string(),
            })
            .update(FormUpdate::SetSelection {
                category: StackCategory::SourceControl,
                options: vec!["GitHub".to_string(), OTHER_OPTION.to_string()],
            });

        let selection = &state.technical_stack.source_control;
        assert_eq!(selection.selected, vec!["GitHub", "Other"]);
        assert_eq!(selection.other, "Perforce");
        assert_eq!(state.technical_stack.ci_cd, StackSelection::default());
    }

    #[test]
    fn test_feature_request_links() {
        let state = FormState::new()
            .update(FormUpdate::AddItem { section: ListSection::FeatureRequests })
            .update(FormUpdate::FeatureRequest {
                index: 0,
                field: FeatureRequestField::TicketLink("https://tickets/1".to_string()),
            })
            .update(FormUpdate::FeatureRequest {
                index: 0,
                field: FeatureRequestField::JiraLink("https://jira/1".to_string()),
            });
        assert_eq!(state.feature_requests[0].ticket_link, "https://tickets/1");
        assert_eq!(state.feature_requests[0].jira_link, "https://jira/1");
        assert_eq!(state.feature_requests[0].description, "");
    }

    #[test]
    fn test_update_deserializes_from_tagged_json() {
        let update: FormUpdate = serde_json::from_str(
            r#"{"op":"keyPlayer","index":2,"field":{"field":"focusArea","value":"Infra"}}"#,
        )
        .unwrap();
        assert_eq!(
            update,
            FormUpdate::KeyPlayer {
                index: 2,
                field: KeyPlayerField::FocusArea("Infra".to_string())
            }
        );
    }
}
