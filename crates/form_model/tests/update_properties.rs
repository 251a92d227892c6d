//! Property tests for form updates
//!
//! List sections keep insertion order under add/remove, and an update only
//! ever changes the field it targets.

use form_model::{FormState, FormUpdate, IssueField, ListSection};
use proptest::prelude::*;

fn issues_state(descriptions: &[String]) -> FormState {
    descriptions
        .iter()
        .enumerate()
        .fold(FormState::new(), |state, (i, description)| {
            state
                .update(FormUpdate::AddItem { section: ListSection::OpenIssues })
                .update(FormUpdate::Issue {
                    index: i,
                    field: IssueField::Description(description.clone()),
                })
        })
}

proptest! {
    #[test]
    fn remove_preserves_relative_order(
        descriptions in prop::collection::vec("[a-z]{1,8}", 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let state = issues_state(&descriptions);
        let index = pick.index(descriptions.len());

        let next = state.update(FormUpdate::RemoveItem {
            section: ListSection::OpenIssues,
            index,
        });

        let mut expected = descriptions.clone();
        expected.remove(index);
        let actual: Vec<String> = next.open_issues.iter().map(|i| i.description.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn scalar_update_touches_only_its_field(account in ".{0,20}", notes in ".{0,20}") {
        let base = issues_state(&["one".to_string(), "two".to_string()])
            .update(FormUpdate::TroubleAreas { value: notes.clone() });

        let next = FormUpdate::AccountName { value: account.clone() }.apply(&base);

        prop_assert_eq!(&next.account_name, &account);
        let mut restored = next.clone();
        restored.account_name = base.account_name.clone();
        prop_assert_eq!(restored, base);
    }
}
