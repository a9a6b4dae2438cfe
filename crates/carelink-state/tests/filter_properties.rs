//! Property tests for the sidebar and notification projections.
//!
//! Each property checks the engine's filter against a brute-force
//! restatement of the contract: search AND category, archived exclusion,
//! store order preserved.

use proptest::prelude::*;

use carelink_core::models::Conversation;
use carelink_core::proptest_generators::{
    arb_conversations, arb_display_text, arb_notifications, proptest_config,
};
use carelink_state::{
    CategoryFilter, ConversationFilter, KindFilter, MessagingState, NotificationCenter,
    NotificationFilter,
};

fn contains_term(convo: &Conversation, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || convo.subject.to_lowercase().contains(&term)
        || convo
            .participants
            .iter()
            .any(|p| p.name.to_lowercase().contains(&term))
}

fn arb_search_term() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), arb_display_text()]
}

proptest! {
    #![proptest_config(proptest_config())]

    /// `All` + search term returns exactly the
    /// non-archived conversations matching the term.
    #[test]
    fn all_filter_with_search_matches_contract(
        convos in arb_conversations(12),
        term in arb_search_term(),
    ) {
        let expected: Vec<i64> = convos
            .iter()
            .filter(|c| !c.is_archived && contains_term(c, &term))
            .map(|c| c.id)
            .collect();

        let state = MessagingState::new(convos);
        let got: Vec<i64> = state
            .visible_conversations(&ConversationFilter {
                category: CategoryFilter::All,
                search: term,
            })
            .iter()
            .map(|c| c.id)
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// `Unread` + empty search is exactly the
    /// positive-counter, non-archived subset.
    #[test]
    fn unread_filter_matches_contract(convos in arb_conversations(12)) {
        let expected: Vec<i64> = convos
            .iter()
            .filter(|c| !c.is_archived && c.unread_count > 0)
            .map(|c| c.id)
            .collect();

        let state = MessagingState::new(convos);
        let got: Vec<i64> = state
            .visible_conversations(&ConversationFilter::category(CategoryFilter::Unread))
            .iter()
            .map(|c| c.id)
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// `Archived` overrides the default exclusion and
    /// returns exactly the archived subset.
    #[test]
    fn archived_filter_matches_contract(convos in arb_conversations(12)) {
        let expected: Vec<i64> = convos
            .iter()
            .filter(|c| c.is_archived)
            .map(|c| c.id)
            .collect();

        let state = MessagingState::new(convos);
        let got: Vec<i64> = state
            .visible_conversations(&ConversationFilter::category(CategoryFilter::Archived))
            .iter()
            .map(|c| c.id)
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// Any projection is a subsequence of store order.
    #[test]
    fn projection_preserves_store_order(
        convos in arb_conversations(12),
        term in arb_search_term(),
    ) {
        let order: Vec<i64> = convos.iter().map(|c| c.id).collect();
        let state = MessagingState::new(convos);
        let got: Vec<i64> = state
            .visible_conversations(&ConversationFilter {
                category: CategoryFilter::All,
                search: term,
            })
            .iter()
            .map(|c| c.id)
            .collect();

        let mut cursor = order.iter();
        for id in &got {
            prop_assert!(
                cursor.any(|o| o == id),
                "id {} out of store order", id
            );
        }
    }

    /// `mark_all_read` flips every record and never
    /// changes the collection length.
    #[test]
    fn mark_all_read_contract(items in arb_notifications(20)) {
        let before = items.len();
        let mut center = NotificationCenter::new(items);
        center.mark_all_read();
        prop_assert_eq!(center.len(), before);
        prop_assert!(center.iter().all(|n| n.is_read));
        prop_assert_eq!(center.unread_count(), 0);
    }

    /// Dismiss removes exactly one record, and only when
    /// the record is dismissible.
    #[test]
    fn dismiss_contract(items in arb_notifications(20)) {
        let ids: Vec<(i64, bool)> = items.iter().map(|n| (n.id, n.can_dismiss)).collect();
        for (id, can_dismiss) in ids {
            let mut center = NotificationCenter::new(items.clone());
            let before = center.len();
            let removed = center.dismiss(id).unwrap();
            prop_assert_eq!(removed, can_dismiss);
            let expected = if can_dismiss { before - 1 } else { before };
            prop_assert_eq!(center.len(), expected);
            prop_assert_eq!(center.get(id).is_some(), !can_dismiss);
        }
    }

    /// Unread notification filter agrees with the derived counter.
    #[test]
    fn notification_unread_filter_matches_counter(items in arb_notifications(20)) {
        let center = NotificationCenter::new(items);
        let visible = center.visible(&NotificationFilter::kind(KindFilter::Unread));
        prop_assert_eq!(visible.len(), center.unread_count());
        prop_assert!(visible.iter().all(|n| !n.is_read));
    }
}
