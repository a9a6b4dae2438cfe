//! Property-based test generators for core models.
//!
//! Provides `proptest` strategies for participants, conversations, and
//! notifications. Generated values satisfy the constraints documented on
//! each type (two participants per thread, non-negative unread counts,
//! coherent `last_message` denormalization).

use proptest::prelude::*;

use crate::models::{
    Conversation, ConversationCategory, Message, Notification, NotificationKind, Participant,
    Priority, Role,
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Shared proptest configuration: 256 cases, generous shrink budget.
#[must_use]
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 2000,
        ..ProptestConfig::default()
    }
}

// ─── Leaf strategies ─────────────────────────────────────────────────────────

pub fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Patient), Just(Role::Doctor), Just(Role::Nurse)]
}

pub fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Normal),
        Just(Priority::High),
        Just(Priority::Urgent),
    ]
}

pub fn arb_category() -> impl Strategy<Value = ConversationCategory> {
    prop_oneof![
        Just(ConversationCategory::Medical),
        Just(ConversationCategory::Appointments),
        Just(ConversationCategory::Billing),
        Just(ConversationCategory::General),
    ]
}

pub fn arb_notification_kind() -> impl Strategy<Value = NotificationKind> {
    prop_oneof![
        Just(NotificationKind::Message),
        Just(NotificationKind::Appointment),
        Just(NotificationKind::TestResult),
        Just(NotificationKind::Medication),
        Just(NotificationKind::System),
    ]
}

/// Strategy for display names / subjects: 1–40 word-ish ASCII characters.
///
/// Kept to a printable alphabet so case-insensitive substring assertions in
/// property tests stay byte-predictable.
pub fn arb_display_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 .']{0,39}").expect("valid regex")
}

// ─── Composite strategies ────────────────────────────────────────────────────

pub fn arb_participant() -> impl Strategy<Value = Participant> {
    (1..=10_000i64, arb_display_text(), arb_role(), any::<bool>()).prop_map(
        |(id, name, role, is_online)| Participant {
            id,
            name,
            role,
            is_online,
        },
    )
}

/// Strategy for a conversation with a coherent thread.
///
/// The two participants, flags, and category vary freely; `last_message`
/// is derived from the generated thread so the denormalization invariant
/// holds on entry to every property.
pub fn arb_conversation() -> impl Strategy<Value = Conversation> {
    (
        1..=10_000i64,
        proptest::collection::vec(arb_participant(), 2),
        arb_display_text(),
        0u32..5,
        any::<bool>(),
        any::<bool>(),
        arb_category(),
        arb_priority(),
        proptest::collection::vec(arb_display_text(), 0..4),
    )
        .prop_map(
            |(id, participants, subject, unread, starred, archived, category, priority, bodies)| {
                let messages: Vec<Message> = bodies
                    .into_iter()
                    .enumerate()
                    .map(|(i, content)| Message {
                        id: id * 100 + i64::try_from(i).unwrap_or(0),
                        conversation_id: id,
                        content,
                        sender_id: participants[i % 2].id,
                        sender_name: participants[i % 2].name.clone(),
                        sender_role: participants[i % 2].role,
                        ..Message::default()
                    })
                    .collect();
                Conversation {
                    id,
                    last_message: messages.last().cloned(),
                    participants,
                    subject,
                    unread_count: unread,
                    is_starred: starred,
                    is_archived: archived,
                    category,
                    priority,
                    messages,
                    ..Conversation::default()
                }
            },
        )
}

pub fn arb_notification() -> impl Strategy<Value = Notification> {
    (
        1..=10_000i64,
        arb_notification_kind(),
        arb_display_text(),
        arb_display_text(),
        any::<bool>(),
        arb_priority(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(id, kind, title, message, is_read, priority, can_dismiss, requires_action)| {
                Notification {
                    id,
                    kind,
                    title,
                    message,
                    is_read,
                    priority,
                    can_dismiss,
                    requires_action,
                    ..Notification::default()
                }
            },
        )
}

/// A store-sized collection of conversations with unique ids.
pub fn arb_conversations(max: usize) -> impl Strategy<Value = Vec<Conversation>> {
    proptest::collection::vec(arb_conversation(), 0..=max).prop_map(|mut convos| {
        for (i, convo) in convos.iter_mut().enumerate() {
            let id = i64::try_from(i).unwrap_or(0) + 1;
            convo.id = id;
            for msg in &mut convo.messages {
                msg.conversation_id = id;
            }
            if let Some(last) = convo.last_message.as_mut() {
                last.conversation_id = id;
            }
        }
        convos
    })
}

/// A store-sized collection of notifications with unique ids.
pub fn arb_notifications(max: usize) -> impl Strategy<Value = Vec<Notification>> {
    proptest::collection::vec(arb_notification(), 0..=max).prop_map(|mut items| {
        for (i, n) in items.iter_mut().enumerate() {
            n.id = i64::try_from(i).unwrap_or(0) + 1;
        }
        items
    })
}
