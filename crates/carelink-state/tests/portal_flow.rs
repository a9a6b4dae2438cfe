//! End-to-end flow over the seeded demo dataset: sign in, filter the
//! sidebar, read a thread, reply, and work the notification panel.

use carelink_core::models::{NotificationKind, Priority, Role};
use carelink_fixtures::{seed_accounts, seed_conversations, seed_notifications};
use carelink_state::{
    CategoryFilter, ConversationFilter, DashboardSection, DashboardView, KindFilter,
    MessagingState, NotificationCenter, NotificationFilter, Session,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn patient_reads_reminder_and_replies() {
    init_tracing();

    let mut session = Session::with_accounts(seed_accounts());
    let user = session.login("john@carelink.demo", "patient123").unwrap();
    assert_eq!(user.role, Role::Patient);
    assert!(DashboardView::for_role(user.role)
        .sections
        .contains(&DashboardSection::Messages));

    let mut state = MessagingState::new(seed_conversations());

    // The unread tab shows only the reminder thread.
    let unread =
        state.visible_conversations(&ConversationFilter::category(CategoryFilter::Unread));
    assert_eq!(unread.len(), 1);
    let reminder_id = unread[0].id;
    assert_eq!(unread[0].subject, "Appointment Reminder");

    // Opening it does not decrement the seeded counter.
    state.select_conversation(reminder_id).unwrap();
    assert_eq!(state.get(reminder_id).unwrap().unread_count, 2);

    // Reply through the composer.
    state.set_draft("Thanks, I'll be there early.");
    state.set_draft_priority(Priority::High);
    let sent = state.send_message(&user).unwrap().expect("reply sent");

    let convo = state.get(reminder_id).unwrap();
    assert_eq!(convo.messages.last().map(|m| m.id), Some(sent));
    assert_eq!(convo.last_message.as_ref().map(|m| m.id), Some(sent));
    assert_eq!(
        convo.last_message.as_ref().map(|m| m.sender_id),
        Some(user.id)
    );
    assert_eq!(state.draft(), "");
    assert_eq!(state.draft_priority(), Priority::Normal);

    session.logout();
    assert!(!session.is_signed_in());
}

#[test]
fn sidebar_search_narrows_by_care_team_member() {
    let state = MessagingState::new(seed_conversations());

    // Dr. Johnson appears on the blood-pressure and lab threads; the
    // archived billing thread stays hidden even though John is on it.
    let visible = state.visible_conversations(&ConversationFilter::search("johnson"));
    let subjects: Vec<&str> = visible.iter().map(|c| c.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Blood Pressure", "Lab Results"]);

    let archived =
        state.visible_conversations(&ConversationFilter::category(CategoryFilter::Archived));
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].subject, "January Billing Question");
}

#[test]
fn notification_panel_read_and_dismiss_flow() {
    init_tracing();

    let mut center = NotificationCenter::new(seed_notifications());
    assert_eq!(center.unread_count(), 4);
    assert_eq!(center.badge_label().as_deref(), Some("4"));

    // Opening the message notification marks just that one.
    center.mark_read(1).unwrap();
    assert_eq!(center.unread_count(), 3);

    // The medication alert can be dismissed; the maintenance notice cannot.
    assert!(center.dismiss(4).unwrap());
    assert!(!center.dismiss(5).unwrap());
    assert_eq!(center.len(), 4);

    // Kind filter plus search compose.
    let appointments = center.visible(&NotificationFilter {
        kind: KindFilter::Kind(NotificationKind::Appointment),
        search: "physical".to_string(),
    });
    assert_eq!(appointments.len(), 1);
    assert!(appointments[0].requires_action);

    center.mark_all_read();
    assert_eq!(center.badge_label(), None);
}
