//! Deterministic mock dataset for the CareLink portal.
//!
//! Mirrors the static arrays the portal renders: message threads between the
//! demo patient and their care team, one notification per kind, the demo
//! sign-in accounts, and the display-only patient cards. Everything here is
//! fixed data — same values on every call — so tests can assert on names,
//! counts, and ids.

#![forbid(unsafe_code)]

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use carelink_core::models::{
    AcuityLevel, Conversation, ConversationCategory, Medication, Message, Notification,
    NotificationKind, Participant, PatientCard, Priority, Role, User,
};

/// Fixed timestamp helper; all seed data lives on the same demo day.
fn ts(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .expect("valid date")
        .and_hms_opt(hour, min, 0)
        .expect("valid time")
}

fn john() -> Participant {
    Participant {
        id: 1,
        name: "John Patient".to_string(),
        role: Role::Patient,
        is_online: true,
    }
}

fn dr_johnson() -> Participant {
    Participant {
        id: 2,
        name: "Dr. Sarah Johnson".to_string(),
        role: Role::Doctor,
        is_online: true,
    }
}

fn nurse_rodriguez() -> Participant {
    Participant {
        id: 3,
        name: "Nurse Emily Rodriguez".to_string(),
        role: Role::Nurse,
        is_online: false,
    }
}

fn message(
    id: i64,
    conversation_id: i64,
    sender: &Participant,
    content: &str,
    at: NaiveDateTime,
    is_read: bool,
) -> Message {
    Message {
        id,
        conversation_id,
        content: content.to_string(),
        sender_id: sender.id,
        sender_name: sender.name.clone(),
        sender_role: sender.role,
        created_at: at,
        is_read,
        ..Message::default()
    }
}

/// The demo conversation list, in sidebar order.
///
/// Unread counts are seed values (see the inert-counter note on
/// [`Conversation`]): thread 2 claims two unread even though its stored
/// messages carry their own `is_read` flags independently.
#[must_use]
pub fn seed_conversations() -> Vec<Conversation> {
    let bp_thread = vec![
        message(
            101,
            1,
            &dr_johnson(),
            "Your blood pressure readings from last week look much better.",
            ts(9, 15),
            true,
        ),
        message(
            102,
            1,
            &john(),
            "Thank you! I've been taking the medication every morning.",
            ts(9, 42),
            true,
        ),
    ];
    let reminder_thread = vec![
        message(
            201,
            2,
            &nurse_rodriguez(),
            "This is a reminder for your annual physical on Thursday at 2:00 PM.",
            ts(8, 0),
            false,
        ),
        message(
            202,
            2,
            &nurse_rodriguez(),
            "Please arrive 15 minutes early to update your insurance information.",
            ts(8, 5),
            false,
        ),
    ];
    let lab_thread = vec![message(
        301,
        3,
        &dr_johnson(),
        "Your lipid panel results are in. Everything is within normal range.",
        ts(11, 20),
        true,
    )];
    let billing_thread = vec![message(
        401,
        4,
        &john(),
        "I believe I was double-charged for the January visit.",
        ts(14, 30),
        true,
    )];

    vec![
        Conversation {
            id: 1,
            participants: vec![dr_johnson(), john()],
            subject: "Blood Pressure".to_string(),
            last_message: bp_thread.last().cloned(),
            unread_count: 0,
            is_starred: false,
            is_archived: false,
            category: ConversationCategory::Medical,
            priority: Priority::Normal,
            created_at: ts(9, 0),
            messages: bp_thread,
        },
        Conversation {
            id: 2,
            participants: vec![nurse_rodriguez(), john()],
            subject: "Appointment Reminder".to_string(),
            last_message: reminder_thread.last().cloned(),
            unread_count: 2,
            is_starred: false,
            is_archived: false,
            category: ConversationCategory::Appointments,
            priority: Priority::High,
            created_at: ts(7, 55),
            messages: reminder_thread,
        },
        Conversation {
            id: 3,
            participants: vec![dr_johnson(), john()],
            subject: "Lab Results".to_string(),
            last_message: lab_thread.last().cloned(),
            unread_count: 0,
            is_starred: true,
            is_archived: false,
            category: ConversationCategory::Medical,
            priority: Priority::Normal,
            created_at: ts(11, 0),
            messages: lab_thread,
        },
        Conversation {
            id: 4,
            participants: vec![john(), nurse_rodriguez()],
            subject: "January Billing Question".to_string(),
            last_message: billing_thread.last().cloned(),
            unread_count: 0,
            is_starred: false,
            is_archived: true,
            category: ConversationCategory::Billing,
            priority: Priority::Normal,
            created_at: ts(14, 0),
            messages: billing_thread,
        },
    ]
}

/// The demo notification list, one record per kind.
#[must_use]
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Message,
            title: "New message".to_string(),
            message: "Nurse Emily Rodriguez sent you a message".to_string(),
            created_at: ts(8, 5),
            is_read: false,
            priority: Priority::Normal,
            action_url: Some("/messages/2".to_string()),
            metadata: json!({ "conversation_id": 2, "sender": "Nurse Emily Rodriguez" }),
            category: "messages".to_string(),
            can_dismiss: true,
            requires_action: false,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Appointment,
            title: "Upcoming appointment".to_string(),
            message: "Annual physical with Dr. Sarah Johnson on Thursday 2:00 PM".to_string(),
            created_at: ts(8, 0),
            is_read: false,
            priority: Priority::High,
            action_url: Some("/appointments/17".to_string()),
            metadata: json!({ "appointment_id": 17, "provider": "Dr. Sarah Johnson" }),
            category: "appointments".to_string(),
            can_dismiss: true,
            requires_action: true,
        },
        Notification {
            id: 3,
            kind: NotificationKind::TestResult,
            title: "Test results available".to_string(),
            message: "Your lipid panel results are ready to view".to_string(),
            created_at: ts(11, 20),
            is_read: true,
            priority: Priority::Normal,
            action_url: Some("/results/88".to_string()),
            metadata: json!({ "result_id": 88, "panel": "lipid" }),
            category: "results".to_string(),
            can_dismiss: true,
            requires_action: false,
        },
        Notification {
            id: 4,
            kind: NotificationKind::Medication,
            title: "Refill due".to_string(),
            message: "Lisinopril refill due in 3 days".to_string(),
            created_at: ts(7, 0),
            is_read: false,
            priority: Priority::Urgent,
            action_url: None,
            metadata: json!({ "medication": "Lisinopril", "days_left": 3 }),
            category: "medications".to_string(),
            can_dismiss: true,
            requires_action: true,
        },
        Notification {
            id: 5,
            kind: NotificationKind::System,
            title: "Scheduled maintenance".to_string(),
            message: "The portal will be unavailable Sunday 2:00–4:00 AM".to_string(),
            created_at: ts(6, 0),
            is_read: false,
            priority: Priority::Normal,
            action_url: None,
            metadata: serde_json::Value::Null,
            category: "system".to_string(),
            can_dismiss: false,
            requires_action: false,
        },
    ]
}

/// Demo sign-in accounts as `(user, password)` pairs.
///
/// Plain passwords by design: there is no real credential storage in the
/// portal, only a lookup against this directory.
#[must_use]
pub fn seed_accounts() -> Vec<(User, String)> {
    vec![
        (
            User {
                id: 1,
                name: "John Patient".to_string(),
                email: "john@carelink.demo".to_string(),
                role: Role::Patient,
                two_factor_enabled: false,
            },
            "patient123".to_string(),
        ),
        (
            User {
                id: 2,
                name: "Dr. Sarah Johnson".to_string(),
                email: "sarah.johnson@carelink.demo".to_string(),
                role: Role::Doctor,
                two_factor_enabled: true,
            },
            "doctor123".to_string(),
        ),
        (
            User {
                id: 3,
                name: "Emily Rodriguez".to_string(),
                email: "emily.rodriguez@carelink.demo".to_string(),
                role: Role::Nurse,
                two_factor_enabled: false,
            },
            "nurse123".to_string(),
        ),
    ]
}

/// Display-only patient cards for the doctor/nurse dashboards.
#[must_use]
pub fn seed_patient_cards() -> Vec<PatientCard> {
    vec![
        PatientCard {
            id: 1,
            name: "John Patient".to_string(),
            acuity: AcuityLevel::Low,
            medications: vec![
                Medication {
                    name: "Lisinopril".to_string(),
                    dose: "10 mg".to_string(),
                    schedule: "daily".to_string(),
                    prn: false,
                },
                Medication {
                    name: "Ibuprofen".to_string(),
                    dose: "400 mg".to_string(),
                    schedule: "q6h".to_string(),
                    prn: true,
                },
            ],
        },
        PatientCard {
            id: 2,
            name: "Maria Gonzalez".to_string(),
            acuity: AcuityLevel::High,
            medications: vec![Medication {
                name: "Metformin".to_string(),
                dose: "500 mg".to_string(),
                schedule: "twice daily".to_string(),
                prn: false,
            }],
        },
        PatientCard {
            id: 3,
            name: "Robert Chen".to_string(),
            acuity: AcuityLevel::Medium,
            medications: Vec::new(),
        },
    ]
}
