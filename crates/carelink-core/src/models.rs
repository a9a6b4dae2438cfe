//! Data models for the CareLink portal.
//!
//! These records mirror the view props the portal renders: conversation
//! threads, notifications, the signed-in user, and the display-only patient
//! cards. All datetime fields use naive UTC. Tags the portal keeps as string
//! literals are closed enums here with explicit serde renames, so the JSON
//! shape matches the original dataset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Tag enums
// =============================================================================

/// Portal role of a user or participant.
///
/// Closed set; dashboard dispatch is a `match` over this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Nurse,
}

impl Role {
    /// Lowercase tag as the portal dataset spells it; also used as a
    /// structured log field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
        }
    }
}

/// Message/conversation priority.
///
/// # Levels
/// - "normal", "high", "urgent"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    /// Ordering rank: urgent > high > normal.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Urgent => 3,
            Self::High => 2,
            Self::Normal => 1,
        }
    }
}

/// Topical category tag on a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationCategory {
    Medical,
    Appointments,
    Billing,
    #[default]
    General,
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Message,
    Appointment,
    TestResult,
    Medication,
    System,
}

/// Nurse/doctor-assigned severity tag on a patient card. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcuityLevel {
    #[default]
    Low,
    Medium,
    High,
}

// =============================================================================
// User
// =============================================================================

/// The signed-in account identity.
///
/// The messaging engine treats this as an opaque (id, name, role) triple;
/// everything else belongs to the session module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Simulated 2FA flag. Toggling it performs no real enrollment.
    pub two_factor_enabled: bool,
}

// =============================================================================
// Participant
// =============================================================================

/// One party in a conversation (exactly two per thread in this dataset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub is_online: bool,
}

// =============================================================================
// Message
// =============================================================================

/// A file descriptor attached to a message. Display-only, no real upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// A single message in a conversation thread.
///
/// Created on send and appended to the owning thread; never mutated or
/// deleted in-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub content: String,
    pub sender_id: i64,
    pub sender_name: String,
    pub sender_role: Role,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
    pub priority: Priority,
    pub attachments: Vec<Attachment>,
    /// Reserved by the portal dataset; nothing writes to it.
    pub reactions: Vec<String>,
    pub is_edited: bool,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            id: 0,
            conversation_id: 0,
            content: String::new(),
            sender_id: 0,
            sender_name: String::new(),
            sender_role: Role::Patient,
            created_at: chrono::Utc::now().naive_utc(),
            is_read: false,
            priority: Priority::Normal,
            attachments: Vec::new(),
            reactions: Vec::new(),
            is_edited: false,
        }
    }
}

// =============================================================================
// Conversation
// =============================================================================

/// A thread of messages between two participants.
///
/// # Denormalization
/// `last_message` is a copy of the newest entry in `messages`. Every append
/// must refresh it in the same call; the store enforces this.
///
/// # Inert unread counter
/// `unread_count` is seed data. Selecting or reading a conversation never
/// decrements it — the portal behaves this way, and whether that is a stub
/// or intended is an open product decision. Do not wire reads to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub participants: Vec<Participant>,
    pub subject: String,
    pub last_message: Option<Message>,
    pub unread_count: u32,
    pub is_starred: bool,
    pub is_archived: bool,
    pub category: ConversationCategory,
    pub priority: Priority,
    pub created_at: NaiveDateTime,
    pub messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            id: 0,
            participants: Vec::new(),
            subject: String::new(),
            last_message: None,
            unread_count: 0,
            is_starred: false,
            is_archived: false,
            category: ConversationCategory::General,
            priority: Priority::Normal,
            created_at: chrono::Utc::now().naive_utc(),
            messages: Vec::new(),
        }
    }
}

// =============================================================================
// Notification
// =============================================================================

/// A portal notification.
///
/// Independent lifecycle from conversations: a `Message`-kind notification
/// references its source thread only through `metadata`, with no referential
/// integrity enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
    pub priority: Priority,
    /// Dead link; the portal never routes it.
    pub action_url: Option<String>,
    /// Loosely-typed bag keyed by `kind` (appointment ids, result codes...).
    pub metadata: serde_json::Value,
    pub category: String,
    pub can_dismiss: bool,
    pub requires_action: bool,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            id: 0,
            kind: NotificationKind::System,
            title: String::new(),
            message: String::new(),
            created_at: chrono::Utc::now().naive_utc(),
            is_read: false,
            priority: Priority::Normal,
            action_url: None,
            metadata: serde_json::Value::Null,
            category: String::new(),
            can_dismiss: true,
            requires_action: false,
        }
    }
}

// =============================================================================
// Patient cards
// =============================================================================

/// A medication row on a patient card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dose: String,
    pub schedule: String,
    /// "As needed" administration. Domain term carried from the dataset;
    /// not used in any computed logic.
    pub prn: bool,
}

/// Mock patient record shown on doctor/nurse dashboards. Display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientCard {
    pub id: i64,
    pub name: String,
    pub acuity: AcuityLevel,
    pub medications: Vec<Medication>,
}
