//! Core types, configuration, and models for the CareLink portal state engine.
//!
//! This crate provides:
//! - Data models (`Conversation`, `Message`, `Notification`, `User`, ...)
//! - Configuration management (`Config`, environment parsing)
//! - Common error types
//! - `proptest` strategies behind the `testing` feature

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod models;

#[cfg(any(test, feature = "testing"))]
pub mod proptest_generators;

// Re-export key types for convenience
pub use config::{AppEnvironment, Config};
pub use error::{Error, Result};
pub use models::{
    AcuityLevel, Attachment, Conversation, ConversationCategory, Medication, Message,
    Notification, NotificationKind, Participant, PatientCard, Priority, Role, User,
};
