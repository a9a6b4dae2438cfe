//! Stateful view engine for the CareLink portal.
//!
//! This crate provides:
//! - [`messaging::MessagingState`] — conversation store, sidebar
//!   filter/projection, and the message composer
//! - [`notify::NotificationCenter`] — the parallel notification collection
//!   with read/dismiss transitions
//! - [`session::Session`] — the auth context owning the signed-in user
//! - [`dashboard::DashboardView`] — role-based dashboard dispatch
//!
//! Everything is in-memory and single-threaded: state transitions are
//! synchronous `&mut self` calls driven by UI events, and all data resets
//! with the process.

#![forbid(unsafe_code)]

pub mod dashboard;
pub mod messaging;
pub mod notify;
pub mod session;

// Re-export key types for convenience
pub use dashboard::{DashboardSection, DashboardView};
pub use messaging::{CategoryFilter, ConversationFilter, MessagingState};
pub use notify::{KindFilter, NotificationCenter, NotificationFilter};
pub use session::{MIN_PASSWORD_LEN, RegisterForm, Session, UserPatch};
