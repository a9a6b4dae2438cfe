//! Notification center: read-state transitions and filtered projection.
//!
//! A parallel collection to the conversation store. `Message`-kind records
//! reference their source thread only through `metadata`; nothing keeps the
//! two in sync, by design.

use indexmap::IndexMap;
use tracing::{debug, info};

use carelink_core::config::Config;
use carelink_core::error::{Error, Result};
use carelink_core::models::{Notification, NotificationKind};

// ────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────

/// Category selector for the notification panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    /// Only unread records.
    Unread,
    /// Exact kind match.
    Kind(NotificationKind),
}

/// What the notification panel is currently asking for.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub kind: KindFilter,
    /// Case-insensitive substring over title and message body.
    pub search: String,
}

impl NotificationFilter {
    #[must_use]
    pub fn kind(kind: KindFilter) -> Self {
        Self {
            kind,
            search: String::new(),
        }
    }
}

/// Ordered notification collection with read/dismiss transitions.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: IndexMap<i64, Notification>,
}

// ────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────

impl NotificationCenter {
    /// Build a center from seed notifications, preserving their order.
    #[must_use]
    pub fn new(seed: Vec<Notification>) -> Self {
        Self {
            items: seed.into_iter().map(|n| (n.id, n)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.values()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Notification> {
        self.items.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mark one record read; every other record is untouched.
    pub fn mark_read(&mut self, id: i64) -> Result<()> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(Error::NotificationNotFound(id))?;
        item.is_read = true;
        debug!(notification_id = id, "notification marked read");
        Ok(())
    }

    /// Mark every record read. Length is unchanged.
    pub fn mark_all_read(&mut self) {
        for item in self.items.values_mut() {
            item.is_read = true;
        }
        debug!(count = self.items.len(), "all notifications marked read");
    }

    /// Remove a record iff it is dismissible.
    ///
    /// Returns `Ok(true)` when removed, `Ok(false)` as a silent no-op for
    /// non-dismissible records (the panel never offers the button for
    /// those), and `NotificationNotFound` for unknown ids.
    pub fn dismiss(&mut self, id: i64) -> Result<bool> {
        let item = self.items.get(&id).ok_or(Error::NotificationNotFound(id))?;
        if !item.can_dismiss {
            return Ok(false);
        }
        // shift_remove keeps panel order for the survivors.
        self.items.shift_remove(&id);
        info!(notification_id = id, "notification dismissed");
        Ok(true)
    }

    /// Count of unread records.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.values().filter(|n| !n.is_read).count()
    }

    /// Badge text for the bell icon, capped per config ("99+").
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        let unread = self.unread_count();
        if unread == 0 {
            return None;
        }
        let cap = Config::global().unread_badge_cap;
        if unread > cap {
            Some(format!("{cap}+"))
        } else {
            Some(unread.to_string())
        }
    }

    /// The panel's visible subset, in store order.
    ///
    /// Same two-predicate shape as the conversation sidebar: search AND
    /// category selector. There is no archived axis here.
    #[must_use]
    pub fn visible(&self, filter: &NotificationFilter) -> Vec<&Notification> {
        self.items
            .values()
            .filter(|n| matches_kind(n, filter.kind) && matches_search(n, &filter.search))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────
// Internal: filter predicates
// ────────────────────────────────────────────────────────────────────

fn matches_kind(n: &Notification, kind: KindFilter) -> bool {
    match kind {
        KindFilter::All => true,
        KindFilter::Unread => !n.is_read,
        KindFilter::Kind(k) => n.kind == k,
    }
}

fn matches_search(n: &Notification, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() || term.len() < Config::global().search_min_chars {
        return true;
    }
    n.title.to_lowercase().contains(&term) || n.message.to_lowercase().contains(&term)
}

// ────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i64, title: &str, kind: NotificationKind) -> Notification {
        Notification {
            id,
            kind,
            title: title.to_string(),
            message: format!("{title} body"),
            ..Notification::default()
        }
    }

    fn sample_center() -> NotificationCenter {
        let mut sticky = notification(3, "Maintenance window", NotificationKind::System);
        sticky.can_dismiss = false;
        NotificationCenter::new(vec![
            notification(1, "New message", NotificationKind::Message),
            notification(2, "Upcoming appointment", NotificationKind::Appointment),
            sticky,
        ])
    }

    #[test]
    fn mark_read_touches_only_target() {
        let mut center = sample_center();
        center.mark_read(2).unwrap();
        assert!(center.get(2).unwrap().is_read);
        assert!(!center.get(1).unwrap().is_read);
        assert!(!center.get(3).unwrap().is_read);
    }

    #[test]
    fn mark_read_unknown_id_errors() {
        let mut center = sample_center();
        let err = center.mark_read(99).unwrap_err();
        assert_eq!(err.error_type(), "NOT_FOUND");
    }

    #[test]
    fn mark_all_read_preserves_length() {
        let mut center = sample_center();
        center.mark_all_read();
        assert_eq!(center.len(), 3);
        assert!(center.iter().all(|n| n.is_read));
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn dismiss_removes_exactly_one() {
        let mut center = sample_center();
        assert!(center.dismiss(1).unwrap());
        assert_eq!(center.len(), 2);
        assert!(center.get(1).is_none());
        // Survivors keep panel order.
        let ids: Vec<i64> = center.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn dismiss_non_dismissible_is_noop() {
        let mut center = sample_center();
        assert!(!center.dismiss(3).unwrap());
        assert_eq!(center.len(), 3);
        assert!(center.get(3).is_some());
    }

    #[test]
    fn dismiss_unknown_id_errors() {
        let mut center = sample_center();
        assert_eq!(
            center.dismiss(99).unwrap_err().error_type(),
            "NOT_FOUND"
        );
    }

    #[test]
    fn visible_unread_filter() {
        let mut center = sample_center();
        center.mark_read(1).unwrap();
        let visible = center.visible(&NotificationFilter::kind(KindFilter::Unread));
        let ids: Vec<i64> = visible.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn visible_kind_filter_is_exact() {
        let center = sample_center();
        let visible = center.visible(&NotificationFilter::kind(KindFilter::Kind(
            NotificationKind::Appointment,
        )));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn visible_search_covers_title_and_body() {
        let center = sample_center();
        let by_title = center.visible(&NotificationFilter {
            kind: KindFilter::All,
            search: "MAINTENANCE".to_string(),
        });
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 3);

        let by_body = center.visible(&NotificationFilter {
            kind: KindFilter::All,
            search: "appointment body".to_string(),
        });
        assert_eq!(by_body.len(), 1);
        assert_eq!(by_body[0].id, 2);
    }

    #[test]
    fn search_and_kind_are_anded() {
        let center = sample_center();
        let visible = center.visible(&NotificationFilter {
            kind: KindFilter::Kind(NotificationKind::Message),
            search: "maintenance".to_string(),
        });
        assert!(visible.is_empty());
    }

    #[test]
    fn badge_label_caps_at_config_limit() {
        let many: Vec<Notification> = (1..=120)
            .map(|id| notification(id, "n", NotificationKind::System))
            .collect();
        let center = NotificationCenter::new(many);
        assert_eq!(center.badge_label().as_deref(), Some("99+"));

        let mut read_all = center.clone();
        read_all.mark_all_read();
        assert_eq!(read_all.badge_label(), None);

        let few = NotificationCenter::new(vec![notification(1, "n", NotificationKind::System)]);
        assert_eq!(few.badge_label().as_deref(), Some("1"));
    }
}
