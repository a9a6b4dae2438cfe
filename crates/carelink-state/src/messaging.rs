//! Conversation store, filter/projection layer, and message composer.
//!
//! # Architecture
//!
//! - [`MessagingState`] owns the ordered conversation collection, the
//!   current selection, and the composer draft.
//! - [`ConversationFilter`] describes what the sidebar shows (category
//!   selector + free-text search); [`MessagingState::visible_conversations`]
//!   applies it.
//! - [`MessagingState::send_message`] is the composer submit path:
//!   validate, append, refresh `last_message`, clear the draft.
//!
//! Store order is seed order; filtering never re-sorts.

use indexmap::IndexMap;
use tracing::info;

use carelink_core::config::Config;
use carelink_core::error::{Error, Result};
use carelink_core::models::{Conversation, ConversationCategory, Message, Priority, User};

// ────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────

/// Category selector for the conversation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Everything not archived.
    #[default]
    All,
    /// Only conversations with a positive unread counter.
    Unread,
    /// Only starred conversations.
    Starred,
    /// Only archived conversations (the one selector that shows them).
    Archived,
    /// Exact category tag match.
    Category(ConversationCategory),
}

/// What the sidebar is currently asking for.
#[derive(Debug, Clone, Default)]
pub struct ConversationFilter {
    pub category: CategoryFilter,
    /// Case-insensitive substring over participant names and the subject.
    /// Empty matches everything.
    pub search: String,
}

impl ConversationFilter {
    /// Filter with a category selector and no search term.
    #[must_use]
    pub fn category(category: CategoryFilter) -> Self {
        Self {
            category,
            search: String::new(),
        }
    }

    /// Filter with a search term over all non-archived conversations.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: CategoryFilter::All,
            search: term.into(),
        }
    }
}

/// The messaging page's whole mutable state.
#[derive(Debug, Clone)]
pub struct MessagingState {
    conversations: IndexMap<i64, Conversation>,
    selected: Option<i64>,
    draft: String,
    draft_priority: Priority,
    /// Priority the composer resets to after a send (from config).
    reset_priority: Priority,
    next_message_id: i64,
}

// ────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────

impl MessagingState {
    /// Build a store from seed conversations, preserving their order.
    #[must_use]
    pub fn new(seed: Vec<Conversation>) -> Self {
        let next_message_id = seed
            .iter()
            .flat_map(|c| c.messages.iter().map(|m| m.id))
            .max()
            .unwrap_or(0)
            + 1;
        let reset_priority = Config::global().default_priority;
        Self {
            conversations: seed.into_iter().map(|c| (c.id, c)).collect(),
            selected: None,
            draft: String::new(),
            draft_priority: reset_priority,
            reset_priority,
            next_message_id,
        }
    }

    /// All conversations in store order.
    pub fn conversations(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.values()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Conversation> {
        self.conversations.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Sum of seeded unread counters, for the sidebar badge.
    #[must_use]
    pub fn unread_total(&self) -> u32 {
        self.conversations.values().map(|c| c.unread_count).sum()
    }

    // ── Selection ──

    /// Select a conversation for the thread pane.
    ///
    /// Does NOT decrement `unread_count`: the counter is inert seed data
    /// (see the note on [`Conversation`]). An unknown id leaves the previous
    /// selection in place.
    pub fn select_conversation(&mut self, id: i64) -> Result<()> {
        if !self.conversations.contains_key(&id) {
            return Err(Error::ConversationNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Conversation> {
        self.selected.and_then(|id| self.conversations.get(&id))
    }

    // ── Sidebar toggles ──

    /// Flip the star on a conversation; returns the new state.
    pub fn toggle_star(&mut self, id: i64) -> Result<bool> {
        let convo = self
            .conversations
            .get_mut(&id)
            .ok_or(Error::ConversationNotFound(id))?;
        convo.is_starred = !convo.is_starred;
        Ok(convo.is_starred)
    }

    /// Flip the archived flag; returns the new state.
    ///
    /// Archiving the selected conversation keeps the selection — the thread
    /// pane stays open even though the sidebar row disappears.
    pub fn toggle_archive(&mut self, id: i64) -> Result<bool> {
        let convo = self
            .conversations
            .get_mut(&id)
            .ok_or(Error::ConversationNotFound(id))?;
        convo.is_archived = !convo.is_archived;
        Ok(convo.is_archived)
    }

    // ── Composer ──

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    #[must_use]
    pub const fn draft_priority(&self) -> Priority {
        self.draft_priority
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft_priority = priority;
    }

    /// Composer submit.
    ///
    /// No-op (`Ok(None)`, zero state change) when the trimmed draft is empty
    /// or nothing is selected. Otherwise appends one message to the selected
    /// thread, refreshes `last_message` in the same call, clears the draft,
    /// and resets the priority picker.
    pub fn send_message(&mut self, sender: &User) -> Result<Option<i64>> {
        let Some(conversation_id) = self.selected else {
            return Ok(None);
        };
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return Ok(None);
        }
        let id = self.append(conversation_id, sender, &text, self.draft_priority)?;
        self.draft.clear();
        self.draft_priority = self.reset_priority;
        Ok(Some(id))
    }

    /// Lower-level send, bypassing the composer draft.
    pub fn send_to(
        &mut self,
        conversation_id: i64,
        sender: &User,
        text: &str,
        priority: Priority,
    ) -> Result<i64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument("message text is empty".to_string()));
        }
        self.append(conversation_id, sender, trimmed, priority)
    }

    fn append(
        &mut self,
        conversation_id: i64,
        sender: &User,
        content: &str,
        priority: Priority,
    ) -> Result<i64> {
        let convo = self
            .conversations
            .get_mut(&conversation_id)
            .ok_or(Error::ConversationNotFound(conversation_id))?;
        let id = self.next_message_id;
        self.next_message_id += 1;

        let msg = Message {
            id,
            conversation_id,
            content: content.to_string(),
            sender_id: sender.id,
            sender_name: sender.name.clone(),
            sender_role: sender.role,
            created_at: chrono::Utc::now().naive_utc(),
            // The sender has obviously read their own message.
            is_read: true,
            priority,
            ..Message::default()
        };
        convo.messages.push(msg.clone());
        convo.last_message = Some(msg);

        // Simulated delivery; there is no transport behind this.
        info!(conversation_id, message_id = id, sender = %sender.name, "notifying recipient of new message");
        Ok(id)
    }

    // ── Projection ──

    /// The sidebar's visible subset, in store order.
    ///
    /// A conversation passes when the search predicate AND the category
    /// predicate both hold; archived conversations are excluded from every
    /// selector except [`CategoryFilter::Archived`].
    #[must_use]
    pub fn visible_conversations(&self, filter: &ConversationFilter) -> Vec<&Conversation> {
        self.conversations
            .values()
            .filter(|c| conversation_visible(c, filter))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────
// Internal: filter predicates
// ────────────────────────────────────────────────────────────────────

fn conversation_visible(convo: &Conversation, filter: &ConversationFilter) -> bool {
    if convo.is_archived && filter.category != CategoryFilter::Archived {
        return false;
    }
    matches_category(convo, filter.category) && matches_search(convo, &filter.search)
}

fn matches_category(convo: &Conversation, category: CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Unread => convo.unread_count > 0,
        CategoryFilter::Starred => convo.is_starred,
        CategoryFilter::Archived => convo.is_archived,
        CategoryFilter::Category(tag) => convo.category == tag,
    }
}

fn matches_search(convo: &Conversation, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() || term.len() < Config::global().search_min_chars {
        return true;
    }
    convo.subject.to_lowercase().contains(&term)
        || convo
            .participants
            .iter()
            .any(|p| p.name.to_lowercase().contains(&term))
}

// ────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────
