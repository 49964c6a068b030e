//! The board resource: ordered collection of live tokens.

use bevy::prelude::*;

use crate::constants::MAX_LABEL_CHARS;
use crate::theme::palette_color;

use super::token::{Token, TokenId};

/// Ordered collection of all live tokens, in insertion order.
///
/// Every operation is total: invalid input and unknown ids are no-ops.
#[derive(Resource, Debug, Default)]
pub struct Board {
    tokens: Vec<Token>,
    /// Highest id handed out so far
    last_id: u64,
}

impl Board {
    /// Add a token labeled with the trimmed `label`, cut to
    /// [`MAX_LABEL_CHARS`] characters.
    ///
    /// Returns `None` without touching the board when the label is blank.
    pub fn add(&mut self, label: &str) -> Option<TokenId> {
        self.add_at(label, chrono::Utc::now().timestamp_millis())
    }

    /// Same as [`Board::add`] with an explicit creation timestamp
    pub(crate) fn add_at(&mut self, label: &str, timestamp_ms: i64) -> Option<TokenId> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let label: String = label.chars().take(MAX_LABEL_CHARS).collect();
        let id = self.next_id(timestamp_ms);
        let color = palette_color(self.tokens.len());
        self.tokens.push(Token {
            id,
            label: label.trim_end().to_string(),
            color,
            position: Vec2::ZERO,
        });
        Some(id)
    }

    /// Remove the token with `id`. Returns whether a token was removed.
    pub fn remove(&mut self, id: TokenId) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|token| token.id != id);
        self.tokens.len() != before
    }

    /// Move the token with `id` to `position`, clamped into `bounds`.
    ///
    /// `bounds` is the rectangle of legal top-left positions for that token.
    /// Returns whether the token exists.
    pub fn reposition(&mut self, id: TokenId, position: Vec2, bounds: Rect) -> bool {
        let Some(token) = self.tokens.iter_mut().find(|token| token.id == id) else {
            return false;
        };
        token.position = position.clamp(bounds.min, bounds.max);
        true
    }

    /// Read-only view of the tokens in insertion order
    pub fn list(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id == id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn next_id(&mut self, timestamp_ms: i64) -> TokenId {
        let candidate = u64::try_from(timestamp_ms).unwrap_or(0);
        self.last_id = candidate.max(self.last_id + 1);
        TokenId(self.last_id)
    }
}
