//! Message types for board mutations.

use bevy::prelude::*;

use super::token::TokenId;

/// Request to add a token with the given label
#[derive(Message)]
pub struct AddTokenRequest {
    pub label: String,
}

/// Request to delete a token
#[derive(Message)]
pub struct RemoveTokenRequest {
    pub id: TokenId,
}

/// Request to store a token's position at the end of a drag gesture
#[derive(Message)]
pub struct RepositionTokenRequest {
    pub id: TokenId,
    pub position: Vec2,
    /// Legal top-left positions for this token
    pub bounds: Rect,
}
