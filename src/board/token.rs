use bevy::prelude::*;

/// Identifier of a token, unique for the lifetime of the board.
///
/// Derived from the creation timestamp in milliseconds and bumped when two
/// tokens are created within the same millisecond, so ids also sort in
/// creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u64);

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled item placed on the matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub label: String,
    pub color: Color,
    /// Top-left corner relative to the inside of the matrix border, in
    /// unscaled matrix pixels
    pub position: Vec2,
}
