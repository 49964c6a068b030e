//! Bevy systems applying board mutation requests.

use bevy::prelude::*;

use super::messages::{AddTokenRequest, RemoveTokenRequest, RepositionTokenRequest};
use super::state::Board;

/// System to add tokens
pub fn add_token_system(mut events: MessageReader<AddTokenRequest>, mut board: ResMut<Board>) {
    for event in events.read() {
        match board.add(&event.label) {
            Some(id) => debug!("Added token {} {:?}", id, event.label.trim()),
            None => debug!("Ignored blank token label"),
        }
    }
}

/// System to delete tokens
pub fn remove_token_system(
    mut events: MessageReader<RemoveTokenRequest>,
    mut board: ResMut<Board>,
) {
    for event in events.read() {
        if board.remove(event.id) {
            debug!("Removed token {}", event.id);
        } else {
            debug!("Token {} already gone", event.id);
        }
    }
}

/// System to persist drag results into the board
pub fn reposition_token_system(
    mut events: MessageReader<RepositionTokenRequest>,
    mut board: ResMut<Board>,
) {
    for event in events.read() {
        if !board.reposition(event.id, event.position, event.bounds) {
            debug!("Dropped reposition for unknown token {}", event.id);
        }
    }
}
