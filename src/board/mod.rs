//! Board state: the ordered collection of tokens on the matrix.
//!
//! ## Module Structure
//!
//! - [`token`] - Token and id types
//! - [`state`] - The [`Board`] resource and its operations
//! - [`messages`] - Mutation requests sent by the UI
//! - [`systems`] - Systems applying those requests

mod messages;
mod state;
mod systems;
mod token;

#[cfg(test)]
mod tests;

pub use messages::{AddTokenRequest, RemoveTokenRequest, RepositionTokenRequest};
pub use state::Board;
pub use token::{Token, TokenId};

use bevy::prelude::*;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Board>()
            .add_message::<AddTokenRequest>()
            .add_message::<RemoveTokenRequest>()
            .add_message::<RepositionTokenRequest>()
            .add_systems(
                Update,
                (
                    systems::add_token_system.run_if(on_message::<AddTokenRequest>),
                    systems::remove_token_system.run_if(on_message::<RemoveTokenRequest>),
                    systems::reposition_token_system
                        .run_if(on_message::<RepositionTokenRequest>),
                )
                    .chain(),
            );
    }
}
