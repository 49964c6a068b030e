//! The drawable tree of the matrix region.
//!
//! The live view paints a [`Scene`] with the egui painter under an on-screen
//! [`SceneTransform`]; the capture pipeline rasterizes a normalized copy of
//! the same scene. Both therefore show exactly the same content.
//!
//! ## Module Structure
//!
//! - [`nodes`] - Primitive nodes, the root transform and token hit areas
//! - [`tree`] - The [`Scene`] container and its measurements
//! - [`builder`] - Building a scene from the board and matrix layout

mod builder;
mod nodes;
mod tree;


pub use builder::{build_scene, token_size};
pub use nodes::{SceneNode, SceneTransform, TextOrientation};
pub use tree::{LiveView, Scene};
