mod component;
mod config;
mod error;
mod geometry;
mod gesture;
mod layout;
mod palette;
mod render;
mod state;
mod store;
mod types;

pub use component::LinkEditorCanvas;
pub use config::EditorConfig;
pub use types::{EditorStatus, GraphData, GraphNode};
