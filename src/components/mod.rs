//! Reusable UI components.

pub mod link_editor;
