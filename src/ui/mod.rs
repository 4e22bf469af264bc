/// UI module exports
pub mod app;
pub mod auth_panel;
pub mod components;
pub mod content_input;
pub mod dashboard;
pub mod tool_preview;
