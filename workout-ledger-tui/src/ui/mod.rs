// src/ui/mod.rs

// Declare UI component modules
mod layout;
mod log_tab;
mod login;
mod modals;
mod stats;
mod status_bar;
mod tabs;

// Re-export the main render function
pub use layout::render_ui;
