// src/ui/mod.rs
//! UI module - terminal rendering of the waveform and transport controls.

pub mod keybindings;
pub mod layout;
pub mod tui;
pub mod widgets;

// Re-export main entry point
pub use tui::run;
