// src/ui/widgets/mod.rs
//! Custom widgets for the wavedeck UI.

pub mod transport_panel;
pub mod waveform;

// Re-export widget rendering functions
pub use transport_panel::{TransportView, render_transport_panel};
pub use waveform::{WaveformCanvas, render_waveform};
