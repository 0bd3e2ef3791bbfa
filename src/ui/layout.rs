// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Bordered area holding the waveform chart
    pub chart: Rect,
    /// Transport panel below the chart
    pub transport: Rect,
}

/// Split the terminal into the chart and a fixed-height transport panel.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(area);
    ComputedLayout {
        chart: chunks[0],
        transport: chunks[1],
    }
}

/// Drawable size inside the chart's border, in cells.
pub fn chart_inner(area: Rect) -> (u16, u16) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    (inner.width, inner.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_keeps_its_height() {
        let layout = compute_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.transport.height, 6);
        assert_eq!(layout.chart.height, 34);
        assert_eq!(chart_inner(layout.chart), (98, 32));
    }
}
