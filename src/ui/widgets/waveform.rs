// src/ui/widgets/waveform.rs
//! Paints a computed waveform layout onto a ratatui canvas.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line, Rectangle},
    },
    Frame,
};

use crate::player::RenderTarget;
use crate::waveform::WaveformLayout;

/// Braille cells hold 2x4 dots.
const DOTS_PER_COLUMN: f64 = 2.0;
const DOTS_PER_ROW: f64 = 4.0;

/// Render target backed by a terminal area. Coordinates are braille dots.
#[derive(Debug, Default)]
pub struct WaveformCanvas {
    cells: (u16, u16),
    layout: Option<WaveformLayout>,
}

impl WaveformCanvas {
    pub fn new(cells: (u16, u16)) -> Self {
        Self {
            cells,
            layout: None,
        }
    }

    pub fn cells(&self) -> (u16, u16) {
        self.cells
    }

    /// Change the area size. The caller redraws the chart afterwards.
    pub fn resize(&mut self, cells: (u16, u16)) {
        self.cells = cells;
    }

    pub fn layout(&self) -> Option<&WaveformLayout> {
        self.layout.as_ref()
    }
}

impl RenderTarget for WaveformCanvas {
    fn dimensions(&self) -> (f64, f64) {
        (
            f64::from(self.cells.0) * DOTS_PER_COLUMN,
            f64::from(self.cells.1) * DOTS_PER_ROW,
        )
    }

    fn render(&mut self, layout: WaveformLayout) {
        self.layout = Some(layout);
    }
}

/// Render the chart with a playhead at `progress` (0..1 of the track).
pub fn render_waveform(f: &mut Frame<'_>, area: Rect, layout: Option<&WaveformLayout>, progress: f64) {
    let block = Block::default().borders(Borders::ALL).title("Waveform");

    let Some(layout) = layout else {
        f.render_widget(
            Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Gray))
                .block(block),
            area,
        );
        return;
    };

    // Layout y grows downwards, canvas y grows upwards
    let (width, height) = (layout.width, layout.height);
    let flip = move |y: f64| height - y;
    let playhead = progress.clamp(0.0, 1.0) * width;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for line in &layout.grid {
                ctx.draw(&Line {
                    x1: line.x1,
                    y1: flip(line.y1),
                    x2: line.x2,
                    y2: flip(line.y2),
                    color: Color::DarkGray,
                });
            }
            ctx.layer();

            for bar in &layout.bars {
                ctx.draw(&Rectangle {
                    x: bar.x,
                    y: flip(bar.y + bar.height),
                    width: bar.width,
                    height: bar.height,
                    color: Color::Cyan,
                });
            }
            ctx.layer();

            ctx.draw(&Line {
                x1: playhead,
                y1: 0.0,
                x2: playhead,
                y2: height,
                color: Color::Red,
            });

            for tick in &layout.ticks {
                ctx.print(tick.x, 0.0, tick.label.clone());
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_in_braille_dots() {
        let mut canvas = WaveformCanvas::new((40, 10));
        assert_eq!(canvas.dimensions(), (80.0, 40.0));
        canvas.resize((10, 2));
        assert_eq!(canvas.dimensions(), (20.0, 8.0));
        assert!(canvas.layout().is_none());

        canvas.render(WaveformLayout::default());
        assert!(canvas.layout().is_some());
    }
}
