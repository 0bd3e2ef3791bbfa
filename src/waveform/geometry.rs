// src/waveform/geometry.rs
//! Turn a waveform series into renderer-agnostic drawing primitives.
//!
//! Coordinates have their origin at the top-left of the container, y growing
//! downwards. Nothing here touches engine state.

use serde::Deserialize;

use super::extractor::{Bucketing, WaveformSeries};
use super::scale::{BandScale, LinearScale};
use super::time_axis::{DEFAULT_LABEL_INTERVAL_SECS, TimeAxis};

/// Number of grid lines each scale aims for.
const GRID_TICKS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Layout options. `width`/`height` default to the target's dimensions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaveformOptions {
    pub margin: Margin,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Fraction of each band a bar fills.
    pub padding: f64,
    pub label_interval_secs: u32,
    pub bucketing: Bucketing,
}

impl Default for WaveformOptions {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            width: None,
            height: None,
            padding: 1.0,
            label_interval_secs: DEFAULT_LABEL_INTERVAL_SECS,
            bucketing: Bucketing::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A rounded rectangle, centred on the horizontal midline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub label: String,
    pub x: f64,
}

/// Everything a renderer needs to paint the chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveformLayout {
    /// Container size the layout was computed for.
    pub width: f64,
    pub height: f64,
    pub grid: Vec<GridLine>,
    pub bars: Vec<Bar>,
    pub ticks: Vec<TimeTick>,
}

/// Lay out `series` and `axis` inside a `container` of (width, height).
pub fn compute_layout(
    series: &WaveformSeries,
    axis: &TimeAxis,
    container: (f64, f64),
    options: &WaveformOptions,
) -> WaveformLayout {
    let (container_width, container_height) = container;
    let width = options.width.unwrap_or(container_width);
    let height = options.height.unwrap_or(container_height);
    let margin = options.margin;

    let mut layout = WaveformLayout {
        width: container_width,
        height: container_height,
        ..WaveformLayout::default()
    };

    if let Some(extent) = series.extent() {
        let last_index = (series.len() - 1) as f64;
        let x_scale = LinearScale::new((0.0, last_index), (margin.left, width - margin.right));
        let y_scale = LinearScale::new(extent, (margin.top, height - margin.bottom));

        for t in x_scale.ticks(GRID_TICKS) {
            let x = 0.5 + x_scale.scale(t);
            layout.grid.push(GridLine {
                orientation: Orientation::Vertical,
                x1: x,
                y1: 0.0,
                x2: x,
                y2: container_height,
            });
        }
        for t in y_scale.ticks(GRID_TICKS) {
            let y = y_scale.scale(t);
            layout.grid.push(GridLine {
                orientation: Orientation::Horizontal,
                x1: 0.0,
                y1: y,
                x2: container_width,
                y2: y,
            });
        }

        let band = (width - margin.left - margin.right) / series.len() as f64;
        let midline = height / 2.0;
        layout.bars = series
            .values()
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let bar_height = y_scale.scale(v);
                Bar {
                    x: x_scale.scale(i as f64),
                    y: midline - bar_height / 2.0,
                    width: band * options.padding,
                    height: bar_height,
                    corner_radius: band / 2.0,
                }
            })
            .collect();
    }

    let bands = BandScale::new(axis.len(), (margin.left, width - margin.right));
    layout.ticks = axis
        .marks()
        .iter()
        .enumerate()
        .map(|(i, mark)| TimeTick {
            label: mark.label.clone(),
            x: bands.center(i),
        })
        .collect();

    layout
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn series(values: &[f64]) -> WaveformSeries {
        WaveformSeries::normalized(values.to_vec())
    }

    #[test]
    fn bars_are_mirrored_about_the_midline() {
        let layout = compute_layout(
            &series(&[0.0, 0.5, 1.0]),
            &TimeAxis::from_duration(3.0, 30),
            (300.0, 200.0),
            &WaveformOptions::default(),
        );
        assert_eq!(layout.bars.len(), 3);
        for bar in &layout.bars {
            assert_relative_eq!(bar.y + bar.height / 2.0, 100.0);
            assert_relative_eq!(bar.width, 100.0);
            assert_relative_eq!(bar.corner_radius, 50.0);
        }
        assert_eq!(layout.bars[0].height, 0.0);
        assert_eq!(layout.bars[2].height, 200.0);
        assert_eq!(layout.bars[1].x, 150.0);
        assert_eq!(layout.bars[2].x, 300.0);
    }

    #[test]
    fn padding_and_margins_shrink_bars() {
        let options = WaveformOptions {
            margin: Margin {
                top: 10.0,
                bottom: 10.0,
                left: 20.0,
                right: 20.0,
            },
            padding: 0.5,
            ..WaveformOptions::default()
        };
        let layout = compute_layout(
            &series(&[0.2, 1.0]),
            &TimeAxis::from_duration(2.0, 30),
            (240.0, 120.0),
            &options,
        );
        assert_relative_eq!(layout.bars[0].width, 50.0);
        assert_eq!(layout.bars[0].x, 20.0);
        assert_eq!(layout.bars[1].x, 220.0);
        assert_eq!(layout.bars[1].height, 110.0);
    }

    #[test]
    fn explicit_size_overrides_container_for_scales_only() {
        let options = WaveformOptions {
            width: Some(100.0),
            height: Some(50.0),
            ..WaveformOptions::default()
        };
        let layout = compute_layout(
            &series(&[0.5, 1.0]),
            &TimeAxis::from_duration(2.0, 30),
            (400.0, 300.0),
            &options,
        );
        assert_eq!(layout.width, 400.0);
        assert_eq!(layout.bars[1].x, 100.0);
        assert_eq!(layout.bars[1].height, 50.0);
        let horizontal = layout
            .grid
            .iter()
            .find(|g| g.orientation == Orientation::Horizontal)
            .unwrap();
        assert_eq!(horizontal.x2, 400.0);
    }

    #[test]
    fn grid_follows_scale_ticks() {
        let values: Vec<f64> = (0..90).map(|i| i as f64 / 89.0).collect();
        let layout = compute_layout(
            &series(&values),
            &TimeAxis::from_duration(90.0, 30),
            (890.0, 100.0),
            &WaveformOptions::default(),
        );
        let vertical: Vec<f64> = layout
            .grid
            .iter()
            .filter(|g| g.orientation == Orientation::Vertical)
            .map(|g| g.x1)
            .collect();
        assert_eq!(vertical.len(), 9);
        assert_relative_eq!(vertical[1], 100.5);
        assert!(layout.grid.iter().all(|g| g.orientation == Orientation::Horizontal
            || (g.y1 == 0.0 && g.y2 == 100.0)));
        let horizontal = layout.grid.len() - vertical.len();
        assert_eq!(horizontal, 11);
    }

    #[test]
    fn ticks_sit_in_band_centres() {
        let layout = compute_layout(
            &series(&[1.0]),
            &TimeAxis::from_duration(90.0, 30),
            (800.0, 200.0),
            &WaveformOptions::default(),
        );
        let xs: Vec<f64> = layout.ticks.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![100.0, 300.0, 500.0, 700.0]);
        assert_eq!(layout.ticks[2].label, "01:00");
    }

    #[test]
    fn single_bucket_is_centred() {
        let layout = compute_layout(
            &series(&[0.7]),
            &TimeAxis::from_duration(1.0, 30),
            (800.0, 200.0),
            &WaveformOptions::default(),
        );
        assert_eq!(layout.bars[0].x, 400.0);
        assert_eq!(layout.bars[0].height, 100.0);
        assert!(layout.bars[0].height.is_finite());
    }

    #[test]
    fn empty_series_has_axis_but_no_bars() {
        let layout = compute_layout(
            &WaveformSeries::default(),
            &TimeAxis::from_duration(0.0, 30),
            (800.0, 200.0),
            &WaveformOptions::default(),
        );
        assert!(layout.bars.is_empty());
        assert!(layout.grid.is_empty());
        assert_eq!(layout.ticks.len(), 1);
    }
}
