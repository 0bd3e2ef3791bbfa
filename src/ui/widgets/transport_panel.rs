// src/ui/widgets/transport_panel.rs
//! Transport panel: state, progress and volume.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::audio::{PlaybackState, Volume};
use crate::waveform::format_timestamp;

/// What the panel shows.
pub struct TransportView<'a> {
    pub title: &'a str,
    pub state: PlaybackState,
    pub elapsed: f64,
    pub duration: f64,
    pub volume: Volume,
    pub status: Option<&'a str>,
}

/// `MM:SS / MM:SS` label for the progress gauge.
pub fn time_label(elapsed: f64, duration: f64) -> String {
    format!(
        "{} / {}",
        format_timestamp(elapsed.max(0.0) as u64),
        format_timestamp(duration.max(0.0) as u64)
    )
}

/// Render the transport panel.
pub fn render_transport_panel(f: &mut Frame<'_>, area: Rect, view: &TransportView<'_>) {
    f.render_widget(
        Block::default().borders(Borders::ALL).title(view.title),
        area,
    );

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let state_icon = match view.state {
        PlaybackState::Playing => Span::styled(" ⏸ ", Style::default().fg(Color::Green)),
        PlaybackState::Paused => Span::styled(" ⏵ ", Style::default().fg(Color::Yellow)),
        PlaybackState::Idle | PlaybackState::Ready => {
            Span::styled(" ⏵ ", Style::default().fg(Color::Gray))
        }
    };

    let controls = Line::from(vec![
        Span::styled(" ⏹ ", Style::default().fg(Color::Red)), // Stop (s)
        Span::raw(" "),
        state_icon, // Play/Pause (space)
        Span::raw(format!(" {}  ", view.state)),
        Span::styled(
            format!("vol {:>3}%", view.volume.percent()),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        inner[0],
    );

    let ratio = if view.duration > 0.0 {
        (view.elapsed / view.duration).clamp(0.0, 1.0)
    } else {
        0.0
    };
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC))
            .ratio(ratio)
            .label(time_label(view.elapsed, view.duration)),
        inner[1],
    );

    let help = view
        .status
        .map(|s| Line::from(Span::styled(s.to_string(), Style::default().fg(Color::Red))))
        .unwrap_or_else(|| Line::from("space play/pause · s stop · +/- volume · q quit"));
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), inner[2]);
}
