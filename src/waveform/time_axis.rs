// src/waveform/time_axis.rs
//! Time marks for the bottom axis.

/// Default spacing between axis labels, in seconds.
pub const DEFAULT_LABEL_INTERVAL_SECS: u32 = 30;

/// One labelled point on the time axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMark {
    pub label: String,
    pub seconds: u64,
}

/// Marks at every multiple of the interval within `[0, duration]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeAxis {
    marks: Vec<AxisMark>,
}

impl TimeAxis {
    pub fn from_duration(duration_secs: f64, interval_secs: u32) -> Self {
        let interval = u64::from(interval_secs.max(1));
        let duration = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        let steps = (duration / interval as f64).floor() as u64 + 1;
        let marks = (0..steps)
            .map(|i| {
                let seconds = i * interval;
                AxisMark {
                    label: format_timestamp(seconds),
                    seconds,
                }
            })
            .collect();
        Self { marks }
    }

    pub fn marks(&self) -> &[AxisMark] {
        &self.marks
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().map(|m| m.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// `MM:SS`, zero padded. Minutes keep counting past an hour.
pub fn format_timestamp(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
