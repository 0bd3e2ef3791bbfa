// src/waveform/scale.rs
//! Linear and band scales for laying out the chart.

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Project `value`. A collapsed domain maps everything to the range midpoint.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Roughly `count` round values (1, 2 or 5 times a power of ten) inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let inc = tick_increment(start, stop, count);
        if inc == 0.0 || !inc.is_finite() {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = if inc > 0.0 {
            let first = (start / inc).ceil() as i64;
            let last = (stop / inc).floor() as i64;
            (first..=last).map(|i| i as f64 * inc).collect()
        } else {
            // Negative increment means "divide by": keeps 0.1 steps exact
            let inv = -inc;
            let first = (start * inv).ceil() as i64;
            let last = (stop * inv).floor() as i64;
            (first..=last).map(|i| i as f64 / inv).collect()
        };

        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -10_f64.powf(-power) / factor
    }
}

/// Splits a range into `count` equal bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range }
    }

    pub fn bandwidth(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.count as f64
    }

    /// Left edge of band `index`.
    pub fn start(&self, index: usize) -> f64 {
        self.range.0 + self.bandwidth() * index as f64
    }

    /// Centre of band `index`, where an axis tick sits.
    pub fn center(&self, index: usize) -> f64 {
        self.start(index) + self.bandwidth() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn maps_domain_onto_range() {
        let x = LinearScale::new((0.0, 89.0), (0.0, 800.0));
        assert_eq!(x.scale(0.0), 0.0);
        assert_eq!(x.scale(89.0), 800.0);
        assert_relative_eq!(x.scale(44.5), 400.0);
    }

    #[test]
    fn collapsed_domain_maps_to_midpoint() {
        let y = LinearScale::new((1.0, 1.0), (0.0, 200.0));
        assert_eq!(y.scale(1.0), 100.0);
        assert_eq!(y.ticks(10), vec![1.0]);
    }

    #[test]
    fn unit_domain_ticks_by_tenths() {
        let ticks = LinearScale::new((0.0, 1.0), (0.0, 1.0)).ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks[10], 1.0);
    }

    #[test]
    fn index_domain_ticks_round_numbers() {
        let ticks = LinearScale::new((0.0, 89.0), (0.0, 800.0)).ticks(10);
        assert_eq!(ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);

        let ticks = LinearScale::new((0.0, 44099.0), (0.0, 800.0)).ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.get(1), Some(&5000.0));
    }

    #[test]
    fn reversed_domain_ticks_descend() {
        let ticks = LinearScale::new((10.0, 0.0), (0.0, 1.0)).ticks(5);
        assert_eq!(ticks, vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn bands_split_evenly() {
        let band = BandScale::new(4, (0.0, 800.0));
        assert_eq!(band.bandwidth(), 200.0);
        assert_eq!(band.start(1), 200.0);
        assert_eq!(band.center(3), 700.0);
        assert_eq!(BandScale::new(0, (0.0, 800.0)).bandwidth(), 0.0);
    }
}
