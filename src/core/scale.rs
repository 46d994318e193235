use serde::{Deserialize, Serialize};

/// Continuous linear map from a value domain onto a pixel range.
///
/// Total over finite input: a degenerate domain maps every value to the
/// range midpoint, and a degenerate range inverts to the domain start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns a copy with the range replaced.
    #[must_use]
    pub fn with_range(self, range: (f64, f64)) -> Self {
        Self {
            range_start: range.0,
            range_end: range.1,
            ..self
        }
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Pixels per domain unit.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return 0.0;
        }
        (self.range_end - self.range_start) / span
    }
}
