//! Linear scans over a value range.

/// Restartable iterator yielding evenly spaced values across a range.
///
/// Both endpoints are included. Values are computed as `low + i * step` so
/// the high endpoint is hit without accumulated float error. Cloning the
/// iterator restarts the scan from its current position.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSamples {
    low: f64,
    step: f64,
    next: usize,
    count: usize,
}

impl LinearSamples {
    /// Scan `[min(a, b), max(a, b)]` in `resolution` equal steps.
    ///
    /// A zero-width range, a zero resolution, or a NaN step yields the low
    /// end once.
    pub fn new(a: f64, b: f64, resolution: usize) -> Self {
        let low = a.min(b);
        let high = a.max(b);
        let step = if resolution == 0 {
            0.0
        } else {
            (high - low) / resolution as f64
        };

        let count = if step == 0.0 || step.is_nan() {
            1
        } else {
            resolution + 1
        };

        Self {
            low,
            step,
            next: 0,
            count,
        }
    }
}

impl Iterator for LinearSamples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let value = self.low + self.step * self.next as f64;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinearSamples {}
