use crate::foundation::color::{Cell, Hsl, Lerp, Rgb8};

/// Linear ramp between two colors, interpolated in HSL space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Gradient {
    /// Color of the first sample.
    pub start: Rgb8,
    /// Color of the last sample.
    pub end: Rgb8,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: Rgb8::RED,
            end: Rgb8::PURPLE,
        }
    }
}

impl Gradient {
    /// Gradient from `start` to `end`.
    pub fn new(start: Rgb8, end: Rgb8) -> Self {
        Self { start, end }
    }

    /// `len` evenly spaced samples, both endpoints included.
    ///
    /// A single sample is the start color; zero samples is an empty vector.
    pub fn sample(&self, len: usize) -> Vec<Rgb8> {
        let a = self.start.to_hsl();
        let b = self.end.to_hsl();
        let last = len.saturating_sub(1).max(1) as f64;

        (0..len)
            .map(|i| match i {
                0 => self.start,
                i if i + 1 == len => self.end,
                i => Hsl::lerp(&a, &b, i as f64 / last).to_rgb8(),
            })
            .collect()
    }

    /// Samples wrapped as track cells.
    pub fn cells(&self, len: usize) -> Vec<Cell> {
        self.sample(len).into_iter().map(Cell::Color).collect()
    }
}

/// Base-track cells for the default red to purple gradient.
pub fn make_gradient(len: usize) -> Vec<Cell> {
    Gradient::default().cells(len)
}

#[cfg(test)]
#[path = "../../tests/unit/resample/gradient.rs"]
mod tests;
