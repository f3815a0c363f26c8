use crate::{
    foundation::color::Cell,
    resample::{gradient::Gradient, sampler::resample},
};

/// One row of cells, either the base gradient or derived from the previous track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    values: Vec<Cell>,
    base: bool,
}

impl Track {
    pub(crate) fn base(gradient: &Gradient, res: usize) -> Self {
        Self {
            values: gradient.cells(res),
            base: true,
        }
    }

    pub(crate) fn derived(prev: &Track, res: usize) -> Self {
        Self {
            values: resample(&prev.values, res),
            base: false,
        }
    }

    /// Number of cells.
    pub fn res(&self) -> usize {
        self.values.len()
    }

    /// Cells in left-to-right order.
    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    /// `true` for the gradient track at index 0.
    pub fn is_base(&self) -> bool {
        self.base
    }

    /// Number of blank cells.
    pub fn blank_count(&self) -> usize {
        self.values.iter().filter(|c| c.is_blank()).count()
    }

    pub(crate) fn set_values(&mut self, values: Vec<Cell>) {
        self.values = values;
    }
}
