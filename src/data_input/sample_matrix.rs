// src/data_input/sample_matrix.rs

use ndarray::{s, Array2, ArrayView1};

use crate::constants::CHANNEL_COUNT;

/// Channel-major table of sensor samples, shape `(CHANNEL_COUNT, num_records)`.
///
/// Rows follow `channel_names::CHANNEL_NAMES`. Only the loader builds one;
/// it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    data: Array2<f64>,
}

impl SampleMatrix {
    /// Builds the matrix from per-record rows, transposing into channel-major order.
    pub(crate) fn from_records(records: &[[f64; CHANNEL_COUNT]]) -> Self {
        let data = Array2::from_shape_fn((CHANNEL_COUNT, records.len()), |(channel, record)| {
            records[record][channel]
        });
        Self { data }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn num_records(&self) -> usize {
        self.data.ncols()
    }

    pub fn channel(&self, channel: usize) -> ArrayView1<'_, f64> {
        self.data.row(channel)
    }

    /// Values of `channel` over records `start..end`. Callers check bounds first.
    pub fn window(&self, channel: usize, start: usize, end: usize) -> ArrayView1<'_, f64> {
        self.data.slice(s![channel, start..end])
    }
}
