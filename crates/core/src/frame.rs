//! Two-dimensional intensity buffer with toroidal wrapping.
//!
//! A `Frame` stores `width * height` [`FixedScalar`] values in `[0, SCALE]`
//! using row-major layout. It is the buffer a viewer uploads each frame.
//! Coordinate access uses toroidal (wrap-around) addressing so negative and
//! overflowing indices are valid.

use crate::error::EngineError;
use crate::fixed::{FixedScalar, SCALE};

/// A 2D fixed-point buffer with values clamped to `[0, SCALE]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<FixedScalar>,
}

/// Validates dimensions and returns the cell count.
fn cell_count(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)
}

impl Frame {
    /// Creates a zero-filled frame of the given dimensions.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero,
    /// if `width * height` overflows `usize`, or if the buffer cannot be
    /// allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Self::filled(width, height, 0)
    }

    /// Creates a frame filled with `value`, clamped to `[0, SCALE]`.
    pub fn filled(width: usize, height: usize, value: FixedScalar) -> Result<Self, EngineError> {
        let len = cell_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| EngineError::InvalidDimensions)?;
        data.resize(len, value.clamp(0, SCALE));
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a frame from a pre-built buffer, validating that
    /// `data.len() == width * height`. Values are clamped to `[0, SCALE]`.
    pub fn from_data(
        width: usize,
        height: usize,
        mut data: Vec<FixedScalar>,
    ) -> Result<Self, EngineError> {
        let expected = cell_count(width, height)?;
        if data.len() != expected {
            return Err(EngineError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        data.iter_mut().for_each(|v| *v = (*v).clamp(0, SCALE));
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[FixedScalar] {
        &self.data
    }

    /// Converts signed coordinates to a flat index using toroidal wrapping.
    fn index(&self, x: isize, y: isize) -> usize {
        let w = self.width as isize;
        let h = self.height as isize;
        let xi = x.rem_euclid(w) as usize;
        let yi = y.rem_euclid(h) as usize;
        yi * self.width + xi
    }

    /// Gets the value at `(x, y)` with toroidal wrapping.
    pub fn get(&self, x: isize, y: isize) -> FixedScalar {
        self.data[self.index(x, y)]
    }

    /// Sets the value at `(x, y)` with toroidal wrapping, clamped to `[0, SCALE]`.
    pub fn set(&mut self, x: isize, y: isize, value: FixedScalar) {
        let idx = self.index(x, y);
        self.data[idx] = value.clamp(0, SCALE);
    }

    /// Mutable access to the underlying row-major data.
    ///
    /// Values written here bypass clamping; the sampler already produces
    /// values in `[0, SCALE]`.
    pub fn data_mut(&mut self) -> &mut [FixedScalar] {
        &mut self.data
    }

    /// Iterates over all cells yielding `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, FixedScalar)> + '_ {
        self.data.iter().enumerate().map(|(i, &v)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, v)
        })
    }

    /// Smallest and largest value in the frame.
    pub fn min_max(&self) -> (FixedScalar, FixedScalar) {
        self.data
            .iter()
            .fold((FixedScalar::MAX, FixedScalar::MIN), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Integer mean of all values, rounded toward zero.
    pub fn mean(&self) -> FixedScalar {
        let total: i64 = self.data.iter().map(|&v| i64::from(v)).sum();
        (total / self.data.len() as i64) as FixedScalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Constructor tests --

    #[test]
    fn new_creates_zero_filled_frame() {
        let frame = Frame::new(4, 3).unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.data().len(), 12);
        assert!(frame.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn new_with_zero_width_returns_error() {
        let result = Frame::new(0, 5);
        assert!(matches!(result, Err(EngineError::InvalidDimensions)));
    }

    #[test]
    fn new_with_zero_height_returns_error() {
        let result = Frame::new(5, 0);
        assert!(matches!(result, Err(EngineError::InvalidDimensions)));
    }

    #[test]
    fn new_with_overflowing_dimensions_returns_error() {
        assert!(Frame::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn filled_clamps_value() {
        let high = Frame::filled(2, 2, 5000).unwrap();
        assert!(high.data().iter().all(|&v| v == SCALE));
        let low = Frame::filled(2, 2, -7).unwrap();
        assert!(low.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn from_data_accepts_matching_length() {
        let frame = Frame::from_data(2, 2, vec![0, 100, 200, 300]).unwrap();
        assert_eq!(frame.get(1, 1), 300);
    }

    #[test]
    fn from_data_clamps_values() {
        let frame = Frame::from_data(2, 1, vec![-1, 2048]).unwrap();
        assert_eq!(frame.data(), &[0, SCALE]);
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = Frame::from_data(3, 3, vec![0; 8]);
        assert!(matches!(
            result,
            Err(EngineError::BufferLength {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn new_reports_unallocatable_frame_as_error() {
        let result = Frame::new(usize::MAX / 4, 2);
        assert!(matches!(result, Err(EngineError::InvalidDimensions)));
    }

    // -- get/set --

    #[test]
    fn get_and_set_with_positive_indices() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.set(2, 3, 420);
        assert_eq!(frame.get(2, 3), 420);
    }

    #[test]
    fn set_clamps_value() {
        let mut frame = Frame::new(2, 2).unwrap();
        frame.set(0, 0, SCALE + 1);
        frame.set(1, 0, -1);
        assert_eq!(frame.get(0, 0), SCALE);
        assert_eq!(frame.get(1, 0), 0);
    }

    // -- Toroidal wrapping --

    #[test]
    fn get_wraps_negative_coordinates() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.set(3, 3, 800);
        assert_eq!(frame.get(-1, -1), 800);
    }

    #[test]
    fn get_wraps_overflowing_coordinates() {
        let mut frame = Frame::new(4, 4).unwrap();
        frame.set(1, 2, 300);
        assert_eq!(frame.get(5, 6), 300);
    }

    // -- Statistics --

    #[test]
    fn iter_yields_row_major_coordinates() {
        let frame = Frame::from_data(2, 2, vec![1, 2, 3, 4]).unwrap();
        let cells: Vec<_> = frame.iter().collect();
        assert_eq!(cells, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]);
    }

    #[test]
    fn min_max_and_mean() {
        let frame = Frame::from_data(2, 2, vec![10, 500, 1000, 90]).unwrap();
        assert_eq!(frame.min_max(), (10, 1000));
        assert_eq!(frame.mean(), 400);
    }
}
