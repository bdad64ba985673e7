//! # Height Field
//!
//! Opaque 2D scalar grid used as the terrain source. The concrete
//! encoding of the data (image, noise, measurement) is the host's
//! concern; this type only stores the decoded samples.

use meshforge_mesh::GeometryError;

/// A row-major 2D grid of scalar height samples.
///
/// Sampling is **edge-clamped**: out-of-range indices read the nearest
/// valid column or row. That is the contract the tangent reconstruction
/// relies on when it reads one column past the border.
///
/// # Example
///
/// ```rust
/// use meshforge_terrain::HeightField;
///
/// let field = HeightField::from_fn(4, 4, |x, _y| x as f64 * 0.25);
/// assert_eq!(field.sample(-1, 0), field.sample(0, 0));
/// assert_eq!(field.sample(4, 2), field.sample(3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct HeightField {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl HeightField {
    /// Creates a height field from raw row-major samples.
    ///
    /// Rejects empty dimensions and a sample buffer whose length does not
    /// match `width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<f64>) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::invalid_config(format!(
                "height field dimensions must be non-zero, got {width}x{height}"
            )));
        }
        if samples.len() != width * height {
            return Err(GeometryError::invalid_config(format!(
                "height field sample count {} does not match {width}x{height}",
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Creates a height field by evaluating `f(x, y)` at every grid
    /// point.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        assert!(width > 0 && height > 0, "height field dimensions must be non-zero");
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    /// Grid width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Edge-clamped sample read. Out-of-range indices clamp to the
    /// nearest valid column or row.
    #[inline]
    pub fn sample(&self, x: isize, y: isize) -> f64 {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.samples[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_sample_count() {
        assert!(HeightField::new(2, 2, vec![0.0; 4]).is_ok());
        assert!(HeightField::new(2, 2, vec![0.0; 3]).is_err());
        assert!(HeightField::new(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_from_fn_layout_is_row_major() {
        let field = HeightField::from_fn(3, 2, |x, y| (y * 10 + x) as f64);
        assert_eq!(field.sample(2, 0), 2.0);
        assert_eq!(field.sample(0, 1), 10.0);
        assert_eq!(field.sample(2, 1), 12.0);
    }

    #[test]
    fn test_sample_clamps_at_borders() {
        let field = HeightField::from_fn(3, 3, |x, y| (x + y) as f64);
        // Left and right columns clamp
        assert_eq!(field.sample(-1, 1), field.sample(0, 1));
        assert_eq!(field.sample(3, 1), field.sample(2, 1));
        // Rows clamp too
        assert_eq!(field.sample(1, -5), field.sample(1, 0));
        assert_eq!(field.sample(1, 99), field.sample(1, 2));
    }
}
