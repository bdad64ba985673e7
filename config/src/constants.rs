//! # Configuration Constants
//!
//! Centralized constants for the meshforge pipeline. All geometry
//! tolerances, grid limits, and per-component defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Terrain**: Height-field grid limits and defaults
//! - **Sculpting**: Falloff brush defaults and kernel shape
//! - **Deformation**: Twist and wave defaults
//! - **Trails**: Frame-history and orientation-smoothing defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Squared-length threshold below which a direction vector is considered
/// degenerate and unusable for building an orientation.
pub const DEGENERATE_DIRECTION_SQ: f64 = 1e-12;

// =============================================================================
// TERRAIN CONSTANTS
// =============================================================================

/// Maximum height-field dimension (per axis) accepted by the terrain
/// builder. Larger inputs are clamped, not rejected.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_HEIGHTFIELD_DIM;
///
/// let width = 1024usize;
/// assert_eq!(width.min(MAX_HEIGHTFIELD_DIM), 255);
/// ```
pub const MAX_HEIGHTFIELD_DIM: usize = 255;

/// Minimum height-field dimension (per axis) that produces a non-empty
/// grid mesh. Below this the builder returns an empty mesh.
pub const MIN_HEIGHTFIELD_DIM: usize = 2;

/// Default physical extents of a generated terrain patch (x, y, z).
pub const DEFAULT_TERRAIN_SIZE: [f64; 3] = [200.0, 30.0, 200.0];

/// Default material color attached to a terrain patch when the host has
/// not configured one (opaque white).
pub const DEFAULT_MATERIAL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// =============================================================================
// SCULPTING CONSTANTS
// =============================================================================

/// Default sculpt brush radius in mesh-local units.
pub const DEFAULT_SCULPT_RADIUS: f64 = 1.0;

/// Default sculpt displacement strength per second. Scaled by the tick's
/// elapsed time before it is applied, so the stroke speed is frame-rate
/// independent.
pub const DEFAULT_SCULPT_PULL: f64 = 10.0;

/// Base of the gaussian-like falloff kernel: `360^(-(d/r)^2.5 - 0.01)`.
pub const GAUSS_FALLOFF_BASE: f64 = 360.0;

/// Exponent applied to the normalized distance inside the gaussian-like
/// falloff kernel.
pub const GAUSS_FALLOFF_EXPONENT: f64 = 2.5;

/// Constant offset subtracted in the gaussian-like kernel's exponent.
/// Keeps the weight strictly below 1 even at zero distance before
/// clamping.
pub const GAUSS_FALLOFF_OFFSET: f64 = 0.01;

// =============================================================================
// DEFORMATION CONSTANTS
// =============================================================================

/// Default twist input sensitivity: radians of accumulated twist per unit
/// of axis input per second.
pub const DEFAULT_TWIST_SENSITIVITY: f64 = 1.5;

/// Default amplitude of the wave deformer in mesh-local units.
pub const DEFAULT_WAVE_SCALE: f64 = 10.0;

/// Default temporal frequency multiplier of the wave deformer.
pub const DEFAULT_WAVE_SPEED: f64 = 1.0;

// =============================================================================
// TRAIL CONSTANTS
// =============================================================================

/// Default lifetime of a trail frame sample in seconds. Samples older
/// than this are evicted from the history every tick.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TRAIL_LIFETIME;
///
/// let now = 10.0;
/// let sample_time = 7.5;
/// assert!(now > sample_time + DEFAULT_TRAIL_LIFETIME);
/// ```
pub const DEFAULT_TRAIL_LIFETIME: f64 = 2.0;

/// Default minimum distance the tracked object must move before a new
/// frame sample is recorded.
pub const DEFAULT_TRAIL_MIN_DISTANCE: f64 = 0.1;

/// Angular threshold (degrees) between consecutive trail section
/// orientations above which the new orientation is blended toward the
/// previous one instead of snapping.
pub const ORIENTATION_BLEND_THRESHOLD_DEG: f64 = 20.0;

/// Spherical-interpolation factor used when the blend threshold is
/// exceeded. 0.5 splits the angular difference halfway.
pub const ORIENTATION_BLEND_FACTOR: f64 = 0.5;
