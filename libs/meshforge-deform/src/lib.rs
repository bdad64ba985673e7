//! # Meshforge Deform
//!
//! Per-tick deformation components. Each component owns no mesh; the
//! host passes exclusive access to the target mesh into `tick`, along
//! with the external inputs (resolved activation point, input axis,
//! clock) the surrounding engine supplies.
//!
//! ## Components
//!
//! - [`Sculptor`]: radius-limited, kernel-weighted displacement along an
//!   averaged local normal, with collision-shape refresh bookkeeping
//! - [`TwistDeformer`]: per-vertex rotation about the up axis, angle
//!   proportional to base height times the accumulated twist parameter
//! - [`WaveDeformer`]: time-driven sine displacement of the base pose
//!
//! All components capture their base (undeformed) buffers eagerly at
//! construction and re-derive every tick's output from them, so repeated
//! ticks never accumulate floating-point drift.

pub mod falloff;
pub mod sculpt;
pub mod twist;
pub mod wave;

#[cfg(test)]
mod tests;

pub use falloff::Falloff;
pub use sculpt::{deform, ColliderRefresh, MeshId, SculptParams, SculptStroke, Sculptor};
pub use twist::{NormalSource, TwistDeformer};
pub use wave::WaveDeformer;
