//! # Meshforge Trail
//!
//! Extrudes a reference mesh's cross-section along the decaying history
//! of a moving object's frames, rebuilding a connected ribbon/tube mesh
//! every tick.
//!
//! ## Per-tick flow
//!
//! ```text
//! pose, clock ──> FrameHistory (evict + sample)
//!                     │
//!                     v
//!             section transforms (look rotation, jitter smoothing)
//!                     │
//!                     v
//!             extrude_sections (precomputed EdgeAdjacency)
//! ```
//!
//! The edge adjacency of the reference mesh is computed once at
//! construction; the history length determines the longitudinal
//! resolution of the output.

pub mod extrude;
pub mod history;
pub mod trail;


pub use extrude::extrude_sections;
pub use history::{FrameHistory, FrameSample};
pub use trail::{TrailConfig, TrailExtruder};
