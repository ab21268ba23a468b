//! Epicycler turns a closed 2D vector path into rotating-vector ("epicycle")
//! components and reconstructs the path from them over time.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `d`-attribute command string -> ordered `Point` samples
//! 2. **Resample** (optional): densify samples to a maximum spacing
//! 3. **Analyze**: samples + integer frequency set -> [`FrequencyComponent`]s
//!    (one amplitude/phase pair per frequency, via a direct DFT)
//! 4. **Synthesize**: components + monotonically increasing time -> the chain
//!    of epicycle endpoints and the reconstructed tip, once per frame
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: every step is a deterministic, synchronous function; the
//!   crate performs no IO and owns no animation clock.
//! - **Driver-owned state**: the frame driver owns the [`Trace`] and supplies
//!   `time`; [`advance`] itself retains nothing between calls.
//!
//! Rendering, document loading and frame pacing live in the CLI crate; this
//! crate only exposes the values they consume.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod path;
mod spectrum;
mod synth;

pub use foundation::core::{Canvas, Fps, FrameIndex, Point, Vec2};
pub use foundation::error::{EpicycleError, EpicycleResult};
pub use path::command::{CoordMode, PathCommand};
pub use path::parse::{parse_commands, parse_path_points, trace_points};
pub use path::resample::resample;
pub use path::shapes::{oval_points, rect_points};
pub use spectrum::dft::{
    FrequencyComponent, Polar, add_polar, analyze, ascending_frequencies, component, to_polar,
};
pub use synth::epicycle::{Synthesis, Trace, advance};
