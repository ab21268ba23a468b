use crate::foundation::error::{EpicycleError, EpicycleResult};

pub use kurbo::{Point, Vec2};

/// 0-based index of an animation frame produced by the driver loop.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Target frame rate of the driver loop, as a rational to keep NTSC-style
/// rates exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator, frames.
    pub num: u32,
    /// Denominator, seconds. Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validate and build a frame rate.
    pub fn new(num: u32, den: u32) -> EpicycleResult<Self> {
        if den == 0 {
            return Err(EpicycleError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(EpicycleError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// The rate as frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Seconds elapsed at the start of `frame`, the `time` fed to synthesis.
    pub fn time_at(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * self.frame_duration_secs()
    }
}

/// Pixel dimensions of the display surface owned by the rendering
/// collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Center of the display surface, the conventional epicycle chain origin.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
