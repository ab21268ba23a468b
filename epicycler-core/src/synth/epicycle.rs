use crate::foundation::core::Point;
use crate::spectrum::dft::FrequencyComponent;

/// One frame's worth of epicycle chain geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Synthesis {
    /// Endpoint of each rotating vector, in component order. The first vector
    /// starts at the chain origin; each subsequent one starts at the previous
    /// endpoint.
    pub chain: Vec<Point>,
    /// The reconstructed path point: the last chain endpoint, or the origin
    /// when the component list is empty.
    pub tip: Point,
}

/// Walk the epicycle chain for one time value.
///
/// For each component in order, a vector of length `amplitude` rotated to
/// angle `phase + time * frequency` is added to the running point. The
/// function is pure and stateless; the caller owns the clock (`time` should
/// increase monotonically across frames, typically elapsed seconds) and owns
/// trace accumulation — append [`Synthesis::tip`] to a [`Trace`] if a path
/// history is wanted.
pub fn advance(components: &[FrequencyComponent], time: f64, origin: Point) -> Synthesis {
    let mut chain = Vec::with_capacity(components.len());
    let mut cur = origin;

    for c in components {
        let angle = c.phase + time * (c.frequency as f64);
        cur = Point::new(
            cur.x + c.amplitude * angle.cos(),
            cur.y + c.amplitude * angle.sin(),
        );
        chain.push(cur);
    }

    Synthesis { chain, tip: cur }
}

/// Append-only history of reconstructed tip positions across frames.
///
/// Owned by the frame driver, not by any analysis or synthesis step; a new
/// input path discards the trace in full.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Trace(Vec<Point>);

impl Trace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one reconstructed tip position.
    pub fn push(&mut self, tip: Point) {
        self.0.push(tip);
    }

    /// Accumulated positions, oldest first.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of accumulated positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Discard the history, e.g. when the input path changes.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/epicycle.rs"]
mod tests;
