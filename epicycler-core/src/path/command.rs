/// Whether a command's operands are absolute coordinates or deltas from the
/// current point.
///
/// In `d`-attribute syntax the distinction is carried by letter case
/// (`M` vs `m`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CoordMode {
    /// Uppercase command letter: operands are absolute coordinates.
    Absolute,
    /// Lowercase command letter: operands are deltas from the current point.
    Relative,
}

/// One parsed vector-path command, carrying exactly the operands its kind
/// requires.
///
/// A closed set of variants replaces single-character dispatch: a command can
/// never reach the tracer with a mismatched operand count.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathCommand {
    /// `M`/`m` — start a subpath at the given point.
    MoveTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `L`/`l` — straight segment to the given point.
    LineTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// `H`/`h` — horizontal segment.
    HorizontalTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// Target x.
        x: f64,
    },
    /// `V`/`v` — vertical segment.
    VerticalTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// Target y.
        y: f64,
    },
    /// `C`/`c` — cubic Bezier segment (two control points + endpoint).
    CubicBezierTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// `Q`/`q` — quadratic Bezier segment (one control point + endpoint).
    QuadraticBezierTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// Control point x.
        x1: f64,
        /// Control point y.
        y1: f64,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
    /// `A`/`a` — elliptical arc segment.
    ArcTo {
        /// Absolute/relative tag.
        mode: CoordMode,
        /// Ellipse x radius.
        rx: f64,
        /// Ellipse y radius.
        ry: f64,
        /// Rotation of the ellipse x axis, in degrees.
        x_axis_rotation: f64,
        /// Large-arc flag.
        large_arc: bool,
        /// Sweep flag.
        sweep: bool,
        /// Endpoint x.
        x: f64,
        /// Endpoint y.
        y: f64,
    },
}

impl PathCommand {
    /// The command's absolute/relative tag.
    pub fn mode(&self) -> CoordMode {
        match *self {
            Self::MoveTo { mode, .. }
            | Self::LineTo { mode, .. }
            | Self::HorizontalTo { mode, .. }
            | Self::VerticalTo { mode, .. }
            | Self::CubicBezierTo { mode, .. }
            | Self::QuadraticBezierTo { mode, .. }
            | Self::ArcTo { mode, .. } => mode,
        }
    }
}
