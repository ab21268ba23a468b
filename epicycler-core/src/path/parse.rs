use crate::foundation::core::Point;
use crate::path::command::{CoordMode, PathCommand};

/// Parse a `d`-attribute command string into typed commands.
///
/// Tokenization is lenient by design, matching permissive vector-path
/// consumers: commas and whitespace both separate operands, numbers may run
/// together where a sign or a second decimal point starts a new one
/// (`"10-5"` is two operands, `"1.5.5"` is `1.5` and `.5`), unknown command
/// letters are skipped, and a trailing operand group with too few numbers is
/// dropped. This function never fails; garbage degrades to fewer commands.
///
/// An operand group longer than one command's worth repeats the command
/// (`"L 1 2 3 4"` is two line segments).
pub fn parse_commands(d: &str) -> Vec<PathCommand> {
    let mut out = Vec::new();
    for (letter, operands) in command_groups(d) {
        let mode = if letter.is_ascii_uppercase() {
            CoordMode::Absolute
        } else {
            CoordMode::Relative
        };
        let Some(arity) = command_arity(letter) else {
            tracing::debug!(letter = %letter, "skipping unknown path command");
            continue;
        };
        for chunk in operands.chunks_exact(arity) {
            out.push(build_command(letter, mode, chunk));
        }
        let dropped = operands.len() % arity;
        if dropped != 0 {
            tracing::debug!(letter = %letter, dropped, "dropping incomplete operand group");
        }
    }
    out
}

/// Parse a `d`-attribute command string straight to the discretized point
/// sequence the DFT consumes.
///
/// Point emission follows the reference visualizer rather than strict SVG
/// semantics, and the deviations are part of the contract:
///
/// - `L`, `H` and `V` apply their operands as deltas from the current point
///   even when written uppercase (nominally absolute).
/// - Cubic and quadratic control points are emitted as waypoints; curves are
///   not flattened.
/// - Arcs emit only their endpoint; arc geometry is not rasterized.
#[tracing::instrument(skip(d), fields(len = d.len()))]
pub fn parse_path_points(d: &str) -> Vec<Point> {
    trace_points(&parse_commands(d))
}

/// Walk typed commands with running current-point state and collect emitted
/// points. See [`parse_path_points`] for the emission rules.
pub fn trace_points(commands: &[PathCommand]) -> Vec<Point> {
    let mut points = Vec::new();
    let mut cur = Point::ZERO;

    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo { mode, x, y } => {
                cur = resolve(mode, cur, x, y);
                points.push(cur);
            }
            // Reference quirk: the delta is applied for both cases.
            PathCommand::LineTo { mode: _, x, y } => {
                cur = Point::new(cur.x + x, cur.y + y);
                points.push(cur);
            }
            PathCommand::HorizontalTo { mode: _, x } => {
                cur.x += x;
                points.push(cur);
            }
            PathCommand::VerticalTo { mode: _, y } => {
                cur.y += y;
                points.push(cur);
            }
            PathCommand::CubicBezierTo {
                mode,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                points.push(resolve(mode, cur, x1, y1));
                points.push(resolve(mode, cur, x2, y2));
                cur = resolve(mode, cur, x, y);
                points.push(cur);
            }
            PathCommand::QuadraticBezierTo { mode, x1, y1, x, y } => {
                points.push(resolve(mode, cur, x1, y1));
                cur = resolve(mode, cur, x, y);
                points.push(cur);
            }
            PathCommand::ArcTo { mode, x, y, .. } => {
                cur = resolve(mode, cur, x, y);
                points.push(cur);
            }
        }
    }

    points
}

fn resolve(mode: CoordMode, cur: Point, x: f64, y: f64) -> Point {
    match mode {
        CoordMode::Absolute => Point::new(x, y),
        CoordMode::Relative => Point::new(cur.x + x, cur.y + y),
    }
}

fn command_arity(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'M' | 'L' => Some(2),
        'H' | 'V' => Some(1),
        'C' => Some(6),
        'Q' => Some(4),
        'A' => Some(7),
        _ => None,
    }
}

fn build_command(letter: char, mode: CoordMode, ops: &[f64]) -> PathCommand {
    match letter.to_ascii_uppercase() {
        'M' => PathCommand::MoveTo {
            mode,
            x: ops[0],
            y: ops[1],
        },
        'L' => PathCommand::LineTo {
            mode,
            x: ops[0],
            y: ops[1],
        },
        'H' => PathCommand::HorizontalTo { mode, x: ops[0] },
        'V' => PathCommand::VerticalTo { mode, y: ops[0] },
        'C' => PathCommand::CubicBezierTo {
            mode,
            x1: ops[0],
            y1: ops[1],
            x2: ops[2],
            y2: ops[3],
            x: ops[4],
            y: ops[5],
        },
        'Q' => PathCommand::QuadraticBezierTo {
            mode,
            x1: ops[0],
            y1: ops[1],
            x: ops[2],
            y: ops[3],
        },
        'A' => PathCommand::ArcTo {
            mode,
            rx: ops[0],
            ry: ops[1],
            x_axis_rotation: ops[2],
            large_arc: ops[3] != 0.0,
            sweep: ops[4] != 0.0,
            x: ops[5],
            y: ops[6],
        },
        _ => unreachable!("command_arity gates the letter set"),
    }
}

/// Split the raw string into (command letter, lexed operands) groups.
fn command_groups(d: &str) -> Vec<(char, Vec<f64>)> {
    let mut groups: Vec<(char, Vec<f64>)> = Vec::new();
    let mut rest = d;

    while let Some(pos) = rest.find(|c: char| c.is_ascii_alphabetic()) {
        let letter = rest[pos..].chars().next().unwrap_or_default();
        let after = &rest[pos + letter.len_utf8()..];
        let end = after
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(after.len());
        groups.push((letter, lex_numbers(&after[..end])));
        rest = &after[end..];
    }

    groups
}

/// Lex signed decimal numbers out of an operand substring.
///
/// A number is an optional `-`, integer digits, and an optional fraction;
/// at least one digit must be present and a bare trailing `.` is not
/// consumed. Everything else (whitespace, commas, stray signs) separates.
fn lex_numbers(s: &str) -> Vec<f64> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'-' && b != b'.' && !b.is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        let mut j = i;
        if bytes[j] == b'-' {
            j += 1;
        }
        let int_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let int_len = j - int_start;

        let mut frac_len = 0;
        if j < bytes.len() && bytes[j] == b'.' {
            let mut k = j + 1;
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            frac_len = k - (j + 1);
            if frac_len > 0 {
                j = k;
            }
        }

        if int_len == 0 && frac_len == 0 {
            // Lone '-' or '.'.
            i += 1;
            continue;
        }

        if let Ok(v) = s[start..j].parse::<f64>() {
            out.push(v);
        }
        i = j;
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/parse.rs"]
mod tests;
