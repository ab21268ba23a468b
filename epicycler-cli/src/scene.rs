//! Rendering boundary: draw one epicycle frame to RGBA8 pixels.
//!
//! Per tick the whole surface is redrawn: one circle + one radius line per
//! chain segment, the accumulated trace as a connected line, and a marker at
//! the reconstructed tip. The core exposes no drawing calls; everything here
//! consumes its plain values.

use anyhow::Context as _;
use epicycler::{Canvas, FrequencyComponent, Point, Synthesis, Trace};
use vello_cpu::kurbo::{Affine, BezPath, Circle, Rect, Shape, Stroke};
use vello_cpu::peniko::Color;

/// A rendered frame as premultiplied RGBA8 pixels, tightly packed, row-major.
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

const BACKGROUND: Color = Color::from_rgb8(255, 255, 255);
const TRACE_COLOR: Color = Color::from_rgb8(255, 0, 0);
// Half-opacity black, as the reference draws its circles.
const CHAIN_COLOR: Color = Color::from_rgba8(0, 0, 0, 128);
const TIP_RADIUS: f64 = 3.0;
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Draw one frame: epicycle chain, trace and tip marker over a cleared
/// background.
///
/// `components` must be the set the synthesis ran over; each chain segment's
/// circle radius is the matching component's amplitude.
pub fn draw_frame(
    canvas: Canvas,
    components: &[FrequencyComponent],
    origin: Point,
    synthesis: &Synthesis,
    trace: &Trace,
) -> anyhow::Result<FrameRgba> {
    let width: u16 = canvas.width.try_into().context("canvas width exceeds u16")?;
    let height: u16 = canvas
        .height
        .try_into()
        .context("canvas height exceeds u16")?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(Affine::IDENTITY);

    ctx.set_paint(BACKGROUND);
    ctx.fill_rect(&Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height),
    ));

    ctx.set_stroke(Stroke::new(1.0));
    ctx.set_paint(CHAIN_COLOR);
    let mut center = origin;
    for (component, endpoint) in components.iter().zip(&synthesis.chain) {
        let circle = Circle::new((center.x, center.y), component.amplitude);
        ctx.stroke_path(&circle.to_path(CIRCLE_TOLERANCE));

        let mut radius_line = BezPath::new();
        radius_line.move_to((center.x, center.y));
        radius_line.line_to((endpoint.x, endpoint.y));
        ctx.stroke_path(&radius_line);

        center = *endpoint;
    }

    if trace.len() >= 2 {
        let pts = trace.points();
        let mut path = BezPath::new();
        path.move_to((pts[0].x, pts[0].y));
        for p in &pts[1..] {
            path.line_to((p.x, p.y));
        }
        ctx.set_paint(TRACE_COLOR);
        ctx.stroke_path(&path);
    }

    let tip = Circle::new((synthesis.tip.x, synthesis.tip.y), TIP_RADIUS);
    ctx.set_paint(TRACE_COLOR);
    ctx.fill_path(&tip.to_path(CIRCLE_TOLERANCE));

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRgba {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
    })
}
