//! Rasterizes the icon layout with tiny-skia and hands back a straight-alpha
//! `RgbaImage`.

use anyhow::{anyhow, bail, Result};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};

use crate::layout::{Bounds, Geometry, Shape};

// Control-point offset for a cubic quarter circle of unit radius.
const KAPPA: f32 = 0.552_284_8;

/// Renders the film-frame icon at `size × size` pixels.
///
/// The foreground (body, perforations, frame grid) is painted onto one canvas,
/// the body silhouette in translucent black onto a second, and the foreground
/// is then composited over that shadow. Output is deterministic for a given size.
pub fn render(size: u32) -> Result<RgbaImage> {
    if size == 0 {
        bail!("Icon size must be positive");
    }

    let geometry = Geometry::new(size);

    let mut foreground = new_canvas(size)?;
    for shape in geometry.shapes() {
        draw_shape(&mut foreground, &shape);
    }

    let mut composed = new_canvas(size)?;
    draw_shape(&mut composed, &geometry.shadow());
    composed.draw_pixmap(
        0,
        0,
        foreground.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    Ok(to_image(&composed))
}

fn new_canvas(size: u32) -> Result<Pixmap> {
    Pixmap::new(size, size).ok_or_else(|| anyhow!("Failed to allocate {size}x{size} canvas"))
}

/// Fills one shape. Shapes with no area are skipped.
pub fn draw_shape(pixmap: &mut Pixmap, shape: &Shape) {
    let path = match shape {
        Shape::RoundedRect { bounds, radius, .. } => rounded_rect_path(bounds, *radius as f32),
        Shape::Ellipse { bounds, .. } => to_rect(bounds).and_then(PathBuilder::from_oval),
    };
    let Some(path) = path else {
        return;
    };

    let Rgba([r, g, b, a]) = shape.color();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn to_rect(bounds: &Bounds) -> Option<Rect> {
    if bounds.is_empty() {
        return None;
    }
    Rect::from_ltrb(
        bounds.left as f32,
        bounds.top as f32,
        bounds.right as f32,
        bounds.bottom as f32,
    )
}

fn rounded_rect_path(bounds: &Bounds, radius: f32) -> Option<Path> {
    let rect = to_rect(bounds)?;
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if radius <= 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = radius * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(r - radius, t);
    pb.cubic_to(r - radius + k, t, r, t + radius - k, r, t + radius);
    pb.line_to(r, b - radius);
    pb.cubic_to(r, b - radius + k, r - radius + k, b, r - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();
    pb.finish()
}

// tiny-skia stores premultiplied color; PNG/ICO/ICNS want straight alpha.
fn to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}
