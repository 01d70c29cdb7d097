//! Icon geometry: every derived dimension and the ordered list of shapes drawn
//! at a given pixel size. Nothing here touches pixels.

use image::Rgba;

use crate::manifest::{BODY_COLOR, FRAME_COLOR, HOLE_COLOR, SHADOW_COLOR};

/// Half-open pixel box: covers `[left, right) × [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square box of side `side` with its top-left corner at `(x, y)`.
    pub fn square(x: i32, y: i32, side: i32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    /// Square box of side `diameter` centered on `(cx, cy)`.
    pub fn centered(cx: i32, cy: i32, diameter: i32) -> Self {
        Self::square(cx - diameter / 2, cy - diameter / 2, diameter)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    RoundedRect {
        bounds: Bounds,
        radius: u32,
        color: Rgba<u8>,
    },
    Ellipse {
        bounds: Bounds,
        color: Rgba<u8>,
    },
}

impl Shape {
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::RoundedRect { bounds, .. } | Shape::Ellipse { bounds, .. } => *bounds,
        }
    }

    pub fn color(&self) -> Rgba<u8> {
        match self {
            Shape::RoundedRect { color, .. } | Shape::Ellipse { color, .. } => *color,
        }
    }

    /// Zero-extent shapes are legal and draw nothing.
    pub fn is_empty(&self) -> bool {
        self.bounds().is_empty()
    }
}

/// Dimensions derived from the icon size by integer division. Small sizes may
/// collapse some of them to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub size: u32,
    pub margin: u32,
    pub radius: u32,
    pub hole_size: u32,
    pub frame_size: u32,
    pub frame_margin: u32,
}

pub const FRAME_ROWS: u32 = 2;
pub const FRAME_COLUMNS: u32 = 3;

impl Geometry {
    pub fn new(size: u32) -> Self {
        let margin = size / 8;
        let inner = size - 2 * margin;
        let frame_size = inner / 4;

        Self {
            size,
            margin,
            radius: size / 6,
            hole_size: size / 20,
            frame_size,
            frame_margin: (inner - 2 * frame_size) / 3,
        }
    }

    /// Film-strip body, inset by `margin` on every side.
    pub fn body_bounds(&self) -> Bounds {
        let near = self.margin as i32;
        let far = (self.size - self.margin) as i32;
        Bounds::new(near, near, far, far)
    }

    pub fn body(&self) -> Shape {
        Shape::RoundedRect {
            bounds: self.body_bounds(),
            radius: self.radius,
            color: BODY_COLOR,
        }
    }

    /// Same outline as the body, drawn underneath in translucent black.
    pub fn shadow(&self) -> Shape {
        Shape::RoundedRect {
            bounds: self.body_bounds(),
            radius: self.radius,
            color: SHADOW_COLOR,
        }
    }

    /// Vertical centers of the perforation rows.
    pub fn hole_anchors(&self) -> [u32; 4] {
        let s = self.size;
        [s / 6, s / 3, s / 2, 2 * s / 3]
    }

    /// Perforations: for each anchor, one hole on the left edge then one on the right.
    pub fn holes(&self) -> Vec<Shape> {
        let diameter = self.hole_size as i32;
        let left_x = (self.margin / 2) as i32;
        let right_x = (self.size - self.margin / 2) as i32;

        self.hole_anchors()
            .iter()
            .flat_map(|&y| {
                let y = y as i32;
                [left_x, right_x].map(|x| Shape::Ellipse {
                    bounds: Bounds::centered(x, y, diameter),
                    color: HOLE_COLOR,
                })
            })
            .collect()
    }

    /// Extracted-frame thumbnails, row-major.
    pub fn frames(&self) -> Vec<Shape> {
        let side = self.frame_size as i32;
        let step = (self.frame_size + self.frame_margin) as i32;
        let origin = self.margin as i32;

        (0..FRAME_ROWS as i32)
            .flat_map(|row| {
                (0..FRAME_COLUMNS as i32).map(move |col| Shape::RoundedRect {
                    bounds: Bounds::square(origin + col * step, origin + row * step, side),
                    radius: self.frame_size / 4,
                    color: FRAME_COLOR,
                })
            })
            .collect()
    }

    /// Foreground draw list in paint order, with zero-extent shapes dropped.
    pub fn shapes(&self) -> Vec<Shape> {
        std::iter::once(self.body())
            .chain(self.holes())
            .chain(self.frames())
            .filter(|shape| !shape.is_empty())
            .collect()
    }
}
