// src/renderer.rs
use egui::{pos2, vec2, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::config::SketchConfig;
use crate::geometry::distance;
use crate::render_bridge::DisplayList;
use crate::shape::ShapeGenerator;

/// Each rough edge is stroked this many times with different jitter
const ROUGH_PASSES: u32 = 2;
/// Polyline resolution of one bowed edge
const BOW_SEGMENTS: usize = 8;

/// Generates egui shapes with a hand-drawn look.
///
/// With `roughness` above zero every edge is drawn twice, each time with
/// jittered endpoints and a slight bow, the way rough.js sketches. The jitter
/// comes from a seeded generator that restarts for every shape, so the same
/// geometry always produces the same strokes and a dragged shape keeps its
/// wobble.
#[derive(Debug, Clone)]
pub struct SketchGenerator {
    stroke: Stroke,
    roughness: f32,
    seed: u32,
}

impl SketchGenerator {
    pub fn new(stroke: Stroke, roughness: f32, seed: u32) -> Self {
        Self {
            stroke,
            roughness: roughness.max(0.0),
            seed,
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(
            Stroke::new(config.stroke_width, config.stroke_color),
            config.roughness,
            config.seed,
        )
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    fn sketch_path(&self, points: &[Pos2], closed: bool) -> Shape {
        if self.roughness <= 0.0 {
            return if closed {
                Shape::closed_line(points.to_vec(), self.stroke)
            } else {
                Shape::line(points.to_vec(), self.stroke)
            };
        }

        let mut edges: Vec<(Pos2, Pos2)> = points.windows(2).map(|w| (w[0], w[1])).collect();
        if closed {
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                edges.push((last, first));
            }
        }

        let mut rng = SketchRng::new(self.seed);
        let mut strokes = Vec::with_capacity(edges.len() * ROUGH_PASSES as usize);
        for _ in 0..ROUGH_PASSES {
            for &(a, b) in &edges {
                strokes.push(Shape::line(self.rough_edge(a, b, &mut rng), self.stroke));
            }
        }
        Shape::Vec(strokes)
    }

    /// One jittered, bowed pass over the edge `a`-`b`, flattened to a polyline
    fn rough_edge(&self, a: Pos2, b: Pos2, rng: &mut SketchRng) -> Vec<Pos2> {
        let len = distance(a, b);
        let max_offset = self.roughness * 2.0;
        let bow = rng.offset(self.roughness * self.roughness * len / 200.0);

        let normal = if len > f32::EPSILON {
            vec2(a.y - b.y, b.x - a.x) / len
        } else {
            Vec2::ZERO
        };

        let start = a + vec2(rng.offset(max_offset), rng.offset(max_offset));
        let end = b + vec2(rng.offset(max_offset), rng.offset(max_offset));
        let control = a.lerp(b, 0.5) + normal * bow;

        (0..=BOW_SEGMENTS)
            .map(|i| quadratic_point(start, control, end, i as f32 / BOW_SEGMENTS as f32))
            .collect()
    }
}

impl Default for SketchGenerator {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl ShapeGenerator for SketchGenerator {
    type Renderable = Shape;

    fn line(&self, start: Pos2, end: Pos2) -> Shape {
        self.sketch_path(&[start, end], false)
    }

    fn rectangle(&self, origin: Pos2, size: Vec2) -> Shape {
        let rect = Rect::from_two_pos(origin, origin + size);
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
        self.sketch_path(&corners, true)
    }
}

fn quadratic_point(p0: Pos2, p1: Pos2, p2: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    pos2(
        u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
        u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
    )
}

/// xorshift32, enough for visual jitter
struct SketchRng {
    state: u32,
}

impl SketchRng {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in `[-amount, amount]`
    fn offset(&mut self, amount: f32) -> f32 {
        let unit = self.next_u32() as f64 / u32::MAX as f64;
        (unit * 2.0 - 1.0) as f32 * amount
    }
}

/// Replay a display list onto `painter`, shifting canvas coordinates by `offset`
pub fn paint_display_list(painter: &Painter, list: &DisplayList<Shape>, offset: Vec2) {
    painter.extend(list.items().iter().cloned().map(|mut shape| {
        shape.translate(offset);
        shape
    }));
}
