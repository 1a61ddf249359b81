use std::f64::consts::TAU;

use bevy::prelude::{Color, Vec2};
use bevy_prototype_debug_lines::DebugLines;
use t06_double_pendulum::{
    point::Point,
    render::{ArcDirection, RenderSurface, Style},
};

const ARC_SEGMENTS: usize = 32;

pub struct Disk {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Draws canvas commands into the bevy world: lines go to `DebugLines`, filled
/// arcs are collected as disks and a viewport sized fill becomes the clear color.
pub struct CanvasSurface<'a> {
    lines: &'a mut DebugLines,
    viewport: (f64, f64),
    pub background: Option<Color>,
    pub disks: Vec<Disk>,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(lines: &'a mut DebugLines, viewport: (f64, f64)) -> Self {
        Self {
            lines,
            viewport,
            background: None,
            disks: Vec::new(),
        }
    }

    /// Canvas has its origin top left and y down, the 2d camera looks at the
    /// viewport center with y up.
    pub fn to_world(&self, p: Point) -> Vec2 {
        let (width, height) = self.viewport;
        Vec2::from(Point::new(p.x - width / 2.0, height / 2.0 - p.y))
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        let start = self.to_world(from).extend(0.0);
        let end = self.to_world(to).extend(0.0);
        self.lines.line_colored(start, end, 0.0, color);
    }
}

impl RenderSurface for CanvasSurface<'_> {
    fn draw_line(&mut self, style: &Style, from: Point, to: Point) {
        if let Some(color) = style.stroke {
            self.line(from, to, color);
        }
    }

    fn draw_arc(
        &mut self,
        style: &Style,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        direction: ArcDirection,
    ) {
        if let Some(color) = style.fill {
            let center = self.to_world(center);
            self.disks.push(Disk {
                center,
                radius: radius as f32,
                color,
            });
        }

        let Some(color) = style.stroke else {
            return;
        };
        let mut sweep = (end - start) % TAU;
        match direction {
            ArcDirection::Clockwise if sweep <= 0.0 => sweep += TAU,
            ArcDirection::CounterClockwise if sweep >= 0.0 => sweep -= TAU,
            _ => {}
        }
        let at = |angle: f64| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };
        let mut prev = at(start);
        for i in 1..=ARC_SEGMENTS {
            let next = at(start + sweep * i as f64 / ARC_SEGMENTS as f64);
            self.line(prev, next, color);
            prev = next;
        }
    }

    fn draw_rect(&mut self, style: &Style, origin: Point, width: f64, height: f64) {
        let covers_viewport = origin.x <= 0.0
            && origin.y <= 0.0
            && origin.x + width >= self.viewport.0
            && origin.y + height >= self.viewport.1;
        if let (Some(color), true) = (style.fill, covers_viewport) {
            self.background = Some(color);
            return;
        }

        let Some(color) = style.stroke.or(style.fill) else {
            return;
        };
        let corners = [
            origin,
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
        ];
        for i in 0..corners.len() {
            self.line(corners[i], corners[(i + 1) % corners.len()], color);
        }
    }
}
