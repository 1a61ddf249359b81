use std::f64::consts::TAU;

use bevy::prelude::Color;

use crate::{
    point::{PivotChain, Point},
    trajectory::TrajectoryRecorder,
};

pub const BACKGROUND: Color = Color::WHITE;
pub const ROD_COLOR: Color = Color::BLACK;
pub const ROD_WIDTH: f64 = 6.0;
pub const TRAIL_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
pub const TRAIL_WIDTH: f64 = 3.0;
/// Bob disk radius per unit of mass.
pub const BOB_SCALE: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub width: f64,
}

impl Style {
    pub const fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            fill: None,
            width,
        }
    }

    pub const fn fill(color: Color) -> Self {
        Self {
            stroke: None,
            fill: Some(color),
            width: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        style: Style,
        from: Point,
        to: Point,
    },
    Arc {
        style: Style,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        direction: ArcDirection,
    },
    Rect {
        style: Style,
        origin: Point,
        width: f64,
        height: f64,
    },
}

/// Anything that can take the three canvas primitives.
pub trait RenderSurface {
    fn draw_line(&mut self, style: &Style, from: Point, to: Point);

    fn draw_arc(
        &mut self,
        style: &Style,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        direction: ArcDirection,
    );

    fn draw_rect(&mut self, style: &Style, origin: Point, width: f64, height: f64);
}

impl DrawCommand {
    pub fn apply(&self, surface: &mut impl RenderSurface) {
        match self {
            DrawCommand::Line { style, from, to } => surface.draw_line(style, *from, *to),
            DrawCommand::Arc {
                style,
                center,
                radius,
                start,
                end,
                direction,
            } => surface.draw_arc(style, *center, *radius, *start, *end, *direction),
            DrawCommand::Rect {
                style,
                origin,
                width,
                height,
            } => surface.draw_rect(style, *origin, *width, *height),
        }
    }
}

pub fn replay<'a>(
    commands: impl IntoIterator<Item = &'a DrawCommand>,
    surface: &mut impl RenderSurface,
) {
    for command in commands {
        command.apply(surface);
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub viewport: (f64, f64),
    pub chain: PivotChain,
    pub mass: [f64; 2],
    pub trail: &'a TrajectoryRecorder,
}

pub fn render(scene: &Scene) -> Vec<DrawCommand> {
    let (width, height) = scene.viewport;
    let mut commands = Vec::with_capacity(5 + scene.trail.len());

    commands.push(DrawCommand::Rect {
        style: Style::fill(BACKGROUND),
        origin: Point::ZERO,
        width,
        height,
    });

    let chain = &scene.chain;
    push_pendulum(&mut commands, chain.anchor, chain.bob1, scene.mass[0]);
    push_pendulum(&mut commands, chain.bob1, chain.bob2, scene.mass[1]);

    commands.extend(scene.trail.segments().map(|(from, to)| DrawCommand::Line {
        style: Style::stroke(TRAIL_COLOR, TRAIL_WIDTH),
        from,
        to,
    }));

    commands
}

fn push_pendulum(commands: &mut Vec<DrawCommand>, pivot: Point, bob: Point, mass: f64) {
    commands.push(DrawCommand::Line {
        style: Style::stroke(ROD_COLOR, ROD_WIDTH),
        from: pivot,
        to: bob,
    });
    commands.push(DrawCommand::Arc {
        style: Style::fill(ROD_COLOR),
        center: bob,
        radius: mass * BOB_SCALE,
        start: 0.0,
        end: TAU,
        direction: ArcDirection::CounterClockwise,
    });
}
