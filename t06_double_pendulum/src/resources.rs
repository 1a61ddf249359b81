use std::{f64::consts::PI, time::Duration};

use bevy::prelude::*;
use bevy_inspector_egui::{prelude::ReflectInspectorOptions, InspectorOptions};

use crate::trajectory::DEFAULT_CAPACITY;

/// Starting conditions, read whenever a session is created.
#[derive(Reflect, Resource, InspectorOptions, Debug, Clone)]
#[reflect(Resource, InspectorOptions)]
pub struct Config {
    pub gravity: f64,
    pub mass: [f64; 2],
    pub radius: [f64; 2],
    pub theta: [f64; 2],
    pub velocity: [f64; 2],
    #[inspector(min = 0, max = 5000)]
    pub trail_capacity: usize,
    #[inspector(min = 1, max = 1000)]
    pub tick_millis: u64,
    #[inspector(min = 0.0, max = 1.0)]
    pub anchor_height_fraction: f64,
    /// Log accelerations every tick.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 1.1,
            mass: [50.0, 75.0],
            radius: [100.0, 200.0],
            theta: [PI / 2.0, PI / 2.0],
            velocity: [0.0, 0.0],
            trail_capacity: DEFAULT_CAPACITY,
            tick_millis: 15,
            anchor_height_fraction: 1.0 / 8.0,
            verbose: false,
        }
    }
}

impl Config {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}
