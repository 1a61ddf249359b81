use bevy::prelude::*;

/// Disk drawn for the n-th filled arc of a frame.
#[derive(Reflect, Component, Default)]
#[reflect(Component)]
pub struct Bob(pub usize);
