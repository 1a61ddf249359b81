mod components;
mod reset;
mod surface;

use components::*;
use reset::*;
use surface::*;

use bevy::{prelude::*, sprite::MaterialMesh2dBundle, window::PrimaryWindow};
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};
use bevy_prototype_debug_lines::{DebugLines, DebugLinesPlugin};
use t06_double_pendulum::{
    render::replay,
    resources::Config,
    session::{Session, TickStatus},
};

const TITLE: &str = "Double Pendulum";

fn main() {
    let config = Config::default();
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: TITLE.to_string(),
                resolution: (800., 600.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugin(WorldInspectorPlugin::new())
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(FixedTime::new(config.tick_period()))
        .insert_resource(config)
        .add_plugin(ResourceInspectorPlugin::<Config>::default())
        .add_plugin(DebugLinesPlugin::default())
        .add_plugin(ResetPlugin)
        .add_startup_system(setup)
        .add_system(
            tick.in_schedule(CoreSchedule::FixedUpdate)
                .run_if(in_state(ResetState::Playing)),
        )
        .add_systems((sync_tick_period, draw, update_title))
        .register_type::<Config>()
        .register_type::<Bob>()
        .run()
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<Config>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    commands.spawn(Camera2dBundle::default());

    // Unit disks, scaled to the bob radius every frame
    let mesh = meshes.add(shape::Circle::new(1.0).into());
    for index in 0..2 {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone().into(),
                material: materials.add(ColorMaterial::from(Color::BLACK)),
                visibility: Visibility::Hidden,
                ..default()
            },
            Bob(index),
            Name::new(format!("Bob {}", index + 1)),
        ));
    }

    if let Ok(window) = windows.get_single() {
        start_session(&mut commands, &config, window);
    }

    info!("Press 'S' to stop, 'Space' to pause, 'R' to reset");
}

/// Replaces the running session with a fresh one sized to the window.
pub fn start_session(commands: &mut Commands, config: &Config, window: &Window) {
    let viewport = (window.width() as f64, window.height() as f64);
    match Session::new(config, viewport) {
        Ok(session) => commands.insert_resource(session),
        Err(err) => {
            error!("Could not start session: {err}");
            commands.remove_resource::<Session>();
        }
    }
}

fn tick(session: Option<ResMut<Session>>) {
    let Some(mut session) = session else {
        return;
    };
    if session.status().is_terminal() {
        return;
    }
    if session.tick() == TickStatus::Stopped {
        info!("Stopped after {} ticks", session.ticks());
    }
}

fn sync_tick_period(config: Res<Config>, mut fixed_time: ResMut<FixedTime>) {
    if config.is_changed() {
        fixed_time.period = config.tick_period();
    }
}

fn draw(
    session: Option<Res<Session>>,
    mut lines: ResMut<DebugLines>,
    mut clear_color: ResMut<ClearColor>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut bobs: Query<(
        &Bob,
        &mut Transform,
        &mut Visibility,
        &Handle<ColorMaterial>,
    )>,
) {
    let Some(session) = session else {
        return;
    };

    let scene = session.scene();
    let mut surface = CanvasSurface::new(&mut lines, scene.viewport);
    replay(&session.draw_commands(), &mut surface);

    if let Some(background) = surface.background {
        if clear_color.0 != background {
            clear_color.0 = background;
        }
    }

    for (bob, mut transform, mut visibility, material) in bobs.iter_mut() {
        let Some(disk) = surface.disks.get(bob.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        transform.translation = disk.center.extend(1.0);
        transform.scale = Vec3::splat(disk.radius);
        *visibility = Visibility::Inherited;
        let recolor = materials
            .get(material)
            .map_or(false, |m| m.color != disk.color);
        if recolor {
            if let Some(material) = materials.get_mut(material) {
                material.color = disk.color;
            }
        }
    }
}

fn update_title(
    session: Option<Res<Session>>,
    state: Res<State<ResetState>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    let title = match session {
        Some(session) => {
            let status = match (session.status(), &state.0) {
                (TickStatus::Running, ResetState::Pause) => "paused",
                (TickStatus::Running, _) => "running",
                (TickStatus::Stopped, _) => "stopped",
                (TickStatus::Unstable, _) => "unstable",
            };
            format!("{TITLE} - {status} - tick {}", session.ticks())
        }
        None => format!("{TITLE} - invalid config"),
    };

    if window.title != title {
        window.title = title;
    }
}
