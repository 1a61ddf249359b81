use bevy::{prelude::*, window::PrimaryWindow};
use t06_double_pendulum::{resources::Config, session::Session};

use crate::start_session;

pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.add_state::<ResetState>()
            .add_system(reset_listen)
            .add_system(stop_listen)
            .add_system(pause_listen.in_set(OnUpdate(ResetState::Playing)))
            .add_system(pause_stop_listen.in_set(OnUpdate(ResetState::Pause)))
            .add_system(reset.in_set(OnUpdate(ResetState::Reset)));
    }
}

#[derive(States, PartialEq, Eq, Debug, Clone, Hash, Default)]
pub enum ResetState {
    #[default]
    Playing,
    Pause,
    Reset,
}

fn reset(
    mut commands: Commands,
    config: Res<Config>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut app_state: ResMut<NextState<ResetState>>,
) {
    if let Ok(window) = windows.get_single() {
        start_session(&mut commands, &config, window);
    }
    app_state.set(ResetState::Playing);
}

pub fn reset_listen(keys: Res<Input<KeyCode>>, mut app_state: ResMut<NextState<ResetState>>) {
    if keys.just_pressed(KeyCode::R) {
        app_state.set(ResetState::Reset);
    }
}

pub fn stop_listen(keys: Res<Input<KeyCode>>, session: Option<ResMut<Session>>) {
    if keys.just_pressed(KeyCode::S) {
        if let Some(mut session) = session {
            session.request_stop();
        }
    }
}

pub fn pause_listen(keys: Res<Input<KeyCode>>, mut app_state: ResMut<NextState<ResetState>>) {
    if keys.just_pressed(KeyCode::Space) {
        info!("Pause");
        app_state.set(ResetState::Pause);
    }
}

pub fn pause_stop_listen(keys: Res<Input<KeyCode>>, mut app_state: ResMut<NextState<ResetState>>) {
    if keys.just_pressed(KeyCode::Space) {
        info!("Resume");
        app_state.set(ResetState::Playing);
    }
}
