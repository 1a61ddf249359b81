use bevy::{
    log::{error, info},
    prelude::Resource,
};

use crate::{
    error::SimulationError,
    point::{PivotChain, Point},
    render::{render, DrawCommand, Scene},
    resources::Config,
    state::PendulumState,
    trajectory::TrajectoryRecorder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickStatus {
    Running,
    /// Stop was requested, the last tick completed normally.
    Stopped,
    /// A step hit a non-finite acceleration, frozen at the last valid frame.
    Unstable,
}

impl TickStatus {
    pub fn is_terminal(&self) -> bool {
        *self != TickStatus::Running
    }
}

/// One run of the pendulum, from its starting pose until stopped or unstable.
#[derive(Resource, Debug)]
pub struct Session {
    state: PendulumState,
    chain: PivotChain,
    trail: TrajectoryRecorder,
    viewport: (f64, f64),
    status: TickStatus,
    stop_requested: bool,
    ticks: u64,
    verbose: bool,
}

impl Session {
    pub fn new(config: &Config, viewport: (f64, f64)) -> Result<Self, SimulationError> {
        let state = PendulumState::from_config(config)?;
        let (width, height) = viewport;
        let anchor = Point::new(width / 2.0, height * config.anchor_height_fraction);
        if !anchor.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "anchor_height_fraction",
                value: config.anchor_height_fraction,
            });
        }
        let chain = PivotChain::compute(anchor, state.radius(), state.theta());

        info!(
            "New session: mass {:?}, radius {:?}, theta {:?}",
            state.mass(),
            state.radius(),
            state.theta()
        );

        Ok(Self {
            state,
            chain,
            trail: TrajectoryRecorder::with_capacity(config.trail_capacity),
            viewport,
            status: TickStatus::Running,
            stop_requested: false,
            ticks: 0,
            verbose: config.verbose,
        })
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn chain(&self) -> PivotChain {
        self.chain
    }

    pub fn trail(&self) -> &TrajectoryRecorder {
        &self.trail
    }

    pub fn status(&self) -> TickStatus {
        self.status
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Honoured at the end of the next tick.
    pub fn request_stop(&mut self) {
        if !self.stop_requested && !self.status.is_terminal() {
            info!("Stop requested after {} ticks", self.ticks);
        }
        self.stop_requested = true;
    }

    pub fn tick(&mut self) -> TickStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        match self.state.advance() {
            Ok(acceleration) => {
                if self.verbose {
                    info!("tick {}: acceleration {:?}", self.ticks, acceleration);
                }
            }
            Err(err) => {
                error!("{err}, halting after {} ticks", self.ticks);
                self.status = TickStatus::Unstable;
                return self.status;
            }
        }

        self.chain = PivotChain::compute(self.chain.anchor, self.state.radius(), self.state.theta());
        self.trail.record(self.chain.bob2);
        self.ticks += 1;

        if self.stop_requested {
            self.status = TickStatus::Stopped;
        }
        self.status
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            viewport: self.viewport,
            chain: self.chain,
            mass: self.state.mass(),
            trail: &self.trail,
        }
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        render(&self.scene())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: (f64, f64) = (800.0, 600.0);

    #[test]
    fn starts_at_configured_pose() {
        let session = Session::new(&Config::default(), VIEWPORT).unwrap();
        let chain = session.chain();

        assert_eq!(session.status(), TickStatus::Running);
        assert_eq!(session.ticks(), 0);
        assert!(session.trail().is_empty());
        assert_eq!(chain.anchor, Point::new(400.0, 75.0));
        assert_relative_eq!(chain.bob1.x, 500.0, epsilon = 1e-9);
        assert_relative_eq!(chain.bob2.x, 700.0, epsilon = 1e-9);
    }

    #[test]
    fn tick_records_bob2() {
        let mut session = Session::new(&Config::default(), VIEWPORT).unwrap();
        for _ in 0..3 {
            assert_eq!(session.tick(), TickStatus::Running);
        }

        assert_eq!(session.ticks(), 3);
        assert_eq!(session.trail().len(), 3);
        assert_eq!(session.trail().iter().last(), Some(&session.chain().bob2));
        assert_eq!(
            session.chain(),
            PivotChain::compute(
                Point::new(400.0, 75.0),
                session.state().radius(),
                session.state().theta()
            )
        );
    }

    #[test]
    fn trail_respects_configured_capacity() {
        let config = Config {
            trail_capacity: 5,
            ..Default::default()
        };
        let mut session = Session::new(&config, VIEWPORT).unwrap();
        for _ in 0..20 {
            if session.tick().is_terminal() {
                break;
            }
        }
        assert!(session.trail().len() <= 5);
    }

    #[test]
    fn stop_finishes_current_tick() {
        let mut session = Session::new(&Config::default(), VIEWPORT).unwrap();
        session.tick();
        session.request_stop();

        assert_eq!(session.tick(), TickStatus::Stopped);
        assert_eq!(session.ticks(), 2);

        let frozen = session.state().clone();
        assert_eq!(session.tick(), TickStatus::Stopped);
        assert_eq!(session.ticks(), 2);
        assert_eq!(*session.state(), frozen);
    }

    #[test]
    fn instability_is_terminal() {
        let config = Config {
            velocity: [1e200, -1e200],
            theta: [0.3, 1.2],
            ..Default::default()
        };
        let mut session = Session::new(&config, VIEWPORT).unwrap();
        let before = session.chain();

        assert_eq!(session.tick(), TickStatus::Unstable);
        assert_eq!(session.tick(), TickStatus::Unstable);
        assert_eq!(session.ticks(), 0);
        assert_eq!(session.chain(), before);
        assert!(session.trail().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            radius: [0.0, 200.0],
            ..Default::default()
        };
        assert!(matches!(
            Session::new(&config, VIEWPORT),
            Err(SimulationError::InvalidParameter { name: "radius[0]", .. })
        ));
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::new(&Config::default(), VIEWPORT).unwrap();
        let b = Session::new(&Config::default(), VIEWPORT).unwrap();
        a.tick();
        assert_ne!(a.state(), b.state());
        assert_eq!(b.ticks(), 0);
    }

    #[test]
    fn frozen_frame_renders_identically() {
        let mut session = Session::new(&Config::default(), VIEWPORT).unwrap();
        session.tick();
        session.tick();
        assert_eq!(session.draw_commands(), session.draw_commands());
        // background + two rods and bobs + one trail segment
        assert_eq!(session.draw_commands().len(), 6);
    }

    #[test]
    fn verbose_session_keeps_ticking() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        let mut session = Session::new(&config, VIEWPORT).unwrap();
        assert_eq!(session.tick(), TickStatus::Running);
        assert_eq!(session.ticks(), 1);
    }
}
