use crate::{error::SimulationError, resources::Config};

/// Two point masses on massless rods, angles measured from vertical.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    gravity: f64,
    mass: [f64; 2],
    radius: [f64; 2],
    theta: [f64; 2],
    velocity: [f64; 2],
    acceleration: [f64; 2],
}

impl PendulumState {
    pub fn new(
        gravity: f64,
        mass: [f64; 2],
        radius: [f64; 2],
        theta: [f64; 2],
        velocity: [f64; 2],
    ) -> Result<Self, SimulationError> {
        check_finite("gravity", gravity)?;
        check_positive("mass[0]", mass[0])?;
        check_positive("mass[1]", mass[1])?;
        check_positive("radius[0]", radius[0])?;
        check_positive("radius[1]", radius[1])?;
        check_finite("theta[0]", theta[0])?;
        check_finite("theta[1]", theta[1])?;
        check_finite("velocity[0]", velocity[0])?;
        check_finite("velocity[1]", velocity[1])?;

        Ok(Self {
            gravity,
            mass,
            radius,
            theta,
            velocity,
            acceleration: [0.0; 2],
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SimulationError> {
        Self::new(
            config.gravity,
            config.mass,
            config.radius,
            config.theta,
            config.velocity,
        )
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn mass(&self) -> [f64; 2] {
        self.mass
    }

    pub fn radius(&self) -> [f64; 2] {
        self.radius
    }

    pub fn theta(&self) -> [f64; 2] {
        self.theta
    }

    pub fn velocity(&self) -> [f64; 2] {
        self.velocity
    }

    /// Acceleration computed by the last successful step.
    pub fn acceleration(&self) -> [f64; 2] {
        self.acceleration
    }

    /// Angular accelerations for the current angles and velocities.
    pub fn angular_acceleration(&self) -> [f64; 2] {
        let g = self.gravity;
        let [m1, m2] = self.mass;
        let [l1, l2] = self.radius;
        let [t1, t2] = self.theta;
        let [w1, w2] = self.velocity;

        let bracket = 2.0 * m1 + m2 - m2 * (2.0 * t1 - 2.0 * t2).cos();

        let mut a1 = -g * (2.0 * m1 + m2) * t1.sin();
        a1 += -m2 * g * (t1 - 2.0 * t2).sin();
        a1 += -2.0 * (t1 - t2).sin() * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * (t1 - t2).cos());
        a1 /= l1 * bracket;

        let mut a2 = w1 * w1 * l1 * (m1 + m2);
        a2 += g * (m1 + m2) * t1.cos();
        a2 += w2 * w2 * l2 * m2 * (t1 - t2).cos();
        a2 *= 2.0 * (t1 - t2).sin();
        a2 /= l2 * bracket;

        [a1, a2]
    }

    /// Moves the pendulum forward one tick.
    ///
    /// Velocity takes this tick's acceleration first, then the angle takes the
    /// updated velocity. On error nothing is modified.
    pub fn advance(&mut self) -> Result<[f64; 2], SimulationError> {
        let acceleration = self.angular_acceleration();
        if !acceleration[0].is_finite() || !acceleration[1].is_finite() {
            return Err(SimulationError::NumericalInstability { acceleration });
        }

        let velocity = [
            self.velocity[0] + acceleration[0],
            self.velocity[1] + acceleration[1],
        ];
        let theta = [self.theta[0] + velocity[0], self.theta[1] + velocity[1]];
        if velocity.iter().chain(theta.iter()).any(|v| !v.is_finite()) {
            return Err(SimulationError::NumericalInstability { acceleration });
        }

        self.acceleration = acceleration;
        self.velocity = velocity;
        self.theta = theta;
        Ok(acceleration)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}
