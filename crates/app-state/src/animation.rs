//! Spring-driven animated values
//!
//! Every position transition in the feed (card exit/enter, cancel snap-back,
//! panel slides) is a damped spring toward a target. An in-flight spring can
//! be redirected at any time; whoever was waiting on the old target is told
//! the animation did not finish.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest integration step; larger frame deltas are sub-stepped.
const MAX_SUB_STEP: f32 = 1.0 / 240.0;

/// Bound on rate x step for the semi-implicit Euler integrator to stay stable
const MAX_STEP_RATIO: f32 = 1.0;

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    /// Damping coefficient
    pub damping: f32,
    /// Spring stiffness
    pub stiffness: f32,
    /// Mass of the animated body
    pub mass: f32,
    /// Distance from target below which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest
    pub rest_velocity: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 20.0,
            stiffness: 150.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_velocity: 2.0,
        }
    }
}

impl SpringConfig {
    /// Check that the parameters describe a stable spring
    ///
    /// Besides being positive, the natural frequency and the damping rate
    /// must stay small against the integration step, or the integrator
    /// diverges.
    pub fn is_valid(&self) -> bool {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.damping)
            && positive(self.stiffness)
            && positive(self.mass)
            && positive(self.rest_displacement)
            && positive(self.rest_velocity))
        {
            return false;
        }

        let natural_frequency = (self.stiffness / self.mass).sqrt();
        let damping_rate = self.damping / self.mass;
        natural_frequency * MAX_SUB_STEP < MAX_STEP_RATIO
            && damping_rate * MAX_SUB_STEP < MAX_STEP_RATIO
    }
}

/// Identifies whoever is waiting for an animation to complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(pub u64);

/// Completion report for a ticketed animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Ticket passed when the animation started
    pub ticket: Ticket,
    /// False when the animation was redirected or snapped before settling
    pub finished: bool,
}

#[derive(Debug, Clone, Copy)]
struct ActiveSpring {
    target: f32,
    config: SpringConfig,
    ticket: Option<Ticket>,
}

/// A scalar that is either at rest or springing toward a target
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    velocity: f32,
    spring: Option<ActiveSpring>,
}

impl AnimatedValue {
    /// Create a value at rest
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            spring: None,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity (units per second)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether a spring is in flight
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Target of the in-flight spring, if any
    pub fn target(&self) -> Option<f32> {
        self.spring.map(|s| s.target)
    }

    /// Ticket of the in-flight spring, if any
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.spring.and_then(|s| s.ticket)
    }

    /// Snap to a value, cancelling any in-flight spring
    pub fn set(&mut self, value: f32) -> Option<Completion> {
        let interrupted = self.interrupt();
        self.value = value;
        self.velocity = 0.0;
        interrupted
    }

    /// Start (or redirect) a spring toward `target`
    ///
    /// Velocity carries over from the previous motion.
    pub fn spring_to(
        &mut self,
        target: f32,
        config: SpringConfig,
        ticket: Option<Ticket>,
    ) -> Option<Completion> {
        let interrupted = self.interrupt();
        self.spring = Some(ActiveSpring {
            target,
            config,
            ticket,
        });
        interrupted
    }

    /// Advance the spring by `dt`
    ///
    /// Returns the completion when a ticketed spring comes to rest. A settled
    /// value lands exactly on its target.
    pub fn step(&mut self, dt: Duration) -> Option<Completion> {
        let spring = self.spring?;
        let mut remaining = dt.as_secs_f32();

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUB_STEP);
            remaining -= h;

            let config = &spring.config;
            let spring_force = -config.stiffness * (self.value - spring.target);
            let damping_force = -config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) / config.mass * h;
            self.value += self.velocity * h;

            if !(self.value.is_finite() && self.velocity.is_finite()) {
                tracing::warn!(target = spring.target, "Spring diverged, snapping to target");
                self.value = spring.target;
                self.velocity = 0.0;
                self.spring = None;
                return spring.ticket.map(|ticket| Completion {
                    ticket,
                    finished: false,
                });
            }

            if (self.value - spring.target).abs() < config.rest_displacement
                && self.velocity.abs() < config.rest_velocity
            {
                self.value = spring.target;
                self.velocity = 0.0;
                self.spring = None;
                return spring.ticket.map(|ticket| Completion {
                    ticket,
                    finished: true,
                });
            }
        }

        None
    }

    fn interrupt(&mut self) -> Option<Completion> {
        let previous = self.spring.take()?;
        if let Some(ticket) = previous.ticket {
            tracing::debug!(?ticket, "Spring redirected before settling");
        }
        previous.ticket.map(|ticket| Completion {
            ticket,
            finished: false,
        })
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
