//! Movement relative to a target.
//!
//! Pure geometry: given where the fighter and its target are, produce a velocity.

use glam::DVec2;

use crownfall_core::types::{Field, Position, Velocity};

use crate::profiles::MovementStyle;

/// Result of a steering evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub velocity: Velocity,
    /// Strafe side to remember for the next frame.
    pub strafe_sign: f64,
}

/// Which band of a `Banded` movement a distance falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBand {
    Advance,
    Strafe,
    Retreat,
}

pub fn classify_range(distance: f64, preferred_range: f64, min_range: f64) -> RangeBand {
    if distance > preferred_range {
        RangeBand::Advance
    } else if distance < min_range {
        RangeBand::Retreat
    } else {
        RangeBand::Strafe
    }
}

/// Compute a velocity toward, away from, or around `target`.
///
/// Strafing flips side when continuing would push the fighter out of the
/// playable area (`field` shrunk by `margin`).
#[allow(clippy::too_many_arguments)]
pub fn steer(
    style: MovementStyle,
    position: Position,
    target: Position,
    speed: f64,
    strafe_sign: f64,
    field: &Field,
    margin: f64,
    dt: f64,
) -> Steering {
    let here = DVec2::from(position);
    let offset = DVec2::from(target) - here;
    let distance = offset.length();
    let toward = offset.normalize_or_zero();

    let direction = match style {
        MovementStyle::Direct => toward,
        MovementStyle::Banded {
            preferred_range,
            min_range,
        } => match classify_range(distance, preferred_range, min_range) {
            RangeBand::Advance => toward,
            RangeBand::Retreat => -toward,
            RangeBand::Strafe => {
                let side = toward.perp() * strafe_sign;
                let next = Position::from(here + side * speed * dt);
                if field.clamp(next, margin) != next {
                    return Steering {
                        velocity: Velocity::from(-side * speed),
                        strafe_sign: -strafe_sign,
                    };
                }
                side
            }
        },
    };

    Steering {
        velocity: Velocity::from(direction * speed),
        strafe_sign,
    }
}
