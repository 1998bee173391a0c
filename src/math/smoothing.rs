//! Damped easing for scalar values stepped once per frame

/// Velocity carried between calls to [`smooth_damp`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DampVelocity(pub f32);

/// Critically damped approach of `current` toward `target`.
///
/// `smooth_time` is roughly the time to reach the target. Values within `eps`
/// snap to the target. Never overshoots the target.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut DampVelocity,
    smooth_time: f32,
    delta: f32,
    eps: f32,
) -> f32 {
    if (current - target).abs() <= eps {
        velocity.0 = 0.0;
        return target;
    }
    if delta <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * delta;
    let ease = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (velocity.0 + omega * change) * delta;
    velocity.0 = (velocity.0 - omega * temp) * ease;

    let mut output = target + (change + temp) * ease;
    if (target - current > 0.0) == (output > target) {
        output = target;
        velocity.0 = 0.0;
    }
    output
}
