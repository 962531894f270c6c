/// Quintic ease-out: decelerating approach from `start` to `start + delta`.
///
/// `t` must be in `[0.0, 1.0]`. Every position and size interpolation in the
/// engine runs through this one curve; effects that want a different feel
/// supply whole limbo records instead of a different easing law.
pub fn ease_out_quint(t: f32, start: f32, delta: f32) -> f32 {
    let u = t - 1.0;
    delta * (u * u * u * u * u + 1.0) + start
}
