//! Fixed-step explicit integrators over `[f64; N]` states.
//!
//! ```text
//! Euler: y₁ = y₀ + h·f(t, y₀)
//! RK4:   y₁ = y₀ + h/6·(k₁ + 2k₂ + 2k₃ + k₄)
//! ```

use crate::config::IntegrationMethod;

/// Right-hand side `dy/dt = f(t, y)` of an autonomous or time-dependent system.
pub trait VectorField<const N: usize> {
    /// Evaluate the derivative at `(t, state)`.
    fn derivative(&self, t: f64, state: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> VectorField<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn derivative(&self, t: f64, state: &[f64; N]) -> [f64; N] {
        self(t, state)
    }
}

#[inline]
fn offset<const N: usize>(state: &[f64; N], slope: &[f64; N], h: f64) -> [f64; N] {
    let mut out = *state;
    for (o, s) in out.iter_mut().zip(slope.iter()) {
        *o += h * s;
    }
    out
}

/// Advance one forward Euler step.
pub fn euler_step<F, const N: usize>(field: &F, t: f64, state: &[f64; N], dt: f64) -> [f64; N]
where
    F: VectorField<N> + ?Sized,
{
    let k1 = field.derivative(t, state);
    offset(state, &k1, dt)
}

/// Advance one classical Runge-Kutta step.
pub fn rk4_step<F, const N: usize>(field: &F, t: f64, state: &[f64; N], dt: f64) -> [f64; N]
where
    F: VectorField<N> + ?Sized,
{
    let half = 0.5 * dt;
    let k1 = field.derivative(t, state);
    let k2 = field.derivative(t + half, &offset(state, &k1, half));
    let k3 = field.derivative(t + half, &offset(state, &k2, half));
    let k4 = field.derivative(t + dt, &offset(state, &k3, dt));

    let mut out = *state;
    for i in 0..N {
        out[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    out
}

/// Advance one step with the selected method.
pub fn step<F, const N: usize>(
    method: IntegrationMethod,
    field: &F,
    t: f64,
    state: &[f64; N],
    dt: f64,
) -> [f64; N]
where
    F: VectorField<N> + ?Sized,
{
    match method {
        IntegrationMethod::Euler => euler_step(field, t, state, dt),
        IntegrationMethod::Rk4 => rk4_step(field, t, state, dt),
    }
}
