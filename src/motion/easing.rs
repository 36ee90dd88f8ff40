//! Easing curves used by timeline tweens.
//!
//! The `power1`..`power4` families follow the usual naming: `power1` is
//! quadratic, `power4` is quintic.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// `powerN.in`
    PowerIn(u8),
    /// `powerN.out`
    PowerOut(u8),
    /// `powerN.inOut`
    PowerInOut(u8),
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    SineInOut,
    /// `back.out(overshoot)`
    BackOut(f64),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::PowerOut(1)
    }
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve. Inputs outside the
    /// range are clamped so endpoints are always exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::PowerIn(n) => t.powi(exponent(n)),
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(exponent(n)),
            Easing::PowerInOut(n) => {
                let p = exponent(n);
                if t < 0.5 {
                    (2.0 * t).powi(p) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(p) / 2.0
                }
            }
            Easing::ExpoIn => 2f64.powf(10.0 * (t - 1.0)),
            Easing::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
            Easing::ExpoInOut => {
                if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

fn exponent(n: u8) -> i32 {
    i32::from(n.clamp(1, 4)) + 1
}
