//! Easing curves.
//!
//! Closed-form curves from 1loc.dev, mapping progress `t` in `[0, 1]` to an
//! eased value. The elastic curves divide by `t`, `t - 1` or `t - 0.5`, so
//! they yield non-finite values at those points.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KitError;

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

pub fn ease_in_quart(t: f64) -> f64 {
    t * t * t * t
}

pub fn ease_out_quart(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 - u * u * u * u
}

pub fn ease_in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 - 8.0 * u * u * u * u
    }
}

pub fn ease_in_quint(t: f64) -> f64 {
    t * t * t * t * t
}

pub fn ease_out_quint(t: f64) -> f64 {
    let u = t - 1.0;
    1.0 + u * u * u * u * u
}

pub fn ease_in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 + 16.0 * u * u * u * u * u
    }
}

pub fn ease_in_sine(t: f64) -> f64 {
    1.0 + ((PI / 2.0) * t - PI / 2.0).sin()
}

pub fn ease_out_sine(t: f64) -> f64 {
    ((PI / 2.0) * t).sin()
}

pub fn ease_in_out_sine(t: f64) -> f64 {
    (1.0 + (PI * t - PI / 2.0).sin()) / 2.0
}

pub fn ease_in_elastic(t: f64) -> f64 {
    (0.04 - 0.04 / t) * (25.0 * t).sin() + 1.0
}

pub fn ease_out_elastic(t: f64) -> f64 {
    let u = t - 1.0;
    ((0.04 * t) / u) * (25.0 * u).sin()
}

pub fn ease_in_out_elastic(t: f64) -> f64 {
    let s = t - 0.5;
    if s < 0.0 {
        (0.02 + 0.01 / s) * (50.0 * s).sin()
    } else {
        (0.02 - 0.01 / s) * (50.0 * s).sin() + 1.0
    }
}

/// Named easing curve, for picking a curve from config or user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
}

impl Easing {
    pub const ALL: [Easing; 19] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
    ];

    /// The curve as a plain function pointer.
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            Easing::Linear => linear,
            Easing::EaseInQuad => ease_in_quad,
            Easing::EaseOutQuad => ease_out_quad,
            Easing::EaseInOutQuad => ease_in_out_quad,
            Easing::EaseInCubic => ease_in_cubic,
            Easing::EaseOutCubic => ease_out_cubic,
            Easing::EaseInOutCubic => ease_in_out_cubic,
            Easing::EaseInQuart => ease_in_quart,
            Easing::EaseOutQuart => ease_out_quart,
            Easing::EaseInOutQuart => ease_in_out_quart,
            Easing::EaseInQuint => ease_in_quint,
            Easing::EaseOutQuint => ease_out_quint,
            Easing::EaseInOutQuint => ease_in_out_quint,
            Easing::EaseInSine => ease_in_sine,
            Easing::EaseOutSine => ease_out_sine,
            Easing::EaseInOutSine => ease_in_out_sine,
            Easing::EaseInElastic => ease_in_elastic,
            Easing::EaseOutElastic => ease_out_elastic,
            Easing::EaseInOutElastic => ease_in_out_elastic,
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t)
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInOutQuint => "easeInOutQuint",
            Easing::EaseInSine => "easeInSine",
            Easing::EaseOutSine => "easeOutSine",
            Easing::EaseInOutSine => "easeInOutSine",
            Easing::EaseInElastic => "easeInElastic",
            Easing::EaseOutElastic => "easeOutElastic",
            Easing::EaseInOutElastic => "easeInOutElastic",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| KitError::UnknownEasing(s.to_string()))
    }
}
