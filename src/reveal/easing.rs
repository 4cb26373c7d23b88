//! Easing curves for reveal and hover animations.
//!
//! Names follow the animation-library conventions the site's motion was
//! designed with: `power1` is quadratic through `power4` quintic, `back`
//! overshoots, and anything else can be written as a CSS `cubic-bezier`.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::RevealError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseMode {
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Ease {
    Linear,
    /// Polynomial ease of degree `power + 1`.
    Power { power: u8, mode: EaseMode },
    /// Overshoots past the end and settles back.
    BackOut { overshoot: f64 },
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power {
            power: 1,
            mode: EaseMode::Out,
        }
    }
}

const DEFAULT_OVERSHOOT: f64 = 1.70158;

impl Ease {
    pub const fn power(power: u8, mode: EaseMode) -> Self {
        Ease::Power { power, mode }
    }

    pub const fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Ease::CubicBezier { x1, y1, x2, y2 }
    }

    /// Map linear progress in `[0, 1]` to eased progress. Input outside the
    /// range is clamped. Output can leave `[0, 1]` for overshooting curves.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power { power, mode } => {
                let degree = i32::from(power) + 1;
                match mode {
                    EaseMode::In => t.powi(degree),
                    EaseMode::Out => 1.0 - (1.0 - t).powi(degree),
                    EaseMode::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(degree) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(degree) / 2.0
                        }
                    }
                }
            }
            Ease::BackOut { overshoot } => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Ease::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, progress: f64) -> f64 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    let t = solve_curve_x(x1, x2, progress);
    bezier(y1, y2, t)
}

/// Newton-Raphson first, bisection if the slope is too flat to converge.
fn solve_curve_x(x1: f64, x2: f64, target: f64) -> f64 {
    let mut t = target;
    for _ in 0..8 {
        let error = bezier(x1, x2, t) - target;
        if error.abs() < 1e-7 {
            return t;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    let (mut low, mut high) = (0.0, 1.0);
    t = target;
    for _ in 0..32 {
        let x = bezier(x1, x2, t);
        if (x - target).abs() < 1e-7 {
            break;
        }
        if x < target {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    t
}

#[inline]
fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn parse_args(args: &str) -> Option<Vec<f64>> {
    args.split(',').map(|arg| arg.trim().parse().ok()).collect()
}

impl FromStr for Ease {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || RevealError::UnknownEase(s.to_string());
        let name = s.trim();

        match name {
            "linear" | "none" | "power0" | "power0.out" => return Ok(Ease::Linear),
            "ease" => return Ok(Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0)),
            "easeIn" | "ease-in" => return Ok(Ease::cubic_bezier(0.42, 0.0, 1.0, 1.0)),
            "easeOut" | "ease-out" => return Ok(Ease::cubic_bezier(0.0, 0.0, 0.58, 1.0)),
            "easeInOut" | "ease-in-out" => return Ok(Ease::cubic_bezier(0.42, 0.0, 0.58, 1.0)),
            _ => {}
        }

        if let Some(args) = name
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return match parse_args(args).as_deref() {
                Some(&[x1, y1, x2, y2]) if (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) => {
                    Ok(Ease::cubic_bezier(x1, y1, x2, y2))
                }
                _ => Err(unknown()),
            };
        }

        if let Some(rest) = name.strip_prefix("back.out") {
            if rest.is_empty() {
                return Ok(Ease::BackOut { overshoot: DEFAULT_OVERSHOOT });
            }
            return match rest
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(parse_args)
                .as_deref()
            {
                Some(&[overshoot]) => Ok(Ease::BackOut { overshoot }),
                _ => Err(unknown()),
            };
        }

        if let Some(rest) = name.strip_prefix("power") {
            let (power, mode) = rest.split_once('.').unwrap_or((rest, "out"));
            let power: u8 = power.parse().map_err(|_| unknown())?;
            let mode = match mode {
                "in" => EaseMode::In,
                "out" => EaseMode::Out,
                "inOut" => EaseMode::InOut,
                _ => return Err(unknown()),
            };
            return match power {
                0 => Ok(Ease::Linear),
                1..=4 => Ok(Ease::Power { power, mode }),
                _ => Err(unknown()),
            };
        }

        Err(unknown())
    }
}

impl TryFrom<String> for Ease {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn every_curve_hits_both_ends() {
        let curves = [
            Ease::Linear,
            Ease::power(3, EaseMode::Out),
            Ease::power(4, EaseMode::Out),
            Ease::power(2, EaseMode::InOut),
            Ease::BackOut { overshoot: 1.7 },
            Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0),
        ];
        for ease in curves {
            assert!(approx_eq(ease.evaluate(0.0), 0.0), "{:?} at 0", ease);
            assert!(approx_eq(ease.evaluate(1.0), 1.0), "{:?} at 1", ease);
        }
    }

    #[test]
    fn power_out_degrees() {
        // power3 is quartic, power4 quintic.
        assert!(approx_eq(Ease::power(3, EaseMode::Out).evaluate(0.5), 1.0 - 0.5f64.powi(4)));
        assert!(approx_eq(Ease::power(4, EaseMode::Out).evaluate(0.5), 1.0 - 0.5f64.powi(5)));
        assert!(approx_eq(Ease::power(1, EaseMode::In).evaluate(0.5), 0.25));
        assert!(approx_eq(Ease::power(2, EaseMode::InOut).evaluate(0.5), 0.5));
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let ease = Ease::BackOut { overshoot: 1.7 };
        let peak = (1..100)
            .map(|i| ease.evaluate(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "expected overshoot, peak was {}", peak);
    }

    #[test]
    fn css_ease_midpoint() {
        let mid = Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0).evaluate(0.5);
        assert!(mid > 0.75 && mid < 0.85, "got {}", mid);
    }

    #[test]
    fn clamps_input() {
        let ease = Ease::power(3, EaseMode::Out);
        assert_eq!(ease.evaluate(-1.0), 0.0);
        assert_eq!(ease.evaluate(2.0), 1.0);
    }

    #[test]
    fn parses_names() {
        assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::power(3, EaseMode::Out));
        assert_eq!("power4.out".parse::<Ease>().unwrap(), Ease::power(4, EaseMode::Out));
        assert_eq!("power2".parse::<Ease>().unwrap(), Ease::power(2, EaseMode::Out));
        assert_eq!("power1.inOut".parse::<Ease>().unwrap(), Ease::power(1, EaseMode::InOut));
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::Linear);
        assert_eq!(
            "back.out(1.7)".parse::<Ease>().unwrap(),
            Ease::BackOut { overshoot: 1.7 }
        );
        assert_eq!(
            "back.out".parse::<Ease>().unwrap(),
            Ease::BackOut { overshoot: DEFAULT_OVERSHOOT }
        );
        assert_eq!(
            "cubic-bezier(0.25, 0.1, 0.25, 1)".parse::<Ease>().unwrap(),
            Ease::cubic_bezier(0.25, 0.1, 0.25, 1.0)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["power9.out", "power3.sideways", "bounce", "back.out(", "cubic-bezier(2, 0, 0, 1)"] {
            assert!(
                matches!(name.parse::<Ease>(), Err(RevealError::UnknownEase(_))),
                "{} should not parse",
                name
            );
        }
    }
}
