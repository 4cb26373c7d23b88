//! Per-section reveal configuration and the presets the site ships with.

use serde::Deserialize;

use super::easing::{Ease, EaseMode};
use super::geometry::{Length, RootMargin, TriggerStart};
use super::observer::ObserveOptions;
use super::style::Motion;

/// Marker classes shared between the markup and the reveal presets. They are
/// selector hooks only and carry no styling.
pub mod markers {
    pub const CONTACT_ROOT: &str = "contact";
    pub const CONTACT_REVEAL: &str = "contact-reveal";

    pub const SERVICES_HEADING: &str = "services-heading";
    pub const SERVICES_GRID: &str = "services-grid";
    pub const SERVICE_CARD: &str = "service-card";

    pub const TESTIMONIALS_GRID: &str = "testimonials-grid";
    pub const TESTIMONIAL_CARD: &str = "testimonial-card";
    pub const CLIENTS_SECTION: &str = "clients-section";
    pub const CLIENT_LOGO: &str = "client-logo";
}

/// Holds a group back until `selector`'s element crosses `start`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TriggerSpec {
    pub selector: String,
    #[serde(default)]
    pub start: TriggerStart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Seconds per element.
    pub duration: f64,
    /// Seconds between consecutive elements' starts.
    pub stagger: f64,
    pub ease: Ease,
}

/// How far below its resting place a group starts when `from` is omitted.
pub const DEFAULT_RISE: f64 = 40.0;
/// Seconds per element when `duration` is omitted.
pub const DEFAULT_DURATION: f64 = 0.5;

fn default_from() -> Motion {
    Motion::hidden_below(DEFAULT_RISE)
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

/// One reveal group: every element matching `selector` animates from `from`
/// to its resting pose, in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupSpec {
    pub selector: String,
    #[serde(default = "default_from")]
    pub from: Motion,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub stagger: f64,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub trigger: Option<TriggerSpec>,
}

impl GroupSpec {
    pub fn timing(&self) -> Timing {
        Timing {
            duration: self.duration.max(0.0),
            stagger: self.stagger.max(0.0),
            ease: self.ease,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    #[serde(default)]
    pub observe: ObserveOptions,
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

fn class(marker: &str) -> String {
    format!(".{}", marker)
}

fn top_at(selector: String, viewport_pct: f64) -> Option<TriggerSpec> {
    Some(TriggerSpec {
        selector,
        start: TriggerStart {
            element: Length::Percent(0.0),
            viewport: Length::Percent(viewport_pct),
        },
    })
}

fn arm_before_bottom() -> ObserveOptions {
    ObserveOptions::with_margin(RootMargin::uniform(Length::Px(-100.0)))
}

impl SectionSpec {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            observe: ObserveOptions::default(),
            groups: Vec::new(),
        }
    }

    pub fn preset(id: &str) -> Option<SectionSpec> {
        match id {
            "contact" => Some(Self::contact()),
            "services" => Some(Self::services()),
            "testimonials" => Some(Self::testimonials()),
            _ => None,
        }
    }

    pub fn contact() -> Self {
        Self {
            id: "contact".to_string(),
            observe: arm_before_bottom(),
            groups: vec![GroupSpec {
                selector: class(markers::CONTACT_REVEAL),
                from: Motion::hidden_below(100.0),
                duration: 1.0,
                stagger: 0.1,
                ease: Ease::power(4, EaseMode::Out),
                trigger: top_at(format!("#{}", markers::CONTACT_ROOT), 70.0),
            }],
        }
    }

    pub fn services() -> Self {
        Self {
            id: "services".to_string(),
            observe: arm_before_bottom(),
            groups: vec![
                GroupSpec {
                    selector: class(markers::SERVICE_CARD),
                    from: Motion::hidden_below(80.0),
                    duration: 1.0,
                    stagger: 0.12,
                    ease: Ease::power(3, EaseMode::Out),
                    trigger: top_at(class(markers::SERVICES_GRID), 80.0),
                },
                GroupSpec {
                    selector: class(markers::SERVICES_HEADING),
                    from: Motion::hidden_below(50.0),
                    duration: 0.8,
                    stagger: 0.0,
                    ease: Ease::power(3, EaseMode::Out),
                    trigger: None,
                },
            ],
        }
    }

    pub fn testimonials() -> Self {
        Self {
            id: "testimonials".to_string(),
            observe: arm_before_bottom(),
            groups: vec![
                GroupSpec {
                    selector: class(markers::TESTIMONIAL_CARD),
                    from: Motion {
                        rotate_x: 15.0,
                        ..Motion::hidden_below(80.0)
                    },
                    duration: 1.0,
                    stagger: 0.15,
                    ease: Ease::power(3, EaseMode::Out),
                    trigger: top_at(class(markers::TESTIMONIALS_GRID), 75.0),
                },
                GroupSpec {
                    selector: class(markers::CLIENT_LOGO),
                    from: Motion {
                        scale: 0.0,
                        opacity: 0.0,
                        ..Motion::IDENTITY
                    },
                    duration: 0.6,
                    stagger: 0.08,
                    ease: Ease::BackOut { overshoot: 1.7 },
                    trigger: top_at(class(markers::CLIENTS_SECTION), 85.0),
                },
            ],
        }
    }
}
