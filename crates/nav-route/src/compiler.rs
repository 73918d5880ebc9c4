//! Router response → instruction sequence.
//!
//! # Step filtering
//!
//! Interior steps shorter than `min_step_m` (10 m by default) are router
//! noise (lane shifts, tiny name changes) and are dropped.  The first and last
//! steps are always kept.
//!
//! # Running distance
//!
//! The retained steps are folded left carrying `(running_total, instructions)`.
//! Each instruction records the total *before* its own stretch as
//! `cumulative_distance_m`, so the sequence is non-decreasing and the
//! synthetic arrival instruction's cumulative distance equals the sum of all
//! retained leg distances.

use log::{debug, info};

use nav_core::{CompileConfig, Endpoint, Locale, NavError, NavResult, Place};

use crate::phrases::{Phrases, DEFAULT_STREET};
use crate::text::{render, Maneuver};
use crate::{CompiledRoute, Instruction, ManeuverKind, RawRoute, RawStep};

/// Compiles router responses with a fixed configuration and phrase table.
///
/// Compilation is pure: identical inputs always yield identical routes.
#[derive(Clone, Debug)]
pub struct Compiler {
    config:  CompileConfig,
    phrases: &'static Phrases,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompileConfig::default(), Locale::default())
    }
}

impl Compiler {
    pub fn new(config: CompileConfig, locale: Locale) -> Self {
        Self {
            config,
            phrases: Phrases::for_locale(locale),
        }
    }

    #[inline]
    pub fn phrases(&self) -> &'static Phrases {
        self.phrases
    }

    /// Compile `raw` into a [`CompiledRoute`] between `origin` and
    /// `destination`.
    ///
    /// # Errors
    ///
    /// - [`NavError::RoutingFailed`] if the router reported a failure status
    ///   or returned no route.
    /// - [`NavError::MissingCoordinates`] if either place has no coordinate.
    pub fn compile(
        &self,
        origin:      Place,
        destination: Place,
        raw:         &RawRoute,
    ) -> NavResult<CompiledRoute> {
        if !raw.is_ok() {
            return Err(NavError::RoutingFailed(raw.failure_message()));
        }
        if origin.coordinate.is_none() {
            return Err(NavError::MissingCoordinates(Endpoint::Origin));
        }
        if destination.coordinate.is_none() {
            return Err(NavError::MissingCoordinates(Endpoint::Destination));
        }
        let Some(candidate) = raw.primary() else {
            return Err(NavError::RoutingFailed("router returned no route".to_string()));
        };

        let steps: Vec<&RawStep> = candidate.steps().collect();
        let last = steps.len().saturating_sub(1);

        let (total, mut instructions) = steps
            .iter()
            .enumerate()
            .filter(|&(i, step)| {
                let keep = step.distance >= self.config.min_step_m || i == 0 || i == last;
                if !keep {
                    debug!("dropping step {i}: {:.1} m {}", step.distance, step.maneuver.kind);
                }
                keep
            })
            .fold(
                (0.0_f64, Vec::with_capacity(steps.len() + 1)),
                |(total, mut acc), (_, step)| {
                    let after = total + step.distance;
                    acc.push(self.instruction(step, total, after));
                    (after, acc)
                },
            );

        if !instructions.is_empty() {
            instructions.push(self.arrival(total));
        }

        info!(
            "compiled route: {} of {} steps kept, {:.0} m, {:.0} s",
            instructions.len().saturating_sub(1),
            steps.len(),
            candidate.distance,
            candidate.duration,
        );

        Ok(CompiledRoute {
            origin,
            destination,
            instructions,
            total_distance_m: candidate.distance,
            total_duration_s: candidate.duration,
            raw_geometry:     candidate.geometry.clone(),
        })
    }

    /// Build the instruction for one retained step.  `before` / `after` are
    /// the running totals around this step's stretch.
    fn instruction(&self, step: &RawStep, before: f64, after: f64) -> Instruction {
        let kind     = ManeuverKind::from_tag(&step.maneuver.kind);
        let modifier = step.maneuver.modifier();
        let street   = match step.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => DEFAULT_STREET.to_string(),
        };

        let text = render(
            &Maneuver {
                kind:       &kind,
                modifier,
                street:     &street,
                distance_m: step.distance,
            },
            self.phrases,
            self.config.distance_suffix_min_m,
        );

        Instruction {
            text,
            modifier:              modifier.map(str::to_string),
            maneuver_kind:         kind,
            street_name:           street,
            leg_distance_m:        step.distance,
            leg_duration_s:        step.duration,
            cumulative_distance_m: before,
            alert_threshold_m:     self.alert_threshold(after),
            coordinate:            step.maneuver.coordinate(),
            alert_fired:           false,
        }
    }

    fn arrival(&self, total: f64) -> Instruction {
        Instruction {
            text:                  self.phrases.arrived_final.to_string(),
            maneuver_kind:         ManeuverKind::Arrive,
            modifier:              None,
            street_name:           String::new(),
            leg_distance_m:        0.0,
            leg_duration_s:        0.0,
            cumulative_distance_m: total,
            alert_threshold_m:     self.alert_threshold(total),
            coordinate:            None,
            alert_fired:           false,
        }
    }

    #[inline]
    fn alert_threshold(&self, distance_m: f64) -> f64 {
        (distance_m - self.config.alert_lead_m).max(0.0)
    }
}

/// Compile with the default configuration and English phrases.
///
/// See [`Compiler::compile`].
pub fn compile(origin: Place, destination: Place, raw: &RawRoute) -> NavResult<CompiledRoute> {
    Compiler::default().compile(origin, destination, raw)
}
