//! Locale phrase tables.
//!
//! Templates use `{name}` placeholders filled by [`fill`].  Keeping every
//! user-visible word here leaves the rendering rules in [`crate::text`]
//! language-independent.

use nav_core::Locale;

/// Street name substituted for unnamed roads.  Instructions never append an
/// "on <street>" suffix for it.
pub const DEFAULT_STREET: &str = "estrada";

/// All user-visible phrases for one locale.
#[derive(Debug)]
pub struct Phrases {
    /// `{street}`
    pub depart:           &'static str,
    pub arrive:           &'static str,
    /// Text of the synthetic last instruction.
    pub arrived_final:    &'static str,
    /// Emitted when the session advances past the last instruction.
    pub arrival_message:  &'static str,
    /// `{distance}`: emitted when a fix lands near the destination.
    pub near_destination: &'static str,
    /// `{street}`: appended to turns and the generic rule.
    pub on_street:        &'static str,
    /// Modifier → phrase for `turn`.
    pub turns:            &'static [(&'static str, &'static str)],
    pub turn_default:     &'static str,
    /// `{street}`
    pub continue_on:      &'static str,
    pub roundabout:       &'static str,
    /// `{modifier}`
    pub roundabout_exit:  &'static str,
    pub fork_left:        &'static str,
    pub fork_right:       &'static str,
    pub merge:            &'static str,
    pub on_ramp:          &'static str,
    pub off_ramp:         &'static str,
    pub straight:         &'static str,
    /// `{meters}`
    pub distance_suffix:  &'static str,
    /// `{distance}`, `{instruction}`
    pub proximity:        &'static str,
}

pub static EN: Phrases = Phrases {
    depart:           "Start on {street}",
    arrive:           "You have arrived",
    arrived_final:    "You have arrived at your destination",
    arrival_message:  "You have arrived at your destination!",
    near_destination: "You are {distance}m from your destination!",
    on_street:        " on {street}",
    turns: &[
        ("left",         "Turn left"),
        ("right",        "Turn right"),
        ("sharp left",   "Turn sharp left"),
        ("sharp right",  "Turn sharp right"),
        ("slight left",  "Keep slightly left"),
        ("slight right", "Keep slightly right"),
    ],
    turn_default:     "Continue",
    continue_on:      "Continue on {street}",
    roundabout:       "Enter the roundabout",
    roundabout_exit:  ", take the {modifier} exit",
    fork_left:        "At the fork, keep left",
    fork_right:       "At the fork, keep right",
    merge:            "Merge onto the road",
    on_ramp:          "Take the ramp",
    off_ramp:         "Exit the expressway",
    straight:         "Continue straight",
    distance_suffix:  " for {meters} meters",
    proximity:        "In {distance} meters, {instruction}",
};

pub static PT_BR: Phrases = Phrases {
    depart:           "Inicie na {street}",
    arrive:           "Você chegou ao destino",
    arrived_final:    "Você chegou ao seu destino!",
    arrival_message:  "Você chegou ao destino!",
    near_destination: "Você está a {distance}m do destino!",
    on_street:        " na {street}",
    turns: &[
        ("left",         "Vire à esquerda"),
        ("right",        "Vire à direita"),
        ("sharp left",   "Vire acentuadamente à esquerda"),
        ("sharp right",  "Vire acentuadamente à direita"),
        ("slight left",  "Mantenha-se à esquerda"),
        ("slight right", "Mantenha-se à direita"),
    ],
    turn_default:     "Continue",
    continue_on:      "Continue na {street}",
    roundabout:       "Entre na rotatória",
    roundabout_exit:  " e pegue a {modifier} saída",
    fork_left:        "Na bifurcação, mantenha-se à esquerda",
    fork_right:       "Na bifurcação, mantenha-se à direita",
    merge:            "Entre na via",
    on_ramp:          "Entre na via expressa",
    off_ramp:         "Saia da via expressa",
    straight:         "Siga em frente",
    distance_suffix:  " por {meters} metros",
    proximity:        "Em {distance} metros, {instruction}",
};

impl Phrases {
    /// The phrase table for `locale`.
    pub fn for_locale(locale: Locale) -> &'static Phrases {
        match locale {
            Locale::En   => &EN,
            Locale::PtBr => &PT_BR,
        }
    }

    /// Turn phrase for `modifier`, or the default "continue" phrase.
    pub fn turn(&self, modifier: Option<&str>) -> &'static str {
        modifier
            .and_then(|m| self.turns.iter().find(|(key, _)| *key == m))
            .map_or(self.turn_default, |(_, phrase)| *phrase)
    }

    /// "In N meters, <instruction>".
    pub fn proximity_message(&self, distance_m: i64, instruction: &str) -> String {
        fill(
            self.proximity,
            &[("distance", &distance_m.to_string()), ("instruction", instruction)],
        )
    }

    /// "You are N m from your destination!".
    pub fn near_destination_message(&self, distance_m: i64) -> String {
        fill(self.near_destination, &[("distance", &distance_m.to_string())])
    }
}

/// Replace each `{key}` in `template` with its value.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}
