//! Instruction text rendering.
//!
//! Rendering is a pure lookup: the maneuver tag selects a [`Rule`] from
//! [`RULES`], and the rule assembles words from a [`Phrases`] table.  Tags
//! missing from the table use [`Rule::Straight`].
//!
//! | Tag                      | Rule         | English output                         |
//! |--------------------------|--------------|----------------------------------------|
//! | `depart`                 | `Depart`     | Start on <street>                      |
//! | `arrive`                 | `Arrive`     | You have arrived (never a suffix)      |
//! | `turn`                   | `Turn`       | Turn left [on <street>]                |
//! | `continue`               | `Continue`   | Continue on <street>                   |
//! | `roundabout`, `rotary`   | `Roundabout` | Enter the roundabout[, take the X exit]|
//! | `fork`                   | `Fork`       | At the fork, keep left/right           |
//! | `merge`                  | `Merge`      | Merge onto the road                    |
//! | `on ramp`                | `OnRamp`     | Take the ramp                          |
//! | `off ramp`               | `OffRamp`    | Exit the expressway                    |
//! | *other*                  | `Straight`   | Continue straight [on <street>]        |
//!
//! Every rule except `Arrive` appends " for N meters" when the step is longer
//! than the configured threshold.

use crate::phrases::{fill, Phrases, DEFAULT_STREET};
use crate::ManeuverKind;

/// How one maneuver kind is phrased.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Rule {
    Depart,
    Arrive,
    Turn,
    Continue,
    Roundabout,
    Fork,
    Merge,
    OnRamp,
    OffRamp,
    Straight,
}

/// Maneuver tag → rendering rule.
pub const RULES: &[(&str, Rule)] = &[
    ("depart",     Rule::Depart),
    ("arrive",     Rule::Arrive),
    ("turn",       Rule::Turn),
    ("continue",   Rule::Continue),
    ("roundabout", Rule::Roundabout),
    ("rotary",     Rule::Roundabout),
    ("fork",       Rule::Fork),
    ("merge",      Rule::Merge),
    ("on ramp",    Rule::OnRamp),
    ("off ramp",   Rule::OffRamp),
];

/// Rule for a maneuver kind.
pub fn rule_for(kind: &ManeuverKind) -> Rule {
    let tag = kind.as_str();
    RULES
        .iter()
        .find(|(t, _)| *t == tag)
        .map_or(Rule::Straight, |(_, rule)| *rule)
}

/// The inputs of one rendered instruction.
#[derive(Copy, Clone, Debug)]
pub struct Maneuver<'a> {
    pub kind:       &'a ManeuverKind,
    pub modifier:   Option<&'a str>,
    pub street:     &'a str,
    pub distance_m: f64,
}

/// Render the instruction text for `maneuver`.
///
/// `suffix_min_m` is the step length above which the distance suffix is
/// appended.
pub fn render(maneuver: &Maneuver<'_>, phrases: &Phrases, suffix_min_m: f64) -> String {
    let street = maneuver.street;
    let street_suffix = || {
        if street == DEFAULT_STREET {
            String::new()
        } else {
            fill(phrases.on_street, &[("street", street)])
        }
    };

    let mut text = match rule_for(maneuver.kind) {
        Rule::Arrive => return phrases.arrive.to_string(),
        Rule::Depart => fill(phrases.depart, &[("street", street)]),
        Rule::Turn => format!("{}{}", phrases.turn(maneuver.modifier), street_suffix()),
        Rule::Continue => fill(phrases.continue_on, &[("street", street)]),
        Rule::Roundabout => match maneuver.modifier {
            Some(m) => format!(
                "{}{}",
                phrases.roundabout,
                fill(phrases.roundabout_exit, &[("modifier", m)])
            ),
            None => phrases.roundabout.to_string(),
        },
        Rule::Fork if maneuver.modifier == Some("left") => phrases.fork_left.to_string(),
        Rule::Fork => phrases.fork_right.to_string(),
        Rule::Merge => phrases.merge.to_string(),
        Rule::OnRamp => phrases.on_ramp.to_string(),
        Rule::OffRamp => phrases.off_ramp.to_string(),
        Rule::Straight => format!("{}{}", phrases.straight, street_suffix()),
    };

    if maneuver.distance_m > suffix_min_m {
        let meters = (maneuver.distance_m.round() as i64).to_string();
        text.push_str(&fill(phrases.distance_suffix, &[("meters", &meters)]));
    }
    text
}
