//! replay: drive one navigation session from a recorded route and GPS track.
//!
//! Compiles a stored routing-service response into instructions, starts a
//! session on it, then feeds every fix of the track through the session
//! registry.  Push messages are printed as they would be delivered and every
//! event is logged to `output/replay/session_events.csv`.
//!
//! ```text
//! replay [--config replay.toml] [route.json] [track.csv]
//! ```
//!
//! Without arguments the embedded São Paulo route and track are used.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use nav_core::{NavConfig, NavError, Place, SessionId};
use nav_output::{status_message, CsvEventWriter, EventLogObserver, PushMessage, PushQueue};
use nav_route::{parse_route_response, Compiler};
use nav_session::{
    load_fixes_csv, load_fixes_reader, Command, NavEvent, PositionFix, SessionObserver, SessionRegistry,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SESSION:    SessionId = SessionId(1);
const OUTPUT_DIR: &str      = "output/replay";

// Four-step drive in central São Paulo, ~950 m.
const ROUTE_JSON: &str = include_str!("../data/route.json");
// One fix every ~45 m, 5 s apart.
const TRACK_CSV:  &str = include_str!("../data/track.csv");

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    config_path: Option<PathBuf>,
    route_path:  Option<PathBuf>,
    track_path:  Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut positional = Vec::new();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                args.config_path = Some(PathBuf::from(path));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    args.route_path = positional.next();
    args.track_path = positional.next();
    if positional.next().is_some() {
        return Err(anyhow!("usage: replay [--config FILE] [ROUTE_JSON] [TRACK_CSV]"));
    }
    Ok(args)
}

fn load_config(path: Option<&Path>) -> NavConfig {
    let Some(path) = path else {
        return NavConfig::default();
    };
    match fs::read_to_string(path) {
        Ok(contents) => match basic_toml::from_str(&contents) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("Failed to parse config {}: {}", path.display(), e);
                NavConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read config {}: {}", path.display(), e);
            NavConfig::default()
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Fans every notification out to the push queue and the event log, and
/// counts what went by.
struct ReplayObserver {
    push:     PushQueue,
    log:      EventLogObserver<CsvEventWriter>,
    fixes:    usize,
    alerts:   usize,
    rejected: usize,
}

impl ReplayObserver {
    fn new(log: EventLogObserver<CsvEventWriter>) -> Self {
        Self { push: PushQueue::new(), log, fixes: 0, alerts: 0, rejected: 0 }
    }
}

impl SessionObserver for ReplayObserver {
    fn on_fix(&mut self, session: SessionId, fix: &PositionFix) {
        self.fixes += 1;
        self.push.on_fix(session, fix);
        self.log.on_fix(session, fix);
    }

    fn on_event(&mut self, session: SessionId, event: &NavEvent) {
        if matches!(event, NavEvent::ProximityAlert { .. }) {
            self.alerts += 1;
        }
        self.push.on_event(session, event);
        self.log.on_event(session, event);
    }

    fn on_rejected(&mut self, session: SessionId, error: &NavError) {
        self.rejected += 1;
        self.push.on_rejected(session, error);
        self.log.on_rejected(session, error);
    }
}

fn print_message(session: SessionId, message: &PushMessage) {
    println!("  [{session}] {:<20} {}", message.topic.path(), message.payload);
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = load_config(args.config_path.as_deref());
    println!("=== replay: turn-by-turn session playback ===");
    println!(
        "Locale: {}  |  Alert band: {:.0}..{:.0} m",
        config.locale, config.session.alert_min_m, config.session.alert_max_m,
    );
    println!();

    // 1. Parse the stored routing response.
    let body = match &args.route_path {
        Some(path) => fs::read_to_string(path)?,
        None => ROUTE_JSON.to_string(),
    };
    let raw = parse_route_response(&body)?;

    // 2. Endpoints come from the first and last maneuver locations.
    let mut locations = raw
        .primary()
        .into_iter()
        .flat_map(|r| r.steps())
        .filter_map(|s| s.maneuver.coordinate());
    let from = locations.next().ok_or_else(|| anyhow!("route has no located steps"))?;
    let to = locations.last().unwrap_or(from);

    // 3. Compile.
    let compiler = Compiler::new(config.compile.clone(), config.locale);
    let route = compiler.compile(Place::from_coordinate(from), Place::from_coordinate(to), &raw)?;
    println!(
        "Route: {} instructions, {:.0} m, {:.0} s",
        route.len(),
        route.total_distance_m,
        route.total_duration_s,
    );
    for (i, instruction) in route.instructions.iter().enumerate() {
        println!("  {i:>2}. {}", instruction.text);
    }
    println!();

    // 4. Load the track.
    let fixes = match &args.track_path {
        Some(path) => load_fixes_csv(path)?,
        None => load_fixes_reader(Cursor::new(TRACK_CSV))?,
    };
    println!("Loaded {} fixes", fixes.len());
    println!();

    // 5. Session registry with one session on the compiled route.
    let mut registry = SessionRegistry::new(config.session.clone(), config.locale);
    registry.open(SESSION).set_route(route);

    // 6. Output.
    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvEventWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ReplayObserver::new(EventLogObserver::new(writer));

    // 7. Start.
    let started = registry.handle_command(SESSION, Command::Start, &mut obs);
    if let Some(status) = status_message(Command::Start, &started) {
        obs.push.push(SESSION, status);
    }
    for (session, message) in obs.push.drain() {
        print_message(session, &message);
    }
    started?;

    // 8. Play the track.
    let mut ignored = 0;
    for fix in fixes {
        if registry.handle_fix(SESSION, fix, &mut obs).is_err() {
            ignored += 1;
        }
        for (session, message) in obs.push.drain() {
            print_message(session, &message);
        }
    }

    // 9. Flush the log.
    obs.log.finish()?;
    let state = registry.get(SESSION).map(|s| s.state());

    println!();
    println!("Replay complete");
    println!("  fixes accepted : {}", obs.fixes);
    println!("  fixes ignored  : {ignored}");
    println!("  alerts         : {}", obs.alerts);
    println!("  rejections     : {}", obs.rejected);
    if let Some(state) = state {
        println!("  final state    : {state}");
    }
    println!("  event log      : {OUTPUT_DIR}/session_events.csv");

    Ok(())
}
