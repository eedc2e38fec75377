mod ui;

use anyhow::{anyhow, Context};
use cricket_core::engine::{Awaiting, EngineOptions, MatchEngine};
use cricket_core::model::Mode;
use cricket_core::rules::MatchRules;
use cricket_core::store::StatsStore;
use log::LevelFilter;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use ui::{AfterMatch, MenuChoice};

const USAGE: &str = "Usage: cricket-cli [play|stats|reset-stats] [--seed N] [--stats-file PATH] \
[--log-json PATH] [--target N] [--rules PATH] [--fast] [--verbose]";

#[derive(Debug, Default)]
struct Options {
    seed: Option<u64>,
    stats_file: Option<PathBuf>,
    log_json: Option<PathBuf>,
    target: Option<u32>,
    rules: Option<PathBuf>,
    fast: bool,
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1).peekable();
    let command = match args.peek() {
        Some(arg) if !arg.starts_with("--") => args.next(),
        _ => None,
    };
    let opts = parse_options(args)?;

    env_logger::Builder::new()
        .filter_level(log_level(opts.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))?;

    let store = opts
        .stats_file
        .clone()
        .map(StatsStore::at)
        .unwrap_or_else(|| StatsStore::in_dir(default_stats_dir()));

    match command.as_deref() {
        None | Some("play") => play(&opts, &store),
        Some("stats") => {
            let stats = store
                .load()
                .with_context(|| format!("failed to read {}", store.path().display()))?;
            ui::print_stats(&stats);
            Ok(())
        }
        Some("reset-stats") => {
            store
                .reset()
                .with_context(|| format!("failed to remove {}", store.path().display()))?;
            println!("Career stats reset.");
            Ok(())
        }
        Some(cmd) => Err(anyhow!("Unknown command '{}'\n{}", cmd, USAGE)),
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => opts.seed = Some(parse_value(&arg, args.next())?),
            "--target" => opts.target = Some(parse_value(&arg, args.next())?),
            "--stats-file" => opts.stats_file = Some(path_value(&arg, args.next())?),
            "--log-json" => opts.log_json = Some(path_value(&arg, args.next())?),
            "--rules" => opts.rules = Some(path_value(&arg, args.next())?),
            "--fast" => opts.fast = true,
            "--verbose" => opts.verbose = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => return Err(anyhow!("Unknown arg '{}'\n{}", other, USAGE)),
        }
    }
    Ok(opts)
}

/// `RUST_LOG` still overrides this.
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> anyhow::Result<T> {
    let value = value.ok_or_else(|| anyhow!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| anyhow!("invalid value '{}' for {}", value, flag))
}

fn path_value(flag: &str, value: Option<String>) -> anyhow::Result<PathBuf> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("{} needs a path", flag))
}

fn default_stats_dir() -> PathBuf {
    env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".cricket-sim"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn load_rules(path: &Path) -> anyhow::Result<MatchRules> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file at {}", path.display()))?;
    let rules: MatchRules = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    rules.validate()?;
    Ok(rules)
}

fn play(opts: &Options, store: &StatsStore) -> anyhow::Result<()> {
    let rules = match &opts.rules {
        Some(path) => load_rules(path)?,
        None => MatchRules::default(),
    };
    let seed = opts.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("seed {}", seed);

    let mut started = 0u64;
    loop {
        let mode = match ui::prompt_menu()? {
            MenuChoice::Play(mode) => mode,
            MenuChoice::Stats => {
                ui::print_stats(&store.load_or_default());
                ui::wait_for_enter()?;
                continue;
            }
            MenuChoice::Quit => return Ok(()),
        };
        let batting_first = match mode {
            Mode::FullMatch => ui::prompt_toss()?,
            _ => true,
        };
        let options = EngineOptions {
            seed: seed.wrapping_add(started),
            target: opts.target,
            rules: rules.clone(),
        };
        let mut engine = MatchEngine::start_match(mode, batting_first, options)?;
        started += 1;
        loop {
            play_match(&mut engine, opts)?;
            record_stats(&engine, store);
            if let Some(path) = &opts.log_json {
                write_log(&engine, path)?;
            }
            match ui::prompt_after_match()? {
                AfterMatch::Replay => {
                    engine.reset_match();
                }
                AfterMatch::Menu => break,
                AfterMatch::Quit => return Ok(()),
            }
        }
    }
}

fn play_match(engine: &mut MatchEngine, opts: &Options) -> anyhow::Result<()> {
    loop {
        ui::render(engine.state());
        match engine.awaiting() {
            Awaiting::Reveal => {
                engine.prepare_delivery()?;
            }
            Awaiting::Shot => {
                let action = ui::prompt_shot(engine.state().incoming_delivery())?;
                engine.submit_action(action)?;
                suspense(engine, opts);
            }
            Awaiting::Delivery => {
                let delivery = ui::prompt_delivery()?;
                engine.submit_delivery(delivery)?;
                suspense(engine, opts);
            }
            Awaiting::Settle => {
                engine.settle()?;
            }
            Awaiting::Nothing => {
                ui::print_game_over(&engine.snapshot(), engine.state());
                return Ok(());
            }
        }
    }
}

fn suspense(engine: &MatchEngine, opts: &Options) {
    if opts.fast {
        return;
    }
    ui::render(engine.state());
    thread::sleep(engine.state().settle_delay());
}

/// Stats failures are reported and otherwise ignored; the match result
/// stands either way. An unreadable record is kept as it is.
fn record_stats(engine: &MatchEngine, store: &StatsStore) {
    if let Err(err) = store.record_match(engine.state()) {
        log::warn!("could not record stats in {}: {}", store.path().display(), err);
        eprintln!("Warning: career stats were not updated ({err})");
    }
}

fn write_log(engine: &MatchEngine, path: &Path) -> anyhow::Result<()> {
    let log_json = engine.logger().to_json();
    fs::write(path, serde_json::to_string_pretty(&log_json)? + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn verbose_flag_raises_log_level() {
        let opts = parse_options(args(&["--verbose", "--seed", "9"])).unwrap();
        assert_eq!(log_level(opts.verbose), LevelFilter::Debug);
        assert_eq!(opts.seed, Some(9));
        let quiet = parse_options(args(&["--fast"])).unwrap();
        assert_eq!(log_level(quiet.verbose), LevelFilter::Warn);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(parse_options(args(&["--target"])).is_err());
        assert!(parse_options(args(&["--seed", "many"])).is_err());
        assert!(parse_options(args(&["--bogus"])).is_err());
    }
}
