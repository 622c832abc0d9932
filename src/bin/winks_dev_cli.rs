// src/bin/winks_dev_cli.rs
//
// Dev-CLI: играет симулированный матч и печатает табло по событиям.
//
// Использование:
//   winks_dev_cli                      – парный матч (25 мин), случайный seed
//   winks_dev_cli setup.json           – сетап из файла
//   winks_dev_cli setup.json 42        – сетап из файла, seed = 42
//   winks_dev_cli singles 42           – пресет singles/pairs вместо файла
//
// Уровень логов: WINKS_LOG_LEVEL (по умолчанию info).

use std::process::ExitCode;

use winks_engine::domain::{GameFormat, WinkColour, WinksGameSetup};
use winks_engine::engine::GameEventKind;
use winks_engine::infra::logging::init_logging;
use winks_engine::infra::{DeterministicRng, SystemRng};
use winks_engine::sim::{MatchSimulator, RandomSource, SimConfig, SimulationReport};

fn main() -> ExitCode {
    init_logging(1);

    let mut args = std::env::args().skip(1);
    let setup = match load_setup(args.next()) {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("[CLI] Не удалось загрузить сетап: {err}");
            return ExitCode::FAILURE;
        }
    };
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    println!("=== WINKS MATCH CLOCK DEV-CLI ===");
    println!(
        "format={:?} | time_limit={} | label={}",
        setup.format,
        format_ms(setup.time_limit_ms),
        setup.label.as_deref().unwrap_or("-")
    );

    let result = match seed {
        Some(seed) => {
            println!("seed={seed}\n");
            run(setup, DeterministicRng::from_seed(seed))
        }
        None => {
            println!("seed=<system>\n");
            run(setup, SystemRng)
        }
    };

    match result {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("[CLI] BUG: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_setup(arg: Option<String>) -> Result<WinksGameSetup, String> {
    match arg.as_deref() {
        None | Some("pairs") => Ok(WinksGameSetup::from_format(GameFormat::Pairs)),
        Some("singles") => Ok(WinksGameSetup::from_format(GameFormat::Singles)),
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            WinksGameSetup::from_json(&raw).map_err(|e| e.to_string())
        }
    }
}

fn run<R: RandomSource>(
    setup: WinksGameSetup,
    mut rng: R,
) -> Result<SimulationReport, winks_engine::GameStateError> {
    // Squidge-off тоже разыгрываем случайно.
    let winner = WinkColour::ALL[rng.roll(4) as usize];
    println!("squidge-off winner: {winner}");

    let mut sim = MatchSimulator::new(SimConfig::standard(), rng);
    sim.run(setup, winner, 0)
}

fn print_report(report: &SimulationReport) {
    for event in &report.history.events {
        let at = format_ms(event.at_ms - report.started_at_ms);
        match &event.kind {
            GameEventKind::Started { end_time_ms } => {
                println!(
                    "[{at}] START   | time left {}",
                    format_ms(end_time_ms - event.at_ms)
                );
            }
            GameEventKind::Paused { time_remaining_ms } => {
                println!("[{at}] PAUSE   | time left {}", format_ms(*time_remaining_ms));
            }
            GameEventKind::TimeExpired { colour } => {
                println!("[{at}] TIME    | expired on {colour}");
            }
            GameEventKind::ShotPlayed {
                colour,
                round_after,
                next_colour,
            } => match (round_after, next_colour) {
                (Some(round), Some(next)) => {
                    println!("[{at}] SHOT    | {colour} played, round {round}, next {next}");
                }
                _ => println!("[{at}] SHOT    | {colour} played the last shot"),
            },
            GameEventKind::Finished { reason } => {
                println!("[{at}] FINISH  | {reason:?}");
            }
        }
    }

    println!();
    println!(
        "phase={} | shots in rounds={} | match length={}",
        report.final_state.phase_kind(),
        report.shots_in_rounds,
        format_ms(report.finished_at_ms - report.started_at_ms)
    );
}

fn format_ms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
