//! yatzy: demo CLI for the two-player dice engine.
//!
//! Subcommands:
//! - sim: simulate N matches between the built-in greedy players
//! - demo: play one match and print both score sheets

mod players;

use std::env;
use std::error::Error;
use std::process;

use players::{FirstAvailablePlayer, GreedyPlayer};
use yatzy_core::{
    Combination, Game, MatchConfig, Player, PlayerId, SeededDice, UPPER_BONUS,
};
use yatzy_logging::{now_ms, MatchSummaryV1, NdjsonWriter, TurnEventV1, LOG_SCHEMA_VERSION};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(cmd) = args.first() else {
        print_usage();
        process::exit(2);
    };

    let result = match cmd.as_str() {
        "sim" => cmd_sim(&args[1..]),
        "demo" => cmd_demo(&args[1..]),
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown subcommand: {other}");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"yatzy

USAGE:
    yatzy sim [--games N] [--seed S] [--config PATH] [--log PATH]
    yatzy demo [--seed S]
"#
    );
}

fn cmd_sim(args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut config = MatchConfig::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yatzy sim

USAGE:
    yatzy sim [--games N] [--seed S] [--config PATH] [--log PATH]

OPTIONS:
    --games N      Number of matches to simulate (default: 1)
    --seed S       Base RNG seed; match i uses S + i (default: 0)
    --config PATH  YAML config; pass it first, later flags override it
    --log PATH     Append NDJSON turn/summary events to PATH
"#
                );
                return Ok(());
            }
            "--config" => {
                config = MatchConfig::load(take_value(args, &mut i, "--config")?)?;
            }
            "--games" => {
                config.games = take_value(args, &mut i, "--games")?.parse()?;
            }
            "--seed" => {
                config.seed = take_value(args, &mut i, "--seed")?.parse()?;
            }
            "--log" => {
                config.log_path = Some(take_value(args, &mut i, "--log")?.into());
            }
            other => {
                return Err(format!("Unknown argument: {other}").into());
            }
        }
        i += 1;
    }

    let mut log = match &config.log_path {
        Some(path) => Some(NdjsonWriter::open_append_with_flush(
            path,
            config.log_flush_every,
        )?),
        None => None,
    };

    let mut totals = [Vec::new(), Vec::new()];
    let mut wins = [0u32; 2];
    let mut draws = 0u32;

    for m in 0..config.games {
        let seed = config.seed + m as u64;
        let stats = run_match(m as u64, seed, &mut log)?;
        let scores = stats.final_scores();
        let (a, b) = (scores[&PlayerId::One], scores[&PlayerId::Two]);
        totals[0].push(a);
        totals[1].push(b);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => wins[0] += 1,
            std::cmp::Ordering::Less => wins[1] += 1,
            std::cmp::Ordering::Equal => draws += 1,
        }
    }

    if let Some(w) = &mut log {
        w.flush()?;
    }

    println!("Simulated {} matches (base seed {})", config.games, config.seed);
    for id in PlayerId::BOTH {
        let t = &totals[id.index()];
        let sum: u64 = t.iter().map(|&s| s as u64).sum();
        let mean = sum as f64 / t.len().max(1) as f64;
        println!(
            "  {id}: mean {:.1}, min {}, max {}, wins {}",
            mean,
            t.iter().min().copied().unwrap_or(0),
            t.iter().max().copied().unwrap_or(0),
            wins[id.index()],
        );
    }
    println!("  draws: {draws}");
    Ok(())
}

fn run_match(
    match_id: u64,
    seed: u64,
    log: &mut Option<NdjsonWriter>,
) -> Result<yatzy_core::MatchStats, Box<dyn Error>> {
    let mut game = Game::new(SeededDice::seed_from(seed));
    let mut one = GreedyPlayer;
    let mut two = GreedyPlayer;

    let mut round = 0u8;
    while game.stats().has_combinations_remaining() {
        round += 1;
        for id in PlayerId::BOTH {
            let player: &mut dyn Player = match id {
                PlayerId::One => &mut one,
                PlayerId::Two => &mut two,
            };
            let result = game.play_turn(id, player)?;
            game.record(&result)?;
            if let Some(w) = log {
                w.write_event(&TurnEventV1 {
                    event: "turn",
                    schema_version: LOG_SCHEMA_VERSION,
                    ts_ms: now_ms(),
                    match_id,
                    round,
                    player: id.index() as u8,
                    combination: result.combination.to_string(),
                    score: result.score,
                })?;
            }
        }
    }

    let stats = game.into_stats();
    if let Some(w) = log {
        let scores = stats.final_scores();
        let (a, b) = (scores[&PlayerId::One], scores[&PlayerId::Two]);
        w.write_event(&MatchSummaryV1 {
            event: "match_summary",
            schema_version: LOG_SCHEMA_VERSION,
            ts_ms: now_ms(),
            match_id,
            seed,
            totals: [a, b],
            bonus: [
                stats.sheet(PlayerId::One).bonus_earned(),
                stats.sheet(PlayerId::Two).bonus_earned(),
            ],
            winner: match a.cmp(&b) {
                std::cmp::Ordering::Greater => Some(0),
                std::cmp::Ordering::Less => Some(1),
                std::cmp::Ordering::Equal => None,
            },
        })?;
    }
    Ok(stats)
}

fn cmd_demo(args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut seed = 0u64;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("yatzy demo [--seed S]");
                return Ok(());
            }
            "--seed" => {
                seed = take_value(args, &mut i, "--seed")?.parse()?;
            }
            other => {
                return Err(format!("Unknown argument: {other}").into());
            }
        }
        i += 1;
    }

    let mut game = Game::new(SeededDice::seed_from(seed));
    game.play_match(&mut GreedyPlayer, &mut FirstAvailablePlayer)?;
    let stats = game.into_stats();

    println!("{:<16} {:>8} {:>8}", "", "greedy", "first");
    for c in Combination::ALL {
        println!(
            "{:<16} {:>8} {:>8}",
            c.to_string(),
            fmt_slot(stats.sheet(PlayerId::One).score_of(c)),
            fmt_slot(stats.sheet(PlayerId::Two).score_of(c)),
        );
    }
    for id in PlayerId::BOTH {
        let sheet = stats.sheet(id);
        let bonus = if sheet.bonus_earned() { UPPER_BONUS } else { 0 };
        println!(
            "{id}: upper {} (+{bonus} bonus), lower {}, total {}",
            sheet.upper_section_total(),
            sheet.lower_section_total(),
            sheet.final_score(),
        );
    }
    Ok(())
}

fn fmt_slot(score: Option<u32>) -> String {
    match score {
        Some(s) => s.to_string(),
        None => "-".to_string(),
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, Box<dyn Error>> {
    if *i + 1 >= args.len() {
        return Err(format!("Missing value for {flag}").into());
    }
    *i += 1;
    Ok(&args[*i])
}
