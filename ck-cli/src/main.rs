//! ck: pass-and-play cricket darts scorekeeper.
//!
//! Subcommands:
//! - play

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use ck_controller::{GameController, GameObserver, Player, ThrowOutcome};
use ck_core::{Config, Multiplier, Target, CRICKET_TARGETS};
use ck_logging::{
    hash_config_bytes, MatchEndedV1, MatchStartedV1, NdjsonWriter, ThrowEventV1, UndoEventV1,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("play") => cmd_play(&args[2..]),
        Some("--help") | Some("-h") | None => print_usage(),
        Some(other) => {
            eprintln!("Unknown subcommand: {}", other);
            eprintln!("Run `ck --help` for usage.");
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"ck - cricket darts scorekeeper

USAGE:
    ck play [OPTIONS]

OPTIONS:
    --config FILE   Load a YAML config
    --players N     Number of unnamed seats, 1..=8 (default: 3)
    --rounds R      Round limit (default: 20)
    --names A,B,C   Player names (overrides --players)
    --log FILE      Append an NDJSON match log
"#
    );
}

fn cmd_play(args: &[String]) {
    let mut config_path: Option<PathBuf> = None;
    let mut players: Option<u32> = None;
    let mut rounds: Option<u32> = None;
    let mut names: Option<Vec<String>> = None;
    let mut log_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"ck play

Reads throws from stdin, one per line:
    <target> [mult]   e.g. `20 3`, `bull 2`, `miss`
    undo              revert the last throw
    board             reprint the score table
    quit              abandon the match

Targets are 1..=20, `bull`, or `miss`; mult is 1..=3 (default 1).
Anything unrecognized is ignored.
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(PathBuf::from(take_value(args, &mut i, "--config")));
            }
            "--players" => {
                let v = take_value(args, &mut i, "--players");
                players = Some(v.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --players value: {}", v);
                    process::exit(1);
                }));
            }
            "--rounds" => {
                let v = take_value(args, &mut i, "--rounds");
                rounds = Some(v.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --rounds value: {}", v);
                    process::exit(1);
                }));
            }
            "--names" => {
                let v = take_value(args, &mut i, "--names");
                names = Some(v.split(',').map(|s| s.to_string()).collect());
            }
            "--log" => {
                log_path = Some(PathBuf::from(take_value(args, &mut i, "--log")));
            }
            other => {
                eprintln!("Unknown option for `ck play`: {}", other);
                eprintln!("Run `ck play --help` for usage.");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(p) => Config::load(&p).unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    if let Some(n) = players {
        if !(1..=8).contains(&n) {
            eprintln!("--players must be in 1..=8");
            process::exit(1);
        }
        config.game.num_players = n;
    }
    if let Some(r) = rounds {
        config.game.rounds = r;
    }
    if let Some(n) = names {
        config.game.players = n;
    }
    if log_path.is_some() {
        config.logging.match_log = log_path;
    }

    let mut log = config.logging.match_log.as_ref().map(|p| {
        NdjsonWriter::open_append_with_flush(p, config.logging.flush_every).unwrap_or_else(|e| {
            eprintln!("Failed to open match log: {}", e);
            process::exit(1);
        })
    });

    let roster = config.game.roster();
    let mut controller = GameController::new(FinalScores::default());
    controller.start(&roster, config.game.rounds);

    if let Some(w) = log.as_mut() {
        let config_hash = serde_yaml::to_string(&config)
            .ok()
            .map(|s| hash_config_bytes(s.as_bytes()));
        let started = MatchStartedV1::new(
            controller
                .state()
                .map(|s| s.players.iter().map(|p| p.name.clone()).collect())
                .unwrap_or_default(),
            config.game.rounds,
            config_hash,
        );
        let _ = w.write_event(&started);
    }

    println!("CRICKET MASTER KILLER");
    print_board(&controller);
    print_header(&controller);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        match parse_command(&line) {
            Some(Command::Quit) => {
                println!("Match abandoned.");
                break;
            }
            Some(Command::Board) => {
                print_board(&controller);
            }
            Some(Command::Undo) => {
                let undone = controller.undo();
                if let Some(w) = log.as_mut() {
                    let _ = w.write_event(&UndoEventV1::new(undone));
                }
                if undone {
                    println!("Undid the last throw.");
                    print_board(&controller);
                } else {
                    println!("Nothing to undo.");
                }
            }
            Some(Command::Throw(target, mult)) => {
                let (round, total_turns, seat) = controller
                    .state()
                    .map(|s| (s.round, s.total_turns, s.current_seat()))
                    .unwrap_or((0, 0, None));

                let outcome = controller.apply_throw(target, mult);
                if let Some(w) = log.as_mut() {
                    let _ = w.write_event(&ThrowEventV1::new(
                        round,
                        total_turns + 1,
                        seat,
                        target.to_string(),
                        mult.factor(),
                        outcome_label(outcome),
                    ));
                }
                match outcome {
                    ThrowOutcome::Applied => print_board(&controller),
                    ThrowOutcome::GameEnded => {
                        if let (Some(w), Some(s)) = (log.as_mut(), controller.state()) {
                            let _ =
                                w.write_event(&MatchEndedV1::new(s.round, s.total_turns, &s.players));
                            let _ = w.flush();
                        }
                        break;
                    }
                    ThrowOutcome::Ignored => println!("Throw ignored."),
                }
            }
            None => {
                println!("Unrecognized input (try `20 3`, `bull 2`, `miss`, `undo`, `quit`).");
            }
        }
        if !controller.is_ended() {
            print_header(&controller);
        }
        let _ = io::stdout().flush();
    }

    if let Some(w) = log.as_mut() {
        let _ = w.flush();
    }
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    if *i + 1 >= args.len() {
        eprintln!("Missing value for {}", flag);
        process::exit(1);
    }
    *i += 1;
    &args[*i]
}

fn outcome_label(outcome: ThrowOutcome) -> &'static str {
    match outcome {
        ThrowOutcome::Applied => "applied",
        ThrowOutcome::GameEnded => "game_ended",
        ThrowOutcome::Ignored => "ignored",
    }
}

enum Command {
    Throw(Target, Multiplier),
    Undo,
    Board,
    Quit,
}

/// Parse one stdin line. `None` means "ignore it" - bad input is absorbed,
/// never reported as an error.
fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    match head.to_ascii_lowercase().as_str() {
        "undo" | "u" => Some(Command::Undo),
        "board" => Some(Command::Board),
        "quit" | "q" | "exit" => Some(Command::Quit),
        key => {
            let target = Target::from_key(key)?;
            let mult = match parts.next() {
                Some(m) => Multiplier::from_value(m.parse().ok()?)?,
                None => Multiplier::Single,
            };
            // The board only has single and double bulls.
            if target == Target::Bull && mult == Multiplier::Triple {
                return None;
            }
            if parts.next().is_some() {
                return None;
            }
            Some(Command::Throw(target, mult))
        }
    }
}

fn print_header<O: GameObserver>(c: &GameController<O>) {
    let Some(s) = c.state() else { return };
    let name = s.current_player().map_or("-", |p| p.name.as_str());
    println!(
        "Round {} / {}, {}, Throw {} / 3",
        s.round,
        s.max_rounds,
        name,
        s.throws_this_turn + 1
    );
}

fn print_board<O: GameObserver>(c: &GameController<O>) {
    let Some(s) = c.state() else { return };
    for p in &s.players {
        println!("  {:<12} {:>7}", p.name, p.score.total);
        let mut line = String::from("   ");
        for t in CRICKET_TARGETS {
            let hits = p.score.marks_on(t).min(3) as usize;
            line.push_str(&format!(" {}:{:<3}", t, "✔".repeat(hits)));
        }
        println!("{}", line);
    }
}

/// End-of-game collaborator: renders the final standings. Sorting by
/// descending total happens here, on the presentation side; the roster
/// itself arrives in seat order.
#[derive(Default)]
struct FinalScores;

impl GameObserver for FinalScores {
    fn on_end_game(&mut self, players: &[Player]) {
        let mut ranked: Vec<&Player> = players.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .total
                .partial_cmp(&a.score.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        println!();
        println!("Final Scores:");
        for (i, p) in ranked.iter().enumerate() {
            let marker = if i == 0 { " (winner)" } else { "" };
            println!("  {}. {:<12} {:>7}{}", i + 1, p.name, p.score.total, marker);
            for t in CRICKET_TARGETS {
                let hits = p.score.marks_on(t).min(3) as usize;
                println!("       {:>4}: {}", t.to_string(), "✔".repeat(hits));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_throw_commands() {
        assert!(matches!(
            parse_command("20 3"),
            Some(Command::Throw(Target::Number(20), Multiplier::Triple))
        ));
        assert!(matches!(
            parse_command("bull 2"),
            Some(Command::Throw(Target::Bull, Multiplier::Double))
        ));
        assert!(matches!(
            parse_command("miss"),
            Some(Command::Throw(Target::Miss, Multiplier::Single))
        ));
        assert!(matches!(
            parse_command("  5  "),
            Some(Command::Throw(Target::Number(5), Multiplier::Single))
        ));
    }

    #[test]
    fn parses_control_commands() {
        assert!(matches!(parse_command("undo"), Some(Command::Undo)));
        assert!(matches!(parse_command("board"), Some(Command::Board)));
        assert!(matches!(parse_command("q"), Some(Command::Quit)));
    }

    #[test]
    fn absorbs_bad_input() {
        assert!(parse_command("").is_none());
        assert!(parse_command("0").is_none());
        assert!(parse_command("21").is_none());
        assert!(parse_command("20 4").is_none());
        assert!(parse_command("20 3 extra").is_none());
        assert!(parse_command("bull 3").is_none());
        assert!(parse_command("nonsense").is_none());
    }
}
