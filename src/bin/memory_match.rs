//! Terminal front end.
//!
//! Type a card number to flip it, `n` for a new game, `q` to quit.
//! Set `RUST_LOG=debug` to watch the engine.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use log::error;

use memory_match::core::DEFAULT_FLIP_BACK_DELAY_MS;
use memory_match::{MemoryConfig, Render, Resolution, Session, TextRenderer};

#[derive(Parser, Debug)]
#[command(name = "memory-match", about = "Flip two cards, match the pairs")]
struct Args {
    /// Shuffle seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// How long a mismatched pair stays visible, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FLIP_BACK_DELAY_MS)]
    delay_ms: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = MemoryConfig::default().with_flip_back_delay_ms(args.delay_ms);
    config.seed = args.seed;

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            error!("cannot start game: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut session) {
        error!("terminal error: {e}");
        std::process::exit(1);
    }
}

fn run(session: &mut Session) -> io::Result<()> {
    let renderer = TextRenderer::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", renderer.render(&session.snapshot()))?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => {
                session.new_game();
            }
            input => match input.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    let card = session.snapshot().card_at(number - 1).map(|card| card.id);
                    match card {
                        Some(id) => {
                            if let Resolution::Mismatched(..) = session.tap(id, Instant::now()) {
                                // Show both faces, then wait out the delay
                                writeln!(stdout, "{}", renderer.render(&session.snapshot()))?;
                                if let Some(deadline) = session.deadline() {
                                    std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                                }
                                session.poll(Instant::now());
                            }
                        }
                        None => writeln!(stdout, "no card {number}")?,
                    }
                }
                _ => writeln!(stdout, "enter a card number, n or q")?,
            },
        }

        writeln!(stdout, "{}", renderer.render(&session.snapshot()))?;
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}
