use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use voyage::core::config::CONFIG_FILENAME;
use voyage::core::constants::TICK_INTERVAL_MS;
use voyage::input::{map_key, Command};
use voyage::utils::{logging, persistence};
use voyage::{advance, apply_action, build_info, ui, GameConfig, GameState, Variant};

fn print_usage() {
    println!("Voyage - Terminal Exploration and Survival Game\n");
    println!("Usage: voyage [options]\n");
    println!("Options:");
    println!("  --seed <N>                   Fix the random seed");
    println!("  --variant <space|survival>   Choose the theme");
    println!("  --version                    Show version information");
    println!("  --help                       Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'voyage --help' for usage.");
    std::process::exit(1);
}

/// Applies command-line overrides on top of the loaded config.
fn parse_args(mut config: GameConfig, args: &[String]) -> GameConfig {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--seed" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| usage_error("--seed needs a value"));
                match value.parse::<u64>() {
                    Ok(seed) => config.seed = Some(seed),
                    Err(_) => usage_error(&format!("Invalid seed: {}", value)),
                }
            }
            "--variant" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| usage_error("--variant needs a value"));
                match value.parse::<Variant>() {
                    Ok(variant) => config.variant = variant,
                    Err(e) => usage_error(&e),
                }
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
    }
    config
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Logger first so config fallbacks are recorded
    let _log_guard = logging::init_file_logging()?;
    let config = parse_args(GameConfig::load(), &args);

    // Write a template config on first run
    if !persistence::save_path(CONFIG_FILENAME)?.exists() {
        if let Err(e) = GameConfig::default().save() {
            tracing::warn!(error = %e, "could not write default config");
        }
    }
    tracing::info!(
        variant = config.variant.name(),
        seed = ?config.seed,
        "starting voyage"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game_state = GameState::from_config(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game_state, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(moves = game_state.moves, game_over = game_state.game_over, "exiting");
    result?;
    println!("Goodbye!");

    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game_state: &mut GameState,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, game_state))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    match map_key(game_state, key_event.code) {
                        Command::Quit => return Ok(()),
                        Command::Act(action) => {
                            let events = apply_action(game_state, action, rng);
                            tracing::trace!(?action, ?events, "action applied");
                        }
                        Command::Ignore => {}
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        advance(game_state, elapsed.as_millis() as u64, rng);
    }
}
