use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use boardgame_engine::config::AppConfig;
use boardgame_engine::console::{Console, StdioConsole};
use boardgame_engine::engine::player::{Player, PlayerId};
use boardgame_engine::engine::session::{Game, Session, SessionOutcome};
use boardgame_engine::games::{Chess, ConnectFour};

const EXIT_INSTRUCTIONS: &str = "Try a sample input or input 'back' to leave the tutorial. \
Type in 'exit' anytime to exit the game fully";

/// Play a board game in the terminal.
#[derive(Parser)]
#[command(name = "play", about = "Play chess or connect-four in the terminal")]
struct Cli {
    /// Game to play: chess or connect4
    #[arg(long, default_value = "chess")]
    game: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Player 1's name (otherwise prompted)
    #[arg(long)]
    player1: Option<String>,

    /// Player 2's name (otherwise prompted)
    #[arg(long)]
    player2: Option<String>,

    /// Skip the tutorial offer
    #[arg(long)]
    no_onboarding: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut game: Box<dyn Game> = match cli.game.as_str() {
        "chess" => Box::new(Chess::new()),
        "connect4" | "connect-four" => Box::new(ConnectFour::new(config.connect_four.clone())),
        other => bail!("unknown game '{}' (expected 'chess' or 'connect4')", other),
    };

    let mut console = StdioConsole::new();
    let players = gather_players(&cli, &config, &mut console)?;

    console.show(&format!(
        "Welcome to {} between {} and {}!",
        game.name(),
        players[0],
        players[1]
    ))?;

    let mut session =
        Session::new(game.as_ref(), players).context("setting up the session")?;

    if config.onboarding && !cli.no_onboarding {
        if !offer_tutorial(game.as_ref(), &session, &mut console)? {
            return Ok(());
        }
    }

    console.show(&format!("Starting {}...", game.name()))?;
    match session.run(game.as_mut(), &mut console)? {
        SessionOutcome::Winner(id) => {
            let name = session.player(id).map(Player::name).unwrap_or("?");
            console.show(&format!("{name} wins!"))?;
        }
        SessionOutcome::Draw => console.show("It's a draw!")?,
        SessionOutcome::Exited => {}
    }
    Ok(())
}

fn gather_players(
    cli: &Cli,
    config: &AppConfig,
    console: &mut dyn Console,
) -> Result<Vec<Player>> {
    let name1 = match &cli.player1 {
        Some(name) => name.clone(),
        None => prompt_name(console, "What is Player 1's name?", &config.players.name1)?,
    };
    let name2 = match &cli.player2 {
        Some(name) => name.clone(),
        None => prompt_name(console, "What is Player 2's name?", &config.players.name2)?,
    };
    Ok(vec![
        Player::new(PlayerId(0), name1, config.players.token1),
        Player::new(PlayerId(1), name2, config.players.token2),
    ])
}

fn prompt_name(console: &mut dyn Console, prompt: &str, default: &str) -> Result<String> {
    console.show(prompt)?;
    let name = console.read_line()?.trim().to_string();
    Ok(if name.is_empty() {
        default.to_string()
    } else {
        name
    })
}

/// Offer the optional tutorial. Returns false if the player typed "exit".
fn offer_tutorial(
    game: &dyn Game,
    session: &Session,
    console: &mut dyn Console,
) -> Result<bool> {
    loop {
        console.show("Would you like a tutorial on how to play on this program?\n(y, n)")?;
        match console.read_line()?.trim() {
            "y" => return tutorial(game, session, console),
            "n" => {
                console.show("Skipping tutorial")?;
                return Ok(true);
            }
            "exit" => return Ok(false),
            _ => console.show("Please answer either \"y\" or \"n\"")?,
        }
    }
}

/// Echo validity for sample inputs until the player types "back".
fn tutorial(game: &dyn Game, session: &Session, console: &mut dyn Console) -> Result<bool> {
    console.show(&format!("{}\n{}", game.instructions(), EXIT_INSTRUCTIONS))?;
    loop {
        let input = console.read_line()?;
        let input = input.trim();
        match input {
            "back" => return Ok(true),
            "exit" => return Ok(false),
            _ => {
                if session.grid().is_well_formed_input(input, game.input_mode()) {
                    console.show("Valid input!")?;
                } else {
                    console.show("Invalid input")?;
                }
            }
        }
    }
}
