//! Azadi CLI
//!
//! Command-line companion to the Azadi page:
//! - Serve the built page
//! - Post and list wishes on a local wall
//! - Play the quick quiz in the terminal
//! - Generate a default config file

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use azadi::config::{generate_default_config, Config, ConfigSource};
use azadi::trivia::{Advance, QuizSession};
use azadi::wishes::{FileStore, WishBoard};
use chrono::Utc;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "azadi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Independence Day celebration page: wishes wall, quiz and share")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built page
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built page
        #[arg(long)]
        dist: Option<String>,
    },

    /// Post or list wishes on the local wall
    Wish {
        #[command(subcommand)]
        action: WishAction,
    },

    /// Play the quick quiz
    Quiz,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum WishAction {
    /// Post a wish
    Post {
        /// Your name (default: Guest)
        #[arg(short, long, default_value = "")]
        name: String,
        /// Message words
        message: Vec<String>,
    },

    /// List wishes, newest first
    List {
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, loaded) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Ok(ConfigSource::File(path.clone()))),
        None => match Config::load_default() {
            Ok((config, source)) => (config, Ok(source)),
            Err(e) => (Config::from_env(), Err(e)),
        },
    };

    azadi::logging::init(&config.logging);

    match loaded {
        Ok(ConfigSource::File(path)) => tracing::info!("Loaded config from {:?}", path),
        Ok(ConfigSource::Environment) => {
            tracing::debug!("Using default config with environment overrides")
        }
        Err(e) => tracing::warn!("{}; using defaults with environment overrides", e),
    }

    match cli.command {
        Commands::Serve { host, port, dist } => {
            let mut server = config.server;
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(dist) = dist {
                server.dist_dir = dist;
            }

            tracing::info!("Starting Azadi server v{}", env!("CARGO_PKG_VERSION"));
            azadi::serve(&server).await?;
        }

        Commands::Wish { action } => {
            let data_dir = config.storage.data_path();
            let store = FileStore::open(&data_dir)
                .with_context(|| format!("Cannot open data directory {}", data_dir.display()))?;
            let mut board = WishBoard::load_with_key(store, config.storage.key.as_str());

            match action {
                WishAction::Post { name, message } => {
                    let message = message.join(" ");
                    match board.submit(&name, &message) {
                        Some(wish) => println!("Posted by {}: {}", wish.author, wish.message),
                        None => println!("Nothing to post: the message is empty"),
                    }
                }
                WishAction::List { json } => print_wishes(&board, json)?,
            }
        }

        Commands::Quiz => {
            let stdin = io::stdin();
            play_quiz(&mut stdin.lock(), &mut io::stdout())?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Cannot write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_wishes(board: &WishBoard<FileStore>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(board.wishes())?);
        return Ok(());
    }

    if board.is_empty() {
        println!("{}", azadi::page::EMPTY_WALL);
        return Ok(());
    }

    for view in board.render_list(Utc::now().timestamp_millis()) {
        println!("{:<20} {:>16}", view.wish.author, view.age.to_string());
        println!("  {}", view.wish.message);
    }
    Ok(())
}

/// Terminal quiz: number keys pick an option, `q` quits
fn play_quiz(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let mut session = QuizSession::builtin();
    let mut line = String::new();

    writeln!(out, "Azadi Quick Quiz (answer with 1-4, q to quit)")?;

    loop {
        if session.is_finished() {
            writeln!(out, "\nMubarak! Score: {} / {}", session.score(), session.total())?;
            writeln!(out, "{}", azadi::page::QUIZ_OUTRO)?;
            write!(out, "Restart? [y/N] ")?;
            out.flush()?;

            if !read_line(input, &mut line)? || !line.trim().eq_ignore_ascii_case("y") {
                break;
            }
            session.restart();
            continue;
        }

        let question = session.current_question();
        writeln!(
            out,
            "\nQuestion {} / {}  (score: {})",
            session.current_index() + 1,
            session.total(),
            session.score()
        )?;
        writeln!(out, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, option)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        if !read_line(input, &mut line)? {
            break;
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(option) = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            writeln!(out, "Pick a number between 1 and {}", question.options.len())?;
            continue;
        };
        if let Err(e) = session.select(option) {
            writeln!(out, "{}", e)?;
            continue;
        }

        match session.advance()? {
            Advance::NoSelection => {}
            Advance::Next { .. } | Advance::Finished { .. } => {
                let verdict = if question.is_correct(option) {
                    "Correct!".to_string()
                } else {
                    format!("Not quite: {}", question.correct_answer())
                };
                writeln!(out, "{}", verdict)?;
            }
        }
    }

    session.close();
    Ok(())
}

/// Read one line into `buf`, false on end of input
fn read_line(input: &mut impl BufRead, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    Ok(input.read_line(buf)? > 0)
}
