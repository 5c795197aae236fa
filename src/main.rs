// quiztty: multiple-choice quiz in the terminal

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use quiztty::quiz::{QuestionSet, QuizSession, builtin};
use quiztty::ui::App;

/// Multiple-choice quiz in the terminal
#[derive(Parser, Debug)]
#[command(name = "quiztty", version)]
struct Args {
    /// Question file (TOML). Uses the bundled AI quiz when omitted
    questions: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG overrides the default `quiztty=info`)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Validate the question file and exit without starting the quiz
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let questions = match &args.questions {
        Some(path) => QuestionSet::load(path),
        None => builtin::ai_basics(),
    };
    let questions = match questions {
        Ok(questions) => questions,
        Err(e) => {
            tracing::error!(error = %e, "Could not load questions");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.check {
        eprintln!("{}", questions.summary());
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(QuizSession::new(&questions));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Send tracing output to a file; the terminal itself belongs to the TUI
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiztty=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "Logging started");
    Ok(())
}
