use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use holdem_showdown::cli::{plain_report, Cli};
use holdem_showdown::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Logs go to `--log-file` when given; otherwise plain mode logs to stderr
/// and the TUI stays silent.
fn init_tracing(cli: &Cli) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "holdem_showdown=info".into());
    match (&cli.log_file, cli.plain) {
        (Some(path), _) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        (None, true) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
        (None, false) => {}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    if cli.plain {
        for (i, deal) in cli.deals().into_iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", plain_report(deal, cli.street, cli.locale)?);
        }
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        println!(
            "holdem-showdown TUI requires a real terminal (TTY); use --plain otherwise. Version: {}",
            holdem_showdown::VERSION
        );
        return Ok(());
    }
    let mut app = AppState::new(cli.deals(), cli.locale)?;
    let mut terminal = setup_terminal()?;

    let res = controller::run(&mut terminal, &mut app, cli.tick_rate());

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
