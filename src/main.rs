// algotty: step-through visualizer for classic search and sort algorithms

use std::io;

use algotty::config::Cli;
use algotty::dataset::DataSource;
use algotty::logging;
use algotty::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Leave raw mode and the alternate screen before the panic message prints
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "failed to disable raw mode in panic hook");
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            tracing::debug!(error = %e, "failed to leave alternate screen in panic hook");
        }
        original_hook(panic_info);
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match Cli::parse().into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if settings.dump {
        logging::init_stderr()?;

        let dataset = match &settings.dataset {
            Some(dataset) => dataset.clone(),
            None => DataSource::new(settings.seed)
                .dataset_for(settings.algorithm.kind(), settings.size),
        };
        let trace = settings
            .algorithm
            .generate(&dataset.values, dataset.target)?;
        tracing::info!(
            algorithm = %settings.algorithm,
            steps = trace.len(),
            "dumping trace"
        );
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    if let Some(path) = &settings.log_file {
        logging::init_file(path)?;
    }

    // Set up terminal
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
