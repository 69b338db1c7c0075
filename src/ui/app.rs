//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::config::{Settings, MAX_SIZE, MIN_SIZE};
use crate::dataset::{DataSource, Dataset};
use crate::playback::{PlaybackError, Player, Speed, View};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Algorithm currently selected
    pub algorithm: Algorithm,

    /// Input for the next run
    pub dataset: Dataset,

    /// Length of random arrays
    pub size: usize,

    /// Playback speed, kept across runs
    pub speed: Speed,

    /// The active run; `None` until the trace is generated
    pub player: Option<Player>,

    /// Random array source
    source: DataSource,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app from validated settings
    pub fn new(settings: Settings) -> Self {
        let mut source = DataSource::new(settings.seed);
        let dataset = match settings.dataset {
            Some(dataset) => dataset,
            None => source.dataset_for(settings.algorithm.kind(), settings.size),
        };

        App {
            algorithm: settings.algorithm,
            size: settings.size,
            speed: settings.speed,
            dataset,
            player: None,
            source,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        tracing::info!(algorithm = %self.algorithm, "visualizer started");

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        tracing::info!("visualizer stopped");
        Ok(())
    }

    /// Advance playback if a step is due
    pub fn tick(&mut self, now: Instant) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if !player.is_playing() {
            return;
        }

        player.tick(now);
        if player.is_playing() {
            self.set_status("Playing...");
        } else {
            self.set_status("Playback complete");
        }
    }

    /// Render state for the current position, or the bare dataset before a run
    pub fn view(&self) -> View<'_> {
        match &self.player {
            Some(player) => player.view(),
            None => View {
                values: &self.dataset.values,
                comparing: &[],
                swapping: &[],
                sorted: &[],
                found: None,
                target: self.dataset.target,
                message: None,
            },
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Bars on the left, info on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let view = self.view();
        let title = if self.algorithm.is_search() {
            "Search Algorithm Visualizer"
        } else {
            "Sorting Algorithm Visualizer"
        };

        super::panes::render_bars_pane(frame, columns[0], title, &view);

        super::panes::render_info_pane(
            frame,
            columns[1],
            &super::panes::InfoRenderData {
                algorithm: self.algorithm,
                message: view.message,
                speed: self.speed,
                size: self.dataset.values.len(),
                target: self.dataset.target,
            },
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                position: self.player.as_ref().map(Player::position),
                total_steps: self.player.as_ref().map_or(0, Player::len),
                is_playing: self.player.as_ref().is_some_and(Player::is_playing),
                is_error: self.status_is_error,
                is_search: self.algorithm.is_search(),
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                if let Some(player) = self.ensure_player() {
                    player.pause();
                    let stepped = player.step_forward_by(n);
                    self.set_status(format!("Stepped forward {} step(s)", stepped));
                }
            }
            KeyCode::Right => self.step_forward(),
            KeyCode::Left => self.step_backward(),
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_playback();
                }
            }
            KeyCode::Enter => {
                if let Some(player) = self.ensure_player() {
                    player.pause();
                    player.jump_to_end();
                    self.set_status("Jumped to end");
                }
            }
            KeyCode::Backspace => {
                if let Some(player) = self.player.as_mut() {
                    player.pause();
                    player.rewind();
                    self.set_status("Jumped to start");
                }
            }
            KeyCode::Tab => self.select_algorithm(self.algorithm.next()),
            KeyCode::BackTab => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('+') | KeyCode::Char('=') => self.set_speed(self.speed.faster()),
            KeyCode::Char('-') | KeyCode::Char('_') => self.set_speed(self.speed.slower()),
            KeyCode::Char(']') => self.resize(self.size + 1),
            KeyCode::Char('[') => self.resize(self.size.saturating_sub(1)),
            KeyCode::Char('t') => self.cycle_target(true),
            KeyCode::Char('T') => self.cycle_target(false),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
                self.set_status("Reset");
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.regenerate();
                self.set_status("Generated a new array");
            }
            _ => {}
        }
    }

    /// Generate the trace for the current dataset if there is none yet
    ///
    /// On invalid input the error goes to the status bar and `None` is returned.
    fn ensure_player(&mut self) -> Option<&mut Player> {
        if self.player.is_none() {
            match self
                .algorithm
                .generate(&self.dataset.values, self.dataset.target)
            {
                Ok(trace) => {
                    tracing::info!(
                        algorithm = %self.algorithm,
                        steps = trace.len(),
                        "run started"
                    );
                    self.player = Some(Player::new(trace, self.speed));
                }
                Err(e) => {
                    tracing::warn!(algorithm = %self.algorithm, error = %e, "input rejected");
                    self.set_error(format!("Cannot run {}: {}", self.algorithm, e));
                    return None;
                }
            }
        }
        self.player.as_mut()
    }

    fn toggle_playback(&mut self) {
        if let Some(player) = self.ensure_player() {
            let playing = player.toggle();
            self.set_status(if playing { "Playing..." } else { "Paused" });
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        let Some(player) = self.ensure_player() else {
            return;
        };
        player.pause();
        match player.step_forward() {
            Ok(()) => self.set_status("Stepped forward"),
            Err(e) => self.set_status(format!("Cannot step forward: {}", e)),
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        let Some(player) = self.player.as_mut() else {
            self.set_status(format!("Cannot step backward: {}", PlaybackError::AtStart));
            return;
        };
        player.pause();
        match player.step_backward() {
            Ok(()) => self.set_status("Stepped backward"),
            Err(e) => self.set_status(format!("Cannot step backward: {}", e)),
        }
    }

    /// Discard the current run, keeping the dataset
    pub fn reset(&mut self) {
        if self.player.take().is_some() {
            tracing::debug!("run discarded");
        }
    }

    /// Discard the current run and draw a new random dataset
    pub fn regenerate(&mut self) {
        self.reset();
        self.dataset = self.source.dataset_for(self.algorithm.kind(), self.size);
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        let kind_changed = algorithm.kind() != self.algorithm.kind();
        self.algorithm = algorithm;
        tracing::info!(algorithm = %algorithm, "algorithm selected");

        if kind_changed {
            self.regenerate();
        } else {
            self.reset();
        }
        self.set_status(format!("Selected {}", algorithm));
    }

    fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        // Speed changes apply to the running trace rather than discarding it
        if let Some(player) = self.player.as_mut() {
            player.set_speed(speed);
        }
        self.set_status(format!("Speed: {} ms per step", speed.millis()));
    }

    fn resize(&mut self, size: usize) {
        if self.algorithm.is_search() {
            self.set_status("Array size is fixed for search algorithms");
            return;
        }
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        if size == self.size && self.dataset.values.len() == size {
            return;
        }
        self.size = size;
        self.regenerate();
        tracing::info!(size, "array size changed");
        self.set_status(format!("Array size: {}", size));
    }

    fn cycle_target(&mut self, forward: bool) {
        if !self.algorithm.is_search() {
            return;
        }
        self.reset();
        self.dataset.cycle_target(forward);
        if let Some(target) = self.dataset.target {
            self.set_status(format!("Target: {}", target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(algorithm: Algorithm) -> App {
        App::new(Settings {
            algorithm,
            seed: Some(3),
            ..Settings::default()
        })
    }

    #[test]
    fn test_step_generates_trace_lazily() {
        let mut app = app(Algorithm::Bubble);
        assert!(app.player.is_none());

        app.handle_key_event(key(KeyCode::Right));
        let player = app.player.as_ref().unwrap();
        assert_eq!(player.position(), 1);
        assert_eq!(app.status_message, "Stepped forward");
    }

    #[test]
    fn test_enter_jumps_to_sorted_end() {
        let mut app = app(Algorithm::Selection);
        app.handle_key_event(key(KeyCode::Enter));

        let view = app.view();
        assert!(view.values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(view.sorted.len(), view.values.len());
    }

    #[test]
    fn test_switching_kind_regenerates_sorted_data() {
        let mut app = app(Algorithm::Insertion);
        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::Tab));

        assert_eq!(app.algorithm, Algorithm::Linear);
        assert!(app.player.is_none());
        assert!(app.dataset.values.windows(2).all(|w| w[0] <= w[1]));
        assert!(app.dataset.target.is_some());
    }

    #[test]
    fn test_speed_change_keeps_run() {
        let mut app = app(Algorithm::Bubble);
        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::Char('+')));

        assert_eq!(app.speed.millis(), 400);
        assert_eq!(app.player.as_ref().map(|p| p.speed().millis()), Some(400));
    }

    #[test]
    fn test_resize_discards_run() {
        let mut app = app(Algorithm::Bubble);
        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::Char(']')));

        assert!(app.player.is_none());
        assert_eq!(app.dataset.values.len(), 16);
    }

    #[test]
    fn test_invalid_input_reports_error() {
        let mut app = App::new(Settings {
            algorithm: Algorithm::Binary,
            dataset: Some(Dataset::new(vec![5, 1], Some(1))),
            ..Settings::default()
        });
        app.handle_key_event(key(KeyCode::Char(' ')));

        assert!(app.player.is_none());
        assert!(app.status_is_error);
        assert!(app.status_message.starts_with("Cannot run Binary Search"));
    }
}
