use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Instant;
use tokio::time::interval;
use tracing::{debug, info};

use super::{
    TickClock,
    terminal_guard::{Crossterm, TerminalGuard, finish},
};
use crate::game::{GameConfig, GameEngine, GameState, TickOutcome, food_glyph_from_env};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    clock: TickClock,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        let glyph = food_glyph_from_env(engine.rng());
        let renderer = if engine.config().food_glyph {
            Renderer::with_food_glyph(glyph)
        } else {
            Renderer::new()
        };
        debug!(%glyph, drawn = engine.config().food_glyph, "food glyph selected");

        let clock = TickClock::new(engine.config().tick_interval(), Instant::now());

        Self {
            engine,
            state,
            clock,
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        // Restored on every path from here on, early returns included
        let mut guard = TerminalGuard::acquire(Crossterm)?;

        let result = self.run_in_terminal().await;
        let result = finish(result, guard.restore());

        info!(
            ticks = self.state.ticks,
            length = self.state.snake.cell_count(),
            "game closed"
        );

        result
    }

    async fn run_in_terminal(&mut self) -> Result<()> {
        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            grid_size = self.state.grid.size,
            tick_ms = self.clock.period().as_millis() as u64,
            "game started"
        );

        self.run_game_loop(&mut terminal).await
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(self.engine.config().frame_interval());

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Tick when due, then redraw regardless
                _ = frame_timer.tick() => {
                    self.on_frame(Instant::now());
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.state.snake.steer(direction);
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// Advance the simulation if a tick is due at `now`
    fn on_frame(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.clock.poll(now) {
            Some(self.engine.tick(&mut self.state))
        } else {
            None
        }
    }
}
