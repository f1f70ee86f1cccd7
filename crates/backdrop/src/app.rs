//! The terminal application: an animated backdrop behind a static page.

use std::time::Instant;

use backdrop_config::Config;
use backdrop_core::{EngineMode, EngineOptions};
use backdrop_engine::{CanvasSurface, Engine, HostEvent};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::info;

use crate::host::TerminalHost;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Mode of the engine currently attached.
    mode: EngineMode,
    /// Show the title and help line over the animation.
    show_overlay: bool,
    engine: Engine<CanvasSurface>,
    host: TerminalHost,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of the given size.
    pub fn new(config: Config, columns: u16, rows: u16) -> Self {
        let mode = config.engine.mode;
        let host = TerminalHost::new(&config.display, columns, rows);
        Self {
            running: false,
            show_overlay: config.display.show_overlay,
            engine: engine_for(&config, mode),
            mode,
            config,
            host,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.attach_surface();
        while self.running {
            if let Some(request) = self.host.take_due_frame(Instant::now()) {
                self.engine.on_frame(request, &mut self.host);
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }
        self.engine.detach(&mut self.host);
        Ok(())
    }

    /// Attach a fresh surface to the current engine.
    fn attach_surface(&mut self) {
        let (dot_width, dot_height) = self.host.dot_size();
        let surface = CanvasSurface::new(self.config.engine.background)
            .with_dot_size(dot_width, dot_height);
        self.engine.attach(surface, &mut self.host);
    }

    /// Renders the backdrop and the page on top of it.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if let Some(surface) = self.engine.surface() {
            frame.render_widget(surface, area);
        }
        if !self.show_overlay {
            return;
        }

        let accent: Color = self.config.engine.grid.color.into();
        let highlight: Color = self.config.engine.particles.active_edge_color.into();

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Tagline
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let title = Paragraph::new("b a c k d r o p")
            .style(Style::new().fg(accent).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let tagline = Paragraph::new(format!(
            "{} mode · move the mouse across the terminal",
            self.mode.name()
        ))
        .style(Style::new().fg(accent))
        .alignment(Alignment::Center);
        frame.render_widget(tagline, chunks[3]);

        let help = Line::from(vec![
            "q".bold().fg(highlight),
            " quit  ".fg(accent),
            "m".bold().fg(highlight),
            " switch mode  ".fg(accent),
            "h".bold().fg(highlight),
            " hide text".fg(accent),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Blocks at most until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.host.time_until_frame(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(columns, rows) => {
                    self.host.resize(columns, rows);
                    self.dispatch(HostEvent::Resize);
                }
                Event::FocusLost => self.dispatch(HostEvent::PointerLeave),
                _ => {}
            }
        }
        Ok(())
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Moved | MouseEventKind::Drag(_) = mouse.kind {
            let (x, y) = self.host.cell_to_surface(mouse.column, mouse.row);
            self.dispatch(HostEvent::PointerMove { x, y });
        }
    }

    /// Forward an event if the engine is subscribed to it.
    fn dispatch(&mut self, event: HostEvent) {
        if self.host.is_listening(event.listener()) {
            self.engine.handle(event, &self.host);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.switch_mode(),
            (_, KeyCode::Char('h')) => self.show_overlay = !self.show_overlay,
            _ => {}
        }
    }

    /// Tear down the running engine and start one in the next mode.
    fn switch_mode(&mut self) {
        self.engine.detach(&mut self.host);
        self.mode = self.mode.next();
        info!(mode = self.mode.name(), "switching mode");
        self.engine = engine_for(&self.config, self.mode);
        self.attach_surface();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// An unattached engine running `mode` with the configured options.
fn engine_for(config: &Config, mode: EngineMode) -> Engine<CanvasSurface> {
    Engine::new(EngineOptions {
        mode,
        ..config.engine.clone()
    })
}
