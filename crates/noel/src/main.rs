use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use noel_background::SnowState;
use noel_config::Config;
use noel_core::color::fade;
use noel_fonts::build_title_art;
use noel_scene::{SUBPIXELS_X, SUBPIXELS_Y, TreeScene, tree_canvas};

/// Light pink of the title text.
const TITLE_COLOR: ratatui::style::Color = ratatui::style::Color::Rgb(255, 209, 231);

/// Muted pink of the footer line.
const FOOTER_COLOR: ratatui::style::Color = ratatui::style::Color::Rgb(190, 120, 160);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new(Config::load()).run(terminal);
    ratatui::restore();
    result
}

/// The card application: terminal lifecycle and layer composition.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded card configuration.
    config: Config,
    /// Wall-clock origin for the snow and title animations.
    started: Instant,
    /// Randomness source for geometry and flake initialization.
    rng: StdRng,
    /// Snowfall overlay.
    snow: SnowState,
    /// The tree scene, mounted on the first frame with a usable canvas area.
    scene: Option<TreeScene>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            config,
            started: Instant::now(),
            rng: StdRng::from_os_rng(),
            snow: SnowState::new(),
            scene: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one frame of the card.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let speed = self.config.speed;

        // Snow underlay across the whole area; later layers draw over it
        if self.config.snow && area.width > 0 && area.height > 0 {
            let lines = self
                .snow
                .lines(&mut self.rng, area.width, area.height, elapsed_ms, speed);
            frame.render_widget(Paragraph::new(lines), area);
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(7), // Title (7 lines)
            Constraint::Length(1), // Spacing
            Constraint::Fill(1),   // Tree canvas
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Help text
        ])
        .split(area);

        self.render_title(frame, chunks[1], elapsed_ms);
        self.render_tree(frame, chunks[3]);

        // Footer with the current year
        let year = Local::now().year();
        let footer = Paragraph::new(format!("{} \u{2022} {}", self.config.footer, year))
            .style(Style::new().fg(FOOTER_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);

        let help = Line::from(vec!["q".bold().fg(FOOTER_COLOR), " quit".dark_gray()]).centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Render the big-letter title with a slow brightness pulse.
    fn render_title(&self, frame: &mut Frame, area: Rect, elapsed_ms: u64) {
        let period = self.config.speed.title_pulse_period_ms();
        let phase = (elapsed_ms % period) as f32 / period as f32;
        let pulse = 0.75 + 0.25 * (phase * 2.0 * std::f32::consts::PI).sin();
        let color = fade(TITLE_COLOR, pulse);

        let lines: Vec<Line> = build_title_art(&self.config.title)
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(color)))
            .collect();

        let title = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    /// Mount the tree scene on first use, then tick and paint it.
    ///
    /// Geometry binds to the canvas dimensions of the mounting frame; later
    /// resizes only move the viewport. A permanently empty area means the
    /// renderer never starts, silently.
    fn render_tree(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = (area.width * SUBPIXELS_X) as f32;
        let height = (area.height * SUBPIXELS_Y) as f32;

        let scene = self.scene.get_or_insert_with(|| {
            TreeScene::new(&mut self.rng, width, height, self.config.speed)
        });
        let viewport = scene.viewport();
        if viewport.width != width || viewport.height != height {
            scene.set_viewport(width, height);
        }

        scene.tick();
        frame.render_widget(tree_canvas(scene), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout to keep the animation running.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // The next frame re-reads the dimensions; geometry stays put
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Stop the scene and leave the main loop.
    fn quit(&mut self) {
        if let Some(scene) = &mut self.scene {
            scene.stop();
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_once(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn first_frame_mounts_the_scene_and_shows_the_title() {
        let mut app = App::new(Config::default());
        let screen = draw_once(&mut app, 120, 40);

        assert!(app.scene.is_some());
        assert!(app.scene.as_ref().unwrap().clock() > 0.0);
        // Block letters from the title made it to the buffer
        assert!(screen.contains("██"));
    }

    #[test]
    fn zero_height_area_never_mounts_the_renderer() {
        let mut app = App::new(Config::default());
        // 10 rows are consumed entirely by title, padding and footer rows
        draw_once(&mut app, 40, 10);
        assert!(app.scene.is_none());
    }

    #[test]
    fn resize_updates_viewport_without_touching_geometry() {
        let mut app = App::new(Config::default());
        draw_once(&mut app, 120, 40);
        let base: Vec<_> = app
            .scene
            .as_ref()
            .unwrap()
            .particles()
            .iter()
            .map(|p| p.base)
            .collect();

        draw_once(&mut app, 80, 24);
        let scene = app.scene.as_ref().unwrap();
        assert_eq!(scene.viewport().width, (80 * SUBPIXELS_X) as f32);
        for (p, b) in scene.particles().iter().zip(&base) {
            assert_eq!(p.base, *b);
        }
    }

    #[test]
    fn quit_stops_the_scene() {
        let mut app = App::new(Config::default());
        draw_once(&mut app, 120, 40);
        app.quit();

        let scene = app.scene.as_ref().unwrap();
        assert!(!scene.is_running());
        let frozen = scene.clock();

        // Further frames must not advance the animation
        draw_once(&mut app, 120, 40);
        assert_eq!(app.scene.as_ref().unwrap().clock(), frozen);
    }
}
