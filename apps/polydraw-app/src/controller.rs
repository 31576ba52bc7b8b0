use polydraw_core::{CanvasRect, Color, DrawingHistory, Extent, Point, Polyline, SessionConfig};
use polydraw_io::{parse_document, Command};
use polydraw_renderer::{apply_extent, repaint, RenderDriver};

use crate::input::Key;
use crate::session::{Mode, Session};
use crate::AppError;

/// Owns the session state and the render driver, and turns user input into
/// state changes followed by a full repaint.
#[derive(Debug)]
pub struct Controller<D: RenderDriver> {
    session: Session,
    driver: D,
}

impl<D: RenderDriver> Controller<D> {
    /// Start a session in File Mode with a cleared canvas.
    pub fn new(driver: D, config: SessionConfig) -> Result<Self, AppError> {
        let surface = driver.surface()?;
        log::info!("Surface {}x{}", surface.width, surface.height);

        let mut controller = Self {
            session: Session::new(config, surface),
            driver,
        };
        controller.reset();
        Ok(controller)
    }

    // ── State ────────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    pub fn extent(&self) -> Extent {
        self.session.extent
    }

    pub fn history(&self) -> &DrawingHistory {
        &self.session.history
    }

    pub fn color(&self) -> Color {
        self.session.color()
    }

    pub fn color_index(&self) -> usize {
        self.session.colors.index()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Place the canvas on the device, for click mapping.
    pub fn set_canvas_rect(&mut self, rect: CanvasRect) {
        self.session.canvas.rect = rect;
    }

    // ── Input ────────────────────────────────────────────────────────

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::FileMode => self.switch_mode(Mode::File),
            Key::DrawMode => self.switch_mode(Mode::Draw),
            Key::CycleColor => {
                let color = self.session.colors.advance();
                log::debug!("Color {} {:?}", self.session.colors.index(), color);
                self.repaint();
            }
            Key::NewLine => {
                self.session.new_line = true;
                self.repaint();
            }
            Key::Other(_) => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key == Key::NewLine {
            self.session.new_line = false;
        }
    }

    /// Add a point at a device position. Ignored outside Draw Mode.
    pub fn click(&mut self, device_x: f64, device_y: f64) -> Option<Point> {
        if self.session.mode != Mode::Draw {
            return None;
        }

        let session = &mut self.session;
        let point = session.canvas.logical_at(device_x, device_y, &session.extent);

        if session.new_line || !session.in_progress {
            let color = session.color();
            session.history.append(Polyline::from_point(point), color);
            session.in_progress = true;
            log::debug!("New polyline at ({}, {})", point.x, point.y);
        } else {
            session.history.extend_last(point);
        }

        self.repaint();
        Some(point)
    }

    /// Replace the drawing with the contents of a `.dat` file.
    ///
    /// The canvas is reset first. If the file does not parse, it stays
    /// empty and the error is returned.
    pub fn load_file(&mut self, text: &str) -> Result<usize, AppError> {
        if self.session.mode != Mode::File {
            return Err(AppError::NotInFileMode);
        }

        self.reset();
        let doc = parse_document(text, self.session.config.parse_mode)?;

        let color = self.session.color();
        for command in doc.commands {
            match command {
                Command::SetExtent(extent) => {
                    log::info!("Extent set to {:?}", extent);
                    self.session.extent = extent;
                    apply_extent(&mut self.driver, &mut self.session.canvas, &extent);
                }
                Command::Polyline(polyline) => {
                    self.session.history.append(polyline, color);
                }
            }
        }

        self.repaint();
        let count = self.session.history.len();
        log::info!("Loaded {} polylines", count);
        Ok(count)
    }

    /// Clear the drawing and restore the default extent and viewport.
    pub fn reset(&mut self) {
        self.session.clear();
        self.driver.clear();
        let extent = self.session.extent;
        apply_extent(&mut self.driver, &mut self.session.canvas, &extent);
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.reset();
        self.session.mode = mode;
        log::info!("Switched to {:?} mode", mode);
    }

    fn repaint(&mut self) {
        repaint(
            &mut self.driver,
            &self.session.history,
            self.session.config.color_policy,
            self.session.color(),
        );
    }
}
