//! Terminal implementation of the engine host.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use backdrop_config::DisplayConfig;
use backdrop_engine::{FrameRequest, Host, Listener, Viewport};

/// Maps terminal cells to surface pixels and paces frames with deadlines.
#[derive(Debug)]
pub struct TerminalHost {
    columns: u16,
    rows: u16,
    cell_width: u32,
    cell_height: u32,
    frame_interval: Duration,
    next_id: u64,
    /// Outstanding request and the instant it becomes due.
    pending: Option<(FrameRequest, Instant)>,
    last_frame: Option<Instant>,
    listeners: BTreeSet<Listener>,
}

impl TerminalHost {
    pub fn new(display: &DisplayConfig, columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cell_width: display.cell_width,
            cell_height: display.cell_height,
            frame_interval: Duration::from_secs(1) / display.fps.max(1),
            next_id: 0,
            pending: None,
            last_frame: None,
            listeners: BTreeSet::new(),
        }
    }

    /// Record a new terminal size in cells.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
    }

    /// Surface position of the center of a terminal cell.
    pub fn cell_to_surface(&self, column: u16, row: u16) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.cell_width as f64,
            (row as f64 + 0.5) * self.cell_height as f64,
        )
    }

    /// Surface pixels per braille dot (2x4 dots per cell).
    pub fn dot_size(&self) -> (f64, f64) {
        (self.cell_width as f64 / 2.0, self.cell_height as f64 / 4.0)
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    /// How long the event loop may block before the next frame is due.
    pub fn time_until_frame(&self, now: Instant) -> Duration {
        match self.pending {
            Some((_, due)) => due.saturating_duration_since(now),
            None => self.frame_interval,
        }
    }

    /// Take the pending request if its deadline has passed.
    pub fn take_due_frame(&mut self, now: Instant) -> Option<FrameRequest> {
        match self.pending {
            Some((request, due)) if due <= now => {
                self.pending = None;
                self.last_frame = Some(now);
                Some(request)
            }
            _ => None,
        }
    }
}

impl Host for TerminalHost {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.columns as u32 * self.cell_width,
            self.rows as u32 * self.cell_height,
        )
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        let due = match self.last_frame {
            Some(last) => last + self.frame_interval,
            None => Instant::now(),
        };
        self.pending = Some((request, due));
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if matches!(self.pending, Some((pending, _)) if pending == request) {
            self.pending = None;
        }
    }

    fn listen(&mut self, listener: Listener) {
        self.listeners.insert(listener);
    }

    fn unlisten(&mut self, listener: Listener) {
        self.listeners.remove(&listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> TerminalHost {
        TerminalHost::new(&DisplayConfig::default(), 80, 30)
    }

    #[test]
    fn test_viewport_in_surface_pixels() {
        let mut host = host();
        assert_eq!(host.viewport(), Viewport::new(800, 600));
        host.resize(160, 60);
        assert_eq!(host.viewport(), Viewport::new(1600, 1200));
    }

    #[test]
    fn test_cell_center_mapping() {
        let host = host();
        assert_eq!(host.cell_to_surface(0, 0), (5.0, 10.0));
        assert_eq!(host.cell_to_surface(40, 15), (405.0, 310.0));
        assert_eq!(host.dot_size(), (5.0, 5.0));
    }

    #[test]
    fn test_first_frame_is_due_immediately() {
        let mut host = host();
        let request = host.request_frame();
        let later = Instant::now() + Duration::from_millis(1);
        assert_eq!(host.take_due_frame(later), Some(request));
        assert_eq!(host.take_due_frame(later), None);
    }

    #[test]
    fn test_following_frames_are_paced() {
        let mut host = host();
        host.request_frame();
        let fired = Instant::now() + Duration::from_millis(1);
        host.take_due_frame(fired);

        let request = host.request_frame();
        assert_eq!(host.take_due_frame(fired), None);
        assert!(host.time_until_frame(fired) > Duration::ZERO);
        let due = fired + Duration::from_millis(17);
        assert_eq!(host.take_due_frame(due), Some(request));
    }

    #[test]
    fn test_cancel_only_matching_request() {
        let mut host = host();
        let request = host.request_frame();
        host.cancel_frame(FrameRequest(request.0 + 1));
        host.cancel_frame(request);
        assert_eq!(host.take_due_frame(Instant::now() + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_listener_registry() {
        let mut host = host();
        host.listen(Listener::PointerMove);
        assert!(host.is_listening(Listener::PointerMove));
        assert!(!host.is_listening(Listener::Resize));
        host.unlisten(Listener::PointerMove);
        assert!(!host.is_listening(Listener::PointerMove));
    }
}
