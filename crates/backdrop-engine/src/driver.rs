//! Frame scheduling on top of the host's display-sync primitive.

use crate::host::{FrameRequest, Host};

/// Tracks the single outstanding frame request of an engine.
///
/// At most one request is pending at a time. [`FrameDriver::stop`]
/// cancels it and is a no-op when nothing is pending.
#[derive(Debug, Default)]
pub struct FrameDriver {
    pending: Option<FrameRequest>,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next frame unless one is already pending.
    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.pending.is_none() {
            self.pending = Some(host.request_frame());
        }
    }

    /// Cancel the pending request, if any.
    pub fn stop<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(request) = self.pending.take() {
            host.cancel_frame(request);
        }
    }

    /// Consume a fired request. Returns false for stale or foreign requests.
    pub fn accept(&mut self, request: FrameRequest) -> bool {
        if self.pending == Some(request) {
            self.pending = None;
            self.frames += 1;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Number of frames accepted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Listener;
    use backdrop_core::Viewport;

    #[derive(Default)]
    struct CountingHost {
        next: u64,
        cancelled: Vec<FrameRequest>,
    }

    impl Host for CountingHost {
        fn viewport(&self) -> Viewport {
            Viewport::default()
        }

        fn request_frame(&mut self) -> FrameRequest {
            self.next += 1;
            FrameRequest(self.next)
        }

        fn cancel_frame(&mut self, request: FrameRequest) {
            self.cancelled.push(request);
        }

        fn listen(&mut self, _listener: Listener) {}

        fn unlisten(&mut self, _listener: Listener) {}
    }

    #[test]
    fn test_start_requests_once() {
        let mut host = CountingHost::default();
        let mut driver = FrameDriver::new();
        driver.start(&mut host);
        driver.start(&mut host);
        assert_eq!(driver.pending(), Some(FrameRequest(1)));
        assert_eq!(host.next, 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut host = CountingHost::default();
        let mut driver = FrameDriver::new();
        driver.stop(&mut host);
        assert!(host.cancelled.is_empty());

        driver.start(&mut host);
        driver.stop(&mut host);
        driver.stop(&mut host);
        assert_eq!(host.cancelled, vec![FrameRequest(1)]);
        assert_eq!(driver.pending(), None);
    }

    #[test]
    fn test_accept_only_pending_request() {
        let mut host = CountingHost::default();
        let mut driver = FrameDriver::new();
        driver.start(&mut host);
        assert!(!driver.accept(FrameRequest(7)));
        assert!(driver.accept(FrameRequest(1)));
        assert!(!driver.accept(FrameRequest(1)));
        assert_eq!(driver.frames(), 1);
    }
}
