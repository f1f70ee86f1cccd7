//! The environment an engine is attached into.

use backdrop_core::Viewport;

/// Handle for a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(pub u64);

/// Event subscriptions an engine holds while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {
    Resize,
    PointerMove,
    PointerLeave,
}

impl Listener {
    pub const ALL: [Listener; 3] = [
        Listener::Resize,
        Listener::PointerMove,
        Listener::PointerLeave,
    ];
}

/// Events a host forwards to a running engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The viewport changed; the new size is read from [`Host::viewport`].
    Resize,
    /// Pointer moved to absolute host coordinates.
    PointerMove { x: f64, y: f64 },
    /// Pointer left the surface.
    PointerLeave,
}

impl HostEvent {
    /// The subscription this event is delivered through.
    pub fn listener(&self) -> Listener {
        match self {
            HostEvent::Resize => Listener::Resize,
            HostEvent::PointerMove { .. } => Listener::PointerMove,
            HostEvent::PointerLeave => Listener::PointerLeave,
        }
    }
}

/// Viewport source, display-sync scheduler and listener registry.
pub trait Host {
    /// Current viewport size in surface pixels.
    fn viewport(&self) -> Viewport;

    /// Schedule one frame callback at the next display refresh.
    fn request_frame(&mut self) -> FrameRequest;

    /// Drop a scheduled callback. Unknown requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);

    fn listen(&mut self, listener: Listener);

    fn unlisten(&mut self, listener: Listener);
}
