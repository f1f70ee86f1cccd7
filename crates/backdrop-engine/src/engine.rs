//! Engine instance and lifecycle controller.

use backdrop_core::{EngineOptions, Pointer, Viewport};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::driver::FrameDriver;
use crate::host::{FrameRequest, Host, HostEvent, Listener};
use crate::render::render;
use crate::state::SimulationState;
use crate::surface::Surface;

/// Lifecycle phase. Moves forward only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Running,
    TornDown,
}

/// A background animation bound to at most one surface.
///
/// Options are fixed at construction. The lifecycle methods are the only
/// mutators of the simulation state.
#[derive(Debug)]
pub struct Engine<S: Surface> {
    options: EngineOptions,
    phase: Phase,
    state: SimulationState,
    driver: FrameDriver,
    surface: Option<S>,
    rng: StdRng,
}

impl<S: Surface> Engine<S> {
    /// Create an engine seeded from `options.seed`, or from entropy.
    pub fn new(options: EngineOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(options, rng)
    }

    /// Create an engine with an explicit random source.
    pub fn with_rng(options: EngineOptions, rng: StdRng) -> Self {
        Self {
            options,
            phase: Phase::Uninitialized,
            state: SimulationState::default(),
            driver: FrameDriver::new(),
            surface: None,
            rng,
        }
    }

    /// Start the animation on `surface`.
    ///
    /// Registers listeners, builds the state for the host viewport and
    /// requests the first frame. Returns false if the engine was already
    /// attached or torn down.
    pub fn attach<H: Host + ?Sized>(&mut self, surface: S, host: &mut H) -> bool {
        if self.phase != Phase::Uninitialized {
            warn!(phase = ?self.phase, "attach ignored");
            return false;
        }

        self.surface = Some(surface);
        for listener in Listener::ALL {
            host.listen(listener);
        }
        self.rebuild(host.viewport());
        self.driver.start(host);
        self.phase = Phase::Running;

        info!(
            mode = self.options.mode.name(),
            elements = self.state.population().len(),
            "engine attached"
        );
        true
    }

    /// Tear down: cancel the pending frame, remove listeners and hand the
    /// surface back. Only acts on a running engine.
    pub fn detach<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<S> {
        if self.phase != Phase::Running {
            return None;
        }

        self.driver.stop(host);
        for listener in Listener::ALL {
            host.unlisten(listener);
        }
        self.state.clear();
        self.phase = Phase::TornDown;

        info!(frames = self.driver.frames(), "engine detached");
        self.surface.take()
    }

    /// Deliver a host event. Ignored unless running.
    pub fn handle<H: Host + ?Sized>(&mut self, event: HostEvent, host: &H) {
        if self.phase != Phase::Running {
            return;
        }
        match event {
            HostEvent::Resize => self.rebuild(host.viewport()),
            HostEvent::PointerMove { x, y } => {
                let (ox, oy) = self.surface.as_ref().map_or((0.0, 0.0), |s| s.offset());
                self.state.set_pointer(Pointer::at(x - ox, y - oy));
            }
            HostEvent::PointerLeave => self.state.set_pointer(Pointer::Absent),
        }
    }

    /// Run one frame for a fired request and schedule the next one.
    ///
    /// Stale requests, or any request after teardown, are ignored.
    pub fn on_frame<H: Host + ?Sized>(&mut self, request: FrameRequest, host: &mut H) {
        if self.phase != Phase::Running || !self.driver.accept(request) {
            return;
        }

        self.state.step(&self.options);
        if let Some(surface) = self.surface.as_mut() {
            render(&self.state, &self.options, surface);
        }
        self.driver.start(host);
    }

    fn rebuild(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(viewport);
        }
        self.state.rebuild(viewport, &self.options, &mut self.rng);
        debug!(
            width = viewport.width,
            height = viewport.height,
            elements = self.state.population().len(),
            "simulation rebuilt"
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The frame request currently awaited, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.driver.pending()
    }

    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }
}
