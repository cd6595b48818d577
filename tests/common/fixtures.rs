// Test fixtures

use std::sync::OnceLock;

use perch::{Direction, PopupSurface, PositionMode, Rect};

/// Install a tracing subscriber once for the whole test binary.
/// Engine log output is opt-in via RUST_LOG (e.g. RUST_LOG=perch=trace).
pub fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A popup surface with scripted geometry, standing in for the host UI's
/// measurement capability.
pub struct FakePopup {
    size: (f32, f32),
    mode: PositionMode,
    direction: Direction,
    viewport: Rect,
    container: Rect,
}

impl FakePopup {
    /// A fixed-position popup of the given intrinsic size in an 800x600
    /// viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: (width, height),
            mode: PositionMode::Fixed,
            direction: Direction::Ltr,
            viewport: Rect::from_size(800.0, 600.0),
            container: Rect::from_size(800.0, 600.0),
        }
    }

    /// Set the position mode.
    pub fn with_mode(mut self, mode: PositionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the text direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the viewport rectangle.
    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the containing positioned ancestor's rectangle.
    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = container;
        self
    }
}

impl PopupSurface for FakePopup {
    fn bounding_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.0, self.size.1)
    }

    fn position_mode(&self) -> PositionMode {
        self.mode
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn viewport_rect(&self) -> Rect {
        self.viewport
    }

    fn container_rect(&self) -> Rect {
        self.container
    }
}
