/// Kind of pointer event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Single-pointer input event in control-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
    /// Event timestamp in milliseconds, used for velocity tracking.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32, time_ms: i64) -> Self {
        Self { kind, x, y, time_ms }
    }

    pub fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, x, y, time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, x, y, time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, x, y, time_ms)
    }

    pub fn cancel(time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, 0.0, 0.0, time_ms)
    }

    /// Whether both coordinates are usable numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
