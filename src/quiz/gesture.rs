//! Swipe gestures to navigation intents.

/// Shortest movement along the dominant axis that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
}

impl Swipe {
    /// Horizontal swipes navigate; vertical ones carry no intent.
    pub fn intent(self) -> Option<NavIntent> {
        match self {
            Swipe::Left => Some(NavIntent::Advance),
            Swipe::Right => Some(NavIntent::Retreat),
            Swipe::Up | Swipe::Down => None,
        }
    }
}

pub fn classify(start: Point, end: Point) -> Option<Swipe> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > dy.abs() {
        if dx.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if dx < 0.0 { Swipe::Left } else { Swipe::Right })
    } else {
        if dy.abs() < SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if dy < 0.0 { Swipe::Up } else { Swipe::Down })
    }
}

/// Collects one touch sequence at a time.
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start: Option<Point>,
    end: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, point: Point) {
        self.start = Some(point);
        self.end = None;
    }

    pub fn touch_move(&mut self, point: Point) {
        if self.start.is_some() {
            self.end = Some(point);
        }
    }

    /// Finishes the sequence. A touch that never moved is not a swipe.
    pub fn touch_end(&mut self) -> Option<Swipe> {
        let start = self.start.take();
        let end = self.end.take();
        classify(start?, end?)
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
