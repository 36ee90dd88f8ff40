//! Scroll triggers: a scroll range measured against a target, and what to do
//! with a timeline as the document scroll position moves through it.

use std::str::FromStr;

use super::MotionError;

/// A point on an element or on the viewport: a fraction of its height, or a
/// pixel offset from its top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Fraction(f64),
    Pixels(f64),
}

impl Edge {
    fn resolve(self, height: f64) -> f64 {
        match self {
            Edge::Fraction(f) => f * height,
            Edge::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidMarker(s.to_string());
        match s {
            "top" => Ok(Edge::Fraction(0.0)),
            "center" => Ok(Edge::Fraction(0.5)),
            "bottom" => Ok(Edge::Fraction(1.0)),
            _ => {
                if let Some(pct) = s.strip_suffix('%') {
                    pct.parse::<f64>().map(|v| Edge::Fraction(v / 100.0)).map_err(|_| invalid())
                } else if let Some(px) = s.strip_suffix("px") {
                    px.parse::<f64>().map(Edge::Pixels).map_err(|_| invalid())
                } else {
                    s.parse::<f64>().map(Edge::Pixels).map_err(|_| invalid())
                }
            }
        }
    }
}

/// `"<element edge> <viewport edge>"`: the trigger point is reached when the
/// element edge meets the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub element: Edge,
    pub viewport: Edge,
}

impl FromStr for Marker {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Marker {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(MotionError::InvalidMarker(s.to_string())),
        }
    }
}

/// The end of a range: an absolute marker, or a distance past the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndMarker {
    At(Marker),
    /// Distance past the start, as a fraction of the viewport height.
    ViewportFraction(f64),
    /// Distance past the start in px.
    Pixels(f64),
}

impl FromStr for EndMarker {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.trim().strip_prefix("+=") else {
            return s.parse().map(EndMarker::At);
        };
        let invalid = || MotionError::InvalidMarker(s.to_string());
        if let Some(pct) = rest.strip_suffix('%') {
            pct.parse::<f64>()
                .map(|v| EndMarker::ViewportFraction(v / 100.0))
                .map_err(|_| invalid())
        } else {
            rest.trim_end_matches("px")
                .parse::<f64>()
                .map(EndMarker::Pixels)
                .map_err(|_| invalid())
        }
    }
}

/// Document-relative geometry of a trigger element, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

/// Scroll offset and visible height of the viewport, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Marker,
    pub end: EndMarker,
}

impl ScrollRange {
    /// Parse a start and end marker, e.g. `("top 75%", "bottom top")` or
    /// `("top top", "+=200%")`.
    pub fn parse(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// A range that starts at `start` and ends when the element's bottom
    /// leaves the top of the viewport.
    pub fn starting(start: &str) -> Result<Self, MotionError> {
        Self::parse(start, "bottom top")
    }

    /// Scroll offsets at which the range starts and ends.
    pub fn resolve(&self, bounds: Bounds, viewport_height: f64) -> ResolvedRange {
        let at = |marker: Marker| {
            bounds.top + marker.element.resolve(bounds.height) - marker.viewport.resolve(viewport_height)
        };
        let start = at(self.start);
        let end = match self.end {
            EndMarker::At(marker) => at(marker),
            EndMarker::ViewportFraction(f) => start + f * viewport_height,
            EndMarker::Pixels(px) => start + px,
        };
        ResolvedRange {
            start,
            end: end.max(start),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    pub start: f64,
    pub end: f64,
}

impl ResolvedRange {
    pub fn zone(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y < self.end || self.end <= self.start {
            Zone::Inside
        } else {
            Zone::After
        }
    }

    /// Fraction of the range scrolled through, clamped to `[0, 1]`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let length = self.end - self.start;
        if length <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / length).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Before,
    Inside,
    After,
}

/// What a toggle trigger does to its timeline at a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for Action {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Action::Play,
            "pause" => Action::Pause,
            "resume" => Action::Resume,
            "reverse" => Action::Reverse,
            "restart" => Action::Restart,
            "reset" => Action::Reset,
            "complete" => Action::Complete,
            "none" => Action::None,
            _ => return Err(MotionError::InvalidToggleActions(s.to_string())),
        })
    }
}

/// Actions for the four crossings, in the order
/// `onEnter onLeave onEnterBack onLeaveBack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub enter: Action,
    pub leave: Action,
    pub enter_back: Action,
    pub leave_back: Action,
}

impl ToggleActions {
    /// Play once on the way down and rewind when scrolled back above the start.
    pub const REVEAL: ToggleActions = ToggleActions {
        enter: Action::Play,
        leave: Action::None,
        enter_back: Action::None,
        leave_back: Action::Reverse,
    };

    /// Play on first entry and never react again.
    pub const ONCE: ToggleActions = ToggleActions {
        enter: Action::Play,
        leave: Action::None,
        enter_back: Action::None,
        leave_back: Action::None,
    };
}

impl Default for ToggleActions {
    fn default() -> Self {
        ToggleActions::ONCE
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Action>, _>>()?;
        match actions.as_slice() {
            &[enter, leave, enter_back, leave_back] => Ok(ToggleActions {
                enter,
                leave,
                enter_back,
                leave_back,
            }),
            _ => Err(MotionError::InvalidToggleActions(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerMode {
    /// Discrete actions at each crossing.
    Toggle(ToggleActions),
    /// Progress follows the scroll position. With `lag > 0` the playhead
    /// catches up over roughly `lag` seconds instead of snapping.
    Scrub { lag: f64 },
}

/// What the stage should do after a scroll update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    Toggle(Action),
    Scrub(f64),
}

/// One scroll-range binding. Holds its resolved range and the zone the scroll
/// position was last seen in.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    range: ScrollRange,
    mode: TriggerMode,
    resolved: Option<ResolvedRange>,
    zone: Option<Zone>,
}

impl Trigger {
    pub fn new(range: ScrollRange, mode: TriggerMode) -> Self {
        Self {
            range,
            mode,
            resolved: None,
            zone: None,
        }
    }

    pub fn toggle(range: ScrollRange, actions: ToggleActions) -> Self {
        Self::new(range, TriggerMode::Toggle(actions))
    }

    pub fn scrub(range: ScrollRange, lag: f64) -> Self {
        Self::new(range, TriggerMode::Scrub { lag: lag.max(0.0) })
    }

    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    pub fn resolved(&self) -> Option<ResolvedRange> {
        self.resolved
    }

    /// Re-measure against fresh geometry. The last-seen zone is kept so a
    /// refresh alone never fires actions.
    pub fn refresh(&mut self, bounds: Bounds, viewport_height: f64) {
        self.resolved = Some(self.range.resolve(bounds, viewport_height));
    }

    /// Feed a scroll position; returns the cues for every crossing since the
    /// previous update, in crossing order.
    pub fn update(&mut self, scroll_y: f64) -> Vec<Cue> {
        let Some(range) = self.resolved else {
            return Vec::new();
        };
        match self.mode {
            TriggerMode::Scrub { .. } => {
                self.zone = Some(range.zone(scroll_y));
                vec![Cue::Scrub(range.progress(scroll_y))]
            }
            TriggerMode::Toggle(actions) => {
                let next = range.zone(scroll_y);
                let previous = self.zone.replace(next).unwrap_or(Zone::Before);
                crossings(previous, next, actions)
                    .into_iter()
                    .filter(|action| *action != Action::None)
                    .map(Cue::Toggle)
                    .collect()
            }
        }
    }
}

fn crossings(from: Zone, to: Zone, actions: ToggleActions) -> Vec<Action> {
    use Zone::*;
    match (from, to) {
        (Before, Inside) => vec![actions.enter],
        (Before, After) => vec![actions.enter, actions.leave],
        (Inside, After) => vec![actions.leave],
        (After, Inside) => vec![actions.enter_back],
        (After, Before) => vec![actions.enter_back, actions.leave_back],
        (Inside, Before) => vec![actions.leave_back],
        _ => Vec::new(),
    }
}
