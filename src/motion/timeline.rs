//! Timelines: ordered tweens with position parameters, and the playhead that
//! walks them.

use std::fmt;

use super::easing::Easing;
use super::props::Props;
use super::TargetId;

const DEFAULT_DURATION: f64 = 0.5;

/// Where a tween starts relative to what is already on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// At the current end of the timeline.
    #[default]
    Next,
    /// At an absolute time in seconds.
    At(f64),
    /// Offset from the current end; `Relative(-0.5)` overlaps by half a second.
    Relative(f64),
    /// Together with the previously added tween.
    WithPrevious,
}

/// One or more targets for a tween.
#[derive(Debug, Clone, PartialEq)]
pub struct Targets(Vec<TargetId>);

impl From<TargetId> for Targets {
    fn from(target: TargetId) -> Self {
        Targets(vec![target])
    }
}

impl From<Vec<TargetId>> for Targets {
    fn from(targets: Vec<TargetId>) -> Self {
        Targets(targets)
    }
}

impl From<&[TargetId]> for Targets {
    fn from(targets: &[TargetId]) -> Self {
        Targets(targets.to_vec())
    }
}

/// A property animation over one or more targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    targets: Vec<TargetId>,
    /// `None` resolves to the value left by earlier tweens (or the rest value)
    /// when the tween is added to a timeline.
    from: Option<Props>,
    to: Props,
    duration: f64,
    ease: Easing,
    stagger: f64,
}

impl Tween {
    pub fn from_to(targets: impl Into<Targets>, from: Props, to: Props) -> Self {
        Self::build(targets.into(), Some(from), to)
    }

    /// Animate from `from` to the rest value of the same properties.
    pub fn from(targets: impl Into<Targets>, from: Props) -> Self {
        let to = from.rest();
        Self::build(targets.into(), Some(from), to)
    }

    /// Animate from the current value to `to`.
    pub fn to(targets: impl Into<Targets>, to: Props) -> Self {
        Self::build(targets.into(), None, to)
    }

    fn build(targets: Targets, from: Option<Props>, to: Props) -> Self {
        Self {
            targets: targets.0,
            from,
            to,
            duration: DEFAULT_DURATION,
            ease: Easing::default(),
            stagger: 0.0,
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    /// Offset each successive target's start by `seconds`, in source order.
    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds.max(0.0);
        self
    }

    fn span(&self) -> f64 {
        let extra = self.targets.len().saturating_sub(1) as f64 * self.stagger;
        self.duration + extra
    }
}

/// How many extra times a timeline plays after the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Times(u32),
    Forever,
}

#[derive(Debug, Clone, PartialEq)]
struct Track {
    target: TargetId,
    start: f64,
    duration: f64,
    ease: Easing,
    from: Props,
    to: Props,
}

impl Track {
    fn value_at(&self, time: f64) -> Props {
        let local = if self.duration <= 0.0 || time >= self.start + self.duration {
            1.0
        } else {
            (time - self.start) / self.duration
        };
        self.from.lerp(&self.to, self.ease.apply(local))
    }
}

pub type Callback = Box<dyn FnOnce()>;

/// An ordered sequence of tracks. Built once, then handed to the stage.
#[derive(Default)]
pub struct Timeline {
    tracks: Vec<Track>,
    duration: f64,
    last_start: f64,
    delay: f64,
    repeat: Repeat,
    yoyo: bool,
    clear_on_complete: bool,
    on_complete: Option<Callback>,
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("tracks", &self.tracks.len())
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("repeat", &self.repeat)
            .field("yoyo", &self.yoyo)
            .finish()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait before the first forward play.
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Alternate direction on every repeat.
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Remove every inline style the timeline wrote once it completes.
    pub fn clear_on_complete(mut self, clear: bool) -> Self {
        self.clear_on_complete = clear;
        self
    }

    /// Runs at most once, when the playhead first reaches the end going
    /// forward.
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Append at the end of the timeline.
    pub fn then(self, tween: Tween) -> Self {
        self.add(tween, Position::Next)
    }

    pub fn add(mut self, tween: Tween, at: Position) -> Self {
        let start = match at {
            Position::Next => self.duration,
            Position::At(time) => time,
            Position::Relative(offset) => self.duration + offset,
            Position::WithPrevious => self.last_start,
        }
        .max(0.0);

        for (i, &target) in tween.targets.iter().enumerate() {
            let track_start = start + i as f64 * tween.stagger;
            let from = match &tween.from {
                Some(from) => from.clone(),
                None => {
                    let mut from = self.state_before(target, track_start).only(&tween.to);
                    from.fill_missing(&tween.to.rest());
                    from
                }
            };
            self.tracks.push(Track {
                target,
                start: track_start,
                duration: tween.duration,
                ease: tween.ease,
                from,
                to: tween.to.clone(),
            });
        }
        // Stable sort keeps insertion order for tracks sharing a start time.
        self.tracks
            .sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(std::cmp::Ordering::Equal));

        self.last_start = start;
        self.duration = self.duration.max(start + tween.span());
        self
    }

    /// Length of one pass in seconds, excluding delay and repeats.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Every target the timeline writes to, in first-use order.
    pub fn targets(&self) -> Vec<TargetId> {
        let mut out: Vec<TargetId> = Vec::new();
        for track in &self.tracks {
            if !out.contains(&track.target) {
                out.push(track.target);
            }
        }
        out
    }

    pub fn clears_on_complete(&self) -> bool {
        self.clear_on_complete
    }

    pub(crate) fn take_on_complete(&mut self) -> Option<Callback> {
        self.on_complete.take()
    }

    /// Property values of every target at `time`. Tracks that have not started
    /// yet contribute their `from` values for properties no earlier track has
    /// set, so the first frame already shows the initial state.
    pub fn sample(&self, time: f64) -> Vec<(TargetId, Props)> {
        let mut frames: Vec<(TargetId, Props)> = Vec::new();
        for track in &self.tracks {
            let index = match frames.iter().position(|(target, _)| *target == track.target) {
                Some(index) => index,
                None => {
                    frames.push((track.target, Props::new()));
                    frames.len() - 1
                }
            };
            let props = &mut frames[index].1;
            if time >= track.start {
                props.overlay(&track.value_at(time));
            } else {
                props.fill_missing(&track.from);
            }
        }
        frames
    }

    /// State a target has been left in by tracks starting at or before `time`.
    fn state_before(&self, target: TargetId, time: f64) -> Props {
        let mut state = Props::new();
        for track in self.tracks.iter().filter(|t| t.target == target && t.start <= time) {
            state.overlay(&track.to);
        }
        state
    }

    pub(crate) fn playhead(&self) -> Playhead {
        Playhead::new(self.duration, self.delay, self.repeat, self.yoyo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEvent {
    /// Reached the end moving forward.
    Completed,
    /// Reached the start moving backward.
    ReverseCompleted,
}

/// Playback state of one timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Playhead {
    duration: f64,
    delay: f64,
    repeat: Repeat,
    yoyo: bool,
    elapsed: f64,
    wait: f64,
    direction: Direction,
    playing: bool,
}

impl Playhead {
    pub fn new(duration: f64, delay: f64, repeat: Repeat, yoyo: bool) -> Self {
        Self {
            duration: duration.max(0.0),
            delay,
            repeat,
            yoyo,
            elapsed: 0.0,
            wait: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    /// Total length of all passes; infinite for `Repeat::Forever`.
    pub fn span(&self) -> f64 {
        match self.repeat {
            Repeat::Never => self.duration,
            Repeat::Times(n) => self.duration * f64::from(n + 1),
            Repeat::Forever => f64::INFINITY,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn at_end(&self) -> bool {
        let span = self.span();
        span > 0.0 && self.elapsed >= span
    }

    pub fn at_start(&self) -> bool {
        self.elapsed <= 0.0
    }

    /// Progress through all passes in `[0, 1]`; always 0 for endless playheads.
    pub fn progress(&self) -> f64 {
        let span = self.span();
        if span.is_finite() && span > 0.0 {
            (self.elapsed / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Time within the timeline to sample.
    pub fn time(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let passes = (self.elapsed / self.duration).floor();
        let (pass, local) = if self.at_end() {
            (passes - 1.0, self.duration)
        } else {
            (passes, self.elapsed - passes * self.duration)
        };
        if self.yoyo && (pass as u64) % 2 == 1 {
            self.duration - local
        } else {
            local
        }
    }

    pub fn play(&mut self) {
        if self.at_start() && !self.playing && self.delay > 0.0 {
            self.wait = self.delay;
        }
        self.direction = Direction::Forward;
        self.playing = !self.at_end();
    }

    pub fn reverse(&mut self) {
        self.wait = 0.0;
        self.direction = Direction::Backward;
        self.playing = !self.at_start();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = match self.direction {
            Direction::Forward => !self.at_end(),
            Direction::Backward => !self.at_start(),
        };
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.wait = 0.0;
        self.direction = Direction::Forward;
        self.playing = true;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.wait = 0.0;
        self.playing = false;
    }

    pub fn complete(&mut self) {
        if self.span().is_finite() {
            self.elapsed = self.span();
        }
        self.wait = 0.0;
        self.playing = false;
    }

    /// Jump to `progress` of the span and stop; used by scrubbed bindings.
    pub fn seek(&mut self, progress: f64) {
        let span = self.span();
        if span.is_finite() {
            self.elapsed = progress.clamp(0.0, 1.0) * span;
        }
        self.wait = 0.0;
        self.playing = false;
    }

    /// Move the playhead by `dt` seconds in its current direction.
    pub fn advance(&mut self, dt: f64) -> Option<PlayEvent> {
        if !self.playing || dt <= 0.0 {
            return None;
        }
        let mut dt = dt;
        if self.direction == Direction::Forward && self.wait > 0.0 {
            let used = dt.min(self.wait);
            self.wait -= used;
            dt -= used;
            if dt <= 0.0 {
                return None;
            }
        }
        match self.direction {
            Direction::Forward => {
                self.elapsed += dt;
                let span = self.span();
                if self.elapsed >= span {
                    self.elapsed = span;
                    self.playing = false;
                    return Some(PlayEvent::Completed);
                }
            }
            Direction::Backward => {
                self.elapsed -= dt;
                if self.elapsed <= 0.0 {
                    self.elapsed = 0.0;
                    self.playing = false;
                    return Some(PlayEvent::ReverseCompleted);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: TargetId = TargetId(1);
    const B: TargetId = TargetId(2);

    fn fade() -> Tween {
        Tween::from_to(A, Props::new().opacity(0.0), Props::new().opacity(1.0))
            .duration(1.0)
            .ease(Easing::Linear)
    }

    #[test]
    fn positions_resolve_against_timeline_end() {
        let tl = Timeline::new()
            .then(fade())
            .add(fade().duration(1.5), Position::Relative(-0.5))
            .add(fade().duration(1.5), Position::WithPrevious)
            .add(fade().duration(0.5), Position::Next);
        let starts: Vec<f64> = tl.tracks.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0.0, 0.5, 0.5, 2.0]);
        assert_eq!(tl.duration(), 2.5);
    }

    #[test]
    fn absolute_position_does_not_depend_on_order() {
        let tl = Timeline::new()
            .add(fade().duration(2.0), Position::At(0.0))
            .add(fade().duration(1.0), Position::At(1.2));
        assert!((tl.duration() - 2.2).abs() < 1e-9);
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        let tl = Timeline::new().add(fade(), Position::Relative(-3.0));
        assert_eq!(tl.tracks[0].start, 0.0);
    }

    #[test]
    fn stagger_offsets_targets_in_source_order() {
        let tl = Timeline::new().then(
            Tween::from(vec![A, B, TargetId(3)], Props::new().y(30.0))
                .duration(0.8)
                .stagger(0.1),
        );
        let starts: Vec<(TargetId, f64)> = tl.tracks.iter().map(|t| (t.target, t.start)).collect();
        assert_eq!(starts, vec![(A, 0.0), (B, 0.1), (TargetId(3), 0.2)]);
        assert!((tl.duration() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sample_renders_initial_state_before_start() {
        let tl = Timeline::new().add(fade(), Position::At(1.0));
        assert_eq!(tl.sample(0.0), vec![(A, Props::new().opacity(0.0))]);
        assert_eq!(tl.sample(1.5), vec![(A, Props::new().opacity(0.5))]);
        assert_eq!(tl.sample(9.0), vec![(A, Props::new().opacity(1.0))]);
    }

    #[test]
    fn later_tracks_take_over_once_started() {
        let tl = Timeline::new()
            .then(fade())
            .then(Tween::to(A, Props::new().opacity(0.0)).duration(1.0).ease(Easing::Linear));
        assert_eq!(tl.sample(0.5), vec![(A, Props::new().opacity(0.5))]);
        assert_eq!(tl.sample(1.5), vec![(A, Props::new().opacity(0.5))]);
        assert_eq!(tl.sample(2.0), vec![(A, Props::new().opacity(0.0))]);
    }

    #[test]
    fn to_tween_starts_from_previous_end_state() {
        let tl = Timeline::new()
            .then(Tween::from_to(A, Props::new().y(20.0), Props::new().y(0.0)).duration(1.0))
            .then(Tween::to(A, Props::new().y(-50.0).scale(2.0)));
        let last = tl.tracks.last().unwrap();
        assert_eq!(last.from, Props::new().y(0.0).scale(1.0));
    }

    #[test]
    fn from_tween_lands_on_rest() {
        let tl = Timeline::new().then(Tween::from(B, Props::new().scale(0.95).y(30.0)).duration(1.0));
        assert_eq!(tl.sample(1.0), vec![(B, Props::new().scale(1.0).y(0.0))]);
    }

    #[test]
    fn on_complete_is_taken_once() {
        let mut tl = Timeline::new().then(fade()).on_complete(|| {});
        assert!(tl.take_on_complete().is_some());
        assert!(tl.take_on_complete().is_none());
    }

    #[test]
    fn playhead_completes_once_and_reverses() {
        let mut head = Playhead::new(1.0, 0.0, Repeat::Never, false);
        head.play();
        assert_eq!(head.advance(0.6), None);
        assert_eq!(head.advance(0.6), Some(PlayEvent::Completed));
        assert_eq!(head.advance(0.6), None);
        assert_eq!(head.time(), 1.0);

        head.reverse();
        assert_eq!(head.advance(0.25), None);
        assert!((head.time() - 0.75).abs() < 1e-9);
        assert_eq!(head.advance(2.0), Some(PlayEvent::ReverseCompleted));
        assert!(head.at_start());
    }

    #[test]
    fn play_at_end_is_a_no_op() {
        let mut head = Playhead::new(1.0, 0.0, Repeat::Never, false);
        head.complete();
        head.play();
        assert!(!head.is_playing());
    }

    #[test]
    fn delay_applies_to_forward_play_from_start() {
        let mut head = Playhead::new(1.0, 0.5, Repeat::Never, false);
        head.play();
        assert_eq!(head.advance(0.4), None);
        assert_eq!(head.time(), 0.0);
        head.advance(0.3);
        assert!((head.time() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn yoyo_repeat_mirrors_odd_passes() {
        let mut head = Playhead::new(0.1, 0.0, Repeat::Times(1), true);
        head.play();
        head.advance(0.05);
        assert!((head.time() - 0.05).abs() < 1e-9);
        head.advance(0.08);
        assert!((head.time() - 0.07).abs() < 1e-9);
        assert_eq!(head.advance(1.0), Some(PlayEvent::Completed));
        assert_eq!(head.time(), 0.0);
    }

    #[test]
    fn endless_playhead_never_completes() {
        let mut head = Playhead::new(1.5, 0.0, Repeat::Forever, false);
        head.play();
        for _ in 0..100 {
            assert_eq!(head.advance(0.7), None);
        }
        assert!(head.is_playing());
        assert!(head.time() < 1.5);
    }

    #[test]
    fn seek_clamps_progress() {
        let mut head = Playhead::new(2.0, 0.0, Repeat::Never, false);
        head.seek(1.7);
        assert_eq!(head.progress(), 1.0);
        head.seek(0.25);
        assert_eq!(head.time(), 0.5);
        assert!(!head.is_playing());
    }
}
