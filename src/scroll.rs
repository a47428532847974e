use thiserror::Error;

/// Layout of one invisible section anchor, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub offset_top: f64,
    pub offset_height: f64,
}

/// Snapshot of the viewport taken on a scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    /// `None` for anchors that are not mounted yet.
    pub anchors: Vec<Option<AnchorRect>>,
}

impl ScrollFrame {
    /// Normalized scroll progress in `[0, 1]`; 0 when the page cannot scroll.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollError {
    #[error("breakpoints must be strictly ascending")]
    UnorderedBreakpoints,
    #[error("breakpoint {0} is outside [0, 1]")]
    BreakpointOutOfRange(f64),
}

/// Classifies which section the reader is looking at.
pub trait SectionTracker {
    fn active(&self, frame: &ScrollFrame) -> usize;
}

/// Intersection-style tracker over the anchor elements.
///
/// Every anchor whose top has been scrolled past (allowing `threshold` of the
/// viewport as lead-in) overwrites the running result, so the highest crossed
/// anchor wins rather than the topmost visible one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTracker {
    threshold: f64,
}

impl AnchorTracker {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SectionTracker for AnchorTracker {
    fn active(&self, frame: &ScrollFrame) -> usize {
        let lead_in = frame.viewport_height * (1.0 - self.threshold);
        let mut current = 0;
        for (index, anchor) in frame.anchors.iter().enumerate() {
            let Some(anchor) = anchor else {
                continue;
            };
            if frame.scroll_y >= anchor.offset_top - lead_in {
                current = index;
            }
        }
        current
    }
}

/// Fixed progress ranges: `progress < b[0]` is section 0, `b[0] <= progress < b[1]`
/// is section 1, and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTracker {
    breakpoints: Vec<f64>,
}

impl BreakpointTracker {
    pub fn new(breakpoints: Vec<f64>) -> Result<Self, ScrollError> {
        if let Some(b) = breakpoints
            .iter()
            .find(|b| !b.is_finite() || **b < 0.0 || **b > 1.0)
        {
            return Err(ScrollError::BreakpointOutOfRange(*b));
        }
        if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScrollError::UnorderedBreakpoints);
        }
        Ok(Self { breakpoints })
    }

    /// Number of sections this tracker can report.
    pub fn len(&self) -> usize {
        self.breakpoints.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn index_for(&self, progress: f64) -> usize {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.breakpoints.iter().take_while(|b| **b <= progress).count()
    }
}

impl SectionTracker for BreakpointTracker {
    fn active(&self, frame: &ScrollFrame) -> usize {
        self.index_for(frame.progress())
    }
}

/// Spring-smoothed progress mapped through breakpoints. The spring is advanced by
/// the animation-frame loop, so `active` reads the smoothed value, not the frame's.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedTracker {
    breakpoints: BreakpointTracker,
    spring: Spring,
}

impl SmoothedTracker {
    pub fn new(breakpoints: BreakpointTracker, spring: Spring) -> Self {
        Self { breakpoints, spring }
    }

    pub fn advance(&mut self, target_progress: f64, dt_secs: f64) -> usize {
        self.spring.step(target_progress.clamp(0.0, 1.0), dt_secs);
        self.current()
    }

    pub fn current(&self) -> usize {
        self.breakpoints.index_for(self.spring.value())
    }

    pub fn progress(&self) -> f64 {
        self.spring.value().clamp(0.0, 1.0)
    }
}

impl SectionTracker for SmoothedTracker {
    fn active(&self, _frame: &ScrollFrame) -> usize {
        self.current()
    }
}

/// Linear mapping of `value` from `input` to `output`, clamped at both ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (start, end) = input;
    let (min, max) = output;
    if value <= start {
        return min;
    }
    if value >= end {
        return max;
    }
    let t = (value - start) / (end - start);
    min + t * (max - min)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Animated scroll from the current position to a target, sampled once per
/// animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to: to.max(0.0),
            duration_ms: duration_ms.max(0.0),
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Position at the given frame timestamp and whether the tween is finished.
    /// The first sample fixes the start time.
    pub fn sample(&mut self, timestamp_ms: f64) -> (f64, bool) {
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        if self.duration_ms == 0.0 {
            return (self.to, true);
        }
        let progress = ((timestamp_ms - started_at) / self.duration_ms).clamp(0.0, 1.0);
        let eased = ease_in_out_cubic(progress);
        (self.from + (self.to - self.from) * eased, progress >= 1.0)
    }
}

/// Damped spring used to smooth scroll-linked values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    rest_delta: f64,
    value: f64,
    velocity: f64,
}

const MAX_SPRING_STEP: f64 = 1.0 / 120.0;

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.001,
            value: 0.0,
            velocity: 0.0,
        }
    }

    pub fn with_rest_delta(mut self, rest_delta: f64) -> Self {
        self.rest_delta = rest_delta;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_resting(&self, target: f64) -> bool {
        (self.value - target).abs() < self.rest_delta && self.velocity.abs() < self.rest_delta
    }

    /// Advance by `dt_secs` towards `target`. Large frame gaps are split into
    /// small sub-steps to keep the integration stable.
    pub fn step(&mut self, target: f64, dt_secs: f64) -> f64 {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.value;
        }
        let mut remaining = dt_secs.min(1.0);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_SPRING_STEP);
            let force = -self.stiffness * (self.value - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }
        if self.is_resting(target) {
            self.value = target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(scroll_y: f64, anchors: &[f64]) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            viewport_height: 1000.0,
            document_height: 5000.0,
            anchors: anchors
                .iter()
                .map(|top| {
                    Some(AnchorRect {
                        offset_top: *top,
                        offset_height: 1000.0,
                    })
                })
                .collect(),
        }
    }

    #[test]
    fn test_anchor_tracker_latest_crossed_wins() {
        let tracker = AnchorTracker::new(0.4);
        let anchors = [0.0, 1000.0, 2000.0, 3000.0, 4000.0];

        // nothing past the first lead-in
        assert_eq!(tracker.active(&frame(0.0, &anchors)), 0);
        // lead-in is 600px, so anchor at 1000 is crossed from 400
        assert_eq!(tracker.active(&frame(399.0, &anchors)), 0);
        assert_eq!(tracker.active(&frame(400.0, &anchors)), 1);
        // several crossed: highest index wins
        assert_eq!(tracker.active(&frame(3500.0, &anchors)), 4);
    }

    #[test]
    fn test_anchor_tracker_skips_unmounted_and_defaults() {
        let tracker = AnchorTracker::new(0.3);
        let mut f = frame(2500.0, &[0.0, 1000.0, 2000.0]);
        f.anchors[2] = None;
        assert_eq!(tracker.active(&f), 1);

        let empty = ScrollFrame {
            scroll_y: 1234.0,
            viewport_height: 800.0,
            ..Default::default()
        };
        assert_eq!(tracker.active(&empty), 0);

        // anchors far below never crossed
        assert_eq!(tracker.active(&frame(0.0, &[5000.0, 6000.0])), 0);
    }

    #[test]
    fn test_anchor_tracker_bounds() {
        let tracker = AnchorTracker::new(7.0);
        assert_eq!(tracker.threshold(), 1.0);
        let anchors = [0.0, 1000.0, 2000.0];
        for y in [-1e9, -1.0, 0.0, 1e3, 1e12, f64::INFINITY] {
            assert!(tracker.active(&frame(y, &anchors)) < anchors.len());
        }
    }

    #[test]
    fn test_progress_clamps() {
        let mut f = frame(2000.0, &[]);
        assert_eq!(f.progress(), 0.5);
        f.scroll_y = -300.0;
        assert_eq!(f.progress(), 0.0);
        f.scroll_y = 90000.0;
        assert_eq!(f.progress(), 1.0);
        f.document_height = 500.0;
        assert_eq!(f.progress(), 0.0);
    }

    #[test]
    fn test_breakpoint_tracker_mapping() {
        let tracker = BreakpointTracker::new(vec![0.2, 0.35, 0.55, 0.75]).unwrap();
        assert_eq!(tracker.len(), 5);
        assert_eq!(tracker.index_for(0.0), 0);
        assert_eq!(tracker.index_for(0.19), 0);
        assert_eq!(tracker.index_for(0.2), 1);
        assert_eq!(tracker.index_for(0.5), 2);
        assert_eq!(tracker.index_for(0.6), 3);
        assert_eq!(tracker.index_for(1.0), 4);
        assert_eq!(tracker.index_for(-4.0), 0);
        assert_eq!(tracker.index_for(3.5), 4);
        assert_eq!(tracker.index_for(f64::NAN), 0);
    }

    #[test]
    fn test_breakpoint_tracker_monotonic() {
        let tracker = BreakpointTracker::new(vec![0.2, 0.35, 0.55, 0.75]).unwrap();
        let mut last = 0;
        for step in -50..=150 {
            let p = step as f64 / 100.0;
            let index = tracker.index_for(p);
            assert!(index >= last, "index dropped at progress {p}");
            assert!(index < tracker.len());
            last = index;
        }
    }

    #[test]
    fn test_breakpoint_tracker_rejects_bad_input() {
        assert_eq!(
            BreakpointTracker::new(vec![0.5, 0.3]),
            Err(ScrollError::UnorderedBreakpoints)
        );
        assert_eq!(
            BreakpointTracker::new(vec![0.3, 0.3]),
            Err(ScrollError::UnorderedBreakpoints)
        );
        assert_eq!(
            BreakpointTracker::new(vec![1.5]),
            Err(ScrollError::BreakpointOutOfRange(1.5))
        );
        assert_eq!(BreakpointTracker::new(vec![]).unwrap().len(), 1);
    }

    #[test]
    fn test_smoothed_tracker_lags_then_settles() {
        let breakpoints = BreakpointTracker::new(vec![0.2, 0.35, 0.55, 0.75]).unwrap();
        let mut tracker = SmoothedTracker::new(breakpoints, Spring::new(100.0, 20.0));
        // one short frame is not enough to reach the last section
        assert!(tracker.advance(1.0, 1.0 / 60.0) < 4);
        for _ in 0..600 {
            tracker.advance(1.0, 1.0 / 60.0);
        }
        assert_eq!(tracker.active(&ScrollFrame::default()), 4);
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate(0.0, (0.0, 0.3), (1.0, 0.0)), 1.0);
        assert_eq!(interpolate(0.3, (0.0, 0.3), (1.0, 0.0)), 0.0);
        assert!((interpolate(0.15, (0.0, 0.3), (0.0, 20.0)) - 10.0).abs() < 1e-9);
        assert_eq!(interpolate(-1.0, (0.18, 0.35), (60.0, 0.0)), 60.0);
        assert_eq!(interpolate(2.0, (0.18, 0.35), (60.0, 0.0)), 0.0);
    }

    #[test]
    fn test_ease_in_out_cubic() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn test_scroll_tween() {
        let mut tween = ScrollTween::new(0.0, 1000.0, 500.0);
        assert_eq!(tween.sample(100.0), (0.0, false));
        let (mid, done) = tween.sample(350.0);
        assert_eq!(mid, 500.0);
        assert!(!done);
        assert_eq!(tween.sample(600.0), (1000.0, true));
        assert_eq!(tween.sample(9000.0), (1000.0, true));

        let mut instant = ScrollTween::new(10.0, -20.0, 0.0);
        assert_eq!(instant.sample(1.0), (0.0, true));
    }

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(100.0, 30.0);
        for _ in 0..300 {
            spring.step(1.0, 1.0 / 60.0);
        }
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_resting(1.0));

        // a zero or bogus frame gap leaves the value untouched
        let before = spring.value();
        assert_eq!(spring.step(0.0, 0.0), before);
        assert_eq!(spring.step(0.0, f64::NAN), before);
    }
}
