use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning { started_at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction a wheel or swipe delta points in; zero points nowhere.
    pub fn of(delta: f64) -> Option<Self> {
        if !delta.is_finite() || delta == 0.0 {
            None
        } else if delta > 0.0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }

    pub fn between(from: usize, to: usize) -> Self {
        if to >= from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    CoolingDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Started(Transition),
    /// Requested section is already active.
    Unchanged,
    Rejected(Rejection),
}

impl TransitionOutcome {
    pub fn started(&self) -> Option<Transition> {
        match self {
            TransitionOutcome::Started(t) => Some(*t),
            _ => None,
        }
    }
}

/// Gates section changes so fast wheel and touch input cannot flicker between
/// panels. The active index moves as soon as a change is accepted; the cooldown
/// only blocks the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionController {
    len: usize,
    active: usize,
    cooldown: TimeDelta,
    state: TransitionState,
    last: Option<Direction>,
}

impl TransitionController {
    /// `len` is clamped to at least one section.
    pub fn new(len: usize, cooldown: TimeDelta) -> Self {
        Self {
            len: len.max(1),
            active: 0,
            cooldown: cooldown.max(TimeDelta::zero()),
            state: TransitionState::Idle,
            last: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn cooldown(&self) -> TimeDelta {
        self.cooldown
    }

    /// Direction of the most recent accepted change.
    pub fn last_direction(&self) -> Direction {
        self.last.unwrap_or(Direction::Forward)
    }

    pub fn is_transitioning(&self, now: DateTime<Utc>) -> bool {
        match self.state {
            TransitionState::Idle => false,
            TransitionState::Transitioning { started_at } => now - started_at < self.cooldown,
        }
    }

    pub fn request(&mut self, target: usize, now: DateTime<Utc>) -> TransitionOutcome {
        if target >= self.len {
            return TransitionOutcome::Rejected(Rejection::OutOfBounds);
        }
        if target == self.active {
            return TransitionOutcome::Unchanged;
        }
        if self.is_transitioning(now) {
            return TransitionOutcome::Rejected(Rejection::CoolingDown);
        }
        let transition = Transition {
            from: self.active,
            to: target,
            direction: Direction::between(self.active, target),
        };
        self.active = target;
        self.last = Some(transition.direction);
        self.state = TransitionState::Transitioning { started_at: now };
        TransitionOutcome::Started(transition)
    }

    /// One wheel notch or swipe in `direction`.
    pub fn step(&mut self, direction: Direction, now: DateTime<Utc>) -> TransitionOutcome {
        let target = match direction {
            Direction::Forward => self.active + 1,
            Direction::Backward => match self.active.checked_sub(1) {
                Some(i) => i,
                None => return TransitionOutcome::Rejected(Rejection::OutOfBounds),
            },
        };
        self.request(target, now)
    }

    /// Indicator-dot click. Clicking the dot of the active section does nothing.
    pub fn select(&mut self, target: usize, now: DateTime<Utc>) -> TransitionOutcome {
        self.request(target, now)
    }

    /// Returns to `Idle` once the cooldown has elapsed. Returns whether the
    /// controller is idle afterwards.
    pub fn settle(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_transitioning(now) {
            self.state = TransitionState::Idle;
        }
        self.state == TransitionState::Idle
    }
}

/// Turns raw wheel and touch input into section steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInput {
    /// Summed wheel travel that makes one step.
    pub wheel_threshold: f64,
    pub swipe_threshold: f64,
    /// A pause longer than this between wheel events ends the gesture.
    pub wheel_gap: TimeDelta,
}

impl GestureInput {
    /// `start_y - end_y`: swiping up moves forward.
    pub fn swipe(&self, start_y: f64, end_y: f64) -> Option<Direction> {
        Self::classify(start_y - end_y, self.swipe_threshold)
    }

    fn classify(delta: f64, threshold: f64) -> Option<Direction> {
        if delta.abs() < threshold {
            return None;
        }
        Direction::of(delta)
    }
}

/// Wheel travel summed over one gesture. Trackpads and fine-grained wheels
/// report a stream of small deltas, so single events are never compared with
/// the threshold. A gesture yields at most one step; the inertia tail that
/// follows is swallowed until the wheel pauses or turns around.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelGesture {
    sum: f64,
    last: Option<DateTime<Utc>>,
    spent: bool,
}

impl WheelGesture {
    pub fn push(
        &mut self,
        input: &GestureInput,
        delta_y: f64,
        now: DateTime<Utc>,
    ) -> Option<Direction> {
        let direction = Direction::of(delta_y)?;
        self.begin_if_new(input, direction, now);
        if self.spent {
            return None;
        }
        self.sum += delta_y;
        let step = GestureInput::classify(self.sum, input.wheel_threshold)?;
        self.spent = true;
        Some(step)
    }

    /// Records wheel travel that scrolled a panel's own content. The rest of
    /// the gesture cannot step.
    pub fn absorb(&mut self, input: &GestureInput, delta_y: f64, now: DateTime<Utc>) {
        let Some(direction) = Direction::of(delta_y) else {
            return;
        };
        self.begin_if_new(input, direction, now);
        self.sum += delta_y;
        self.spent = true;
    }

    /// Whether the current gesture already produced its step (or scrolled a
    /// panel) and further events belong to it.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    fn begin_if_new(&mut self, input: &GestureInput, direction: Direction, now: DateTime<Utc>) {
        let paused = self.last.map_or(true, |last| now - last > input.wheel_gap);
        let reversed = Direction::of(self.sum).is_some_and(|d| d != direction);
        if paused || reversed {
            *self = Self::default();
        }
        self.last = Some(now);
    }
}

/// Scroll extent of a panel with its own overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overflow {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Sub-pixel slack for fractional scroll offsets at an edge.
const EDGE_SLACK: f64 = 1.0;

impl Overflow {
    /// Whether the panel still has content to reveal toward `direction`.
    /// Gestures go to the panel until it hits that edge.
    pub fn can_scroll(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => {
                self.scroll_top + self.client_height < self.scroll_height - EDGE_SLACK
            }
            Direction::Backward => self.scroll_top > EDGE_SLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    fn controller() -> TransitionController {
        TransitionController::new(5, TimeDelta::milliseconds(1000))
    }

    #[test]
    fn test_request_updates_immediately() {
        let mut c = controller();
        let outcome = c.request(2, at(0));
        assert_eq!(
            outcome,
            TransitionOutcome::Started(Transition {
                from: 0,
                to: 2,
                direction: Direction::Forward
            })
        );
        assert_eq!(c.active(), 2);
        assert_eq!(c.state(), TransitionState::Transitioning { started_at: at(0) });
    }

    #[test]
    fn test_cooldown_drops_requests() {
        let mut c = controller();
        assert!(c.request(1, at(0)).started().is_some());
        assert_eq!(
            c.request(3, at(500)),
            TransitionOutcome::Rejected(Rejection::CoolingDown)
        );
        assert_eq!(
            c.step(Direction::Forward, at(999)),
            TransitionOutcome::Rejected(Rejection::CoolingDown)
        );
        assert_eq!(c.active(), 1);

        // no queueing: the dropped request does not fire later
        assert!(!c.is_transitioning(at(1000)));
        assert_eq!(c.active(), 1);
        assert!(c.request(3, at(1000)).started().is_some());
        assert_eq!(c.active(), 3);
    }

    #[test]
    fn test_bounds() {
        let mut c = controller();
        assert_eq!(
            c.request(5, at(0)),
            TransitionOutcome::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(
            c.step(Direction::Backward, at(0)),
            TransitionOutcome::Rejected(Rejection::OutOfBounds)
        );
        let mut now = 0;
        for _ in 0..20 {
            now += 2000;
            c.step(Direction::Forward, at(now));
            assert!(c.active() < c.len());
        }
        assert_eq!(c.active(), 4);
        assert_eq!(
            c.step(Direction::Forward, at(now + 5000)),
            TransitionOutcome::Rejected(Rejection::OutOfBounds)
        );
    }

    #[test]
    fn test_select_active_is_noop() {
        let mut c = controller();
        c.request(2, at(0));
        c.settle(at(5000));
        assert_eq!(c.state(), TransitionState::Idle);

        assert_eq!(c.select(2, at(6000)), TransitionOutcome::Unchanged);
        assert_eq!(c.state(), TransitionState::Idle);
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn test_settle_waits_for_cooldown() {
        let mut c = controller();
        c.request(1, at(0));
        assert!(!c.settle(at(400)));
        assert!(matches!(c.state(), TransitionState::Transitioning { .. }));
        assert!(c.settle(at(1000)));
        assert_eq!(c.state(), TransitionState::Idle);
    }

    #[test]
    fn test_direction_tracking() {
        let mut c = controller();
        assert_eq!(c.last_direction(), Direction::Forward);
        c.request(3, at(0));
        let back = c.step(Direction::Backward, at(2000)).started().unwrap();
        assert_eq!(back.direction, Direction::Backward);
        assert_eq!(back.to, 2);
        assert_eq!(c.last_direction(), Direction::Backward);
    }

    fn gestures() -> GestureInput {
        GestureInput {
            wheel_threshold: 30.0,
            swipe_threshold: 50.0,
            wheel_gap: TimeDelta::milliseconds(150),
        }
    }

    #[test]
    fn test_swipe() {
        let input = gestures();
        assert_eq!(input.swipe(600.0, 400.0), Some(Direction::Forward));
        assert_eq!(input.swipe(400.0, 600.0), Some(Direction::Backward));
        assert_eq!(input.swipe(400.0, 420.0), None);
        assert_eq!(input.swipe(f64::NAN, 0.0), None);
    }

    #[test]
    fn test_wheel_notch() {
        let input = gestures();
        let mut wheel = WheelGesture::default();
        assert_eq!(wheel.push(&input, 120.0, at(0)), Some(Direction::Forward));
        assert!(wheel.is_spent());
        // next notch after a pause is a new gesture
        assert_eq!(wheel.push(&input, -100.0, at(400)), Some(Direction::Backward));
        assert_eq!(wheel.push(&input, 0.0, at(800)), None);
        assert_eq!(wheel.push(&input, f64::NAN, at(800)), None);
    }

    #[test]
    fn test_trackpad_deltas_add_up() {
        let input = gestures();
        let mut wheel = WheelGesture::default();
        // 320px of travel in 8px events, one every 10ms
        let steps: Vec<_> = (0..40)
            .filter_map(|i| wheel.push(&input, 8.0, at(i * 10)))
            .collect();
        assert_eq!(steps, vec![Direction::Forward]);

        // the step fires once the sum crosses the threshold
        let mut wheel = WheelGesture::default();
        let fired: Vec<_> = (0..5).map(|i| wheel.push(&input, 8.0, at(i * 10))).collect();
        assert_eq!(fired, vec![None, None, None, Some(Direction::Forward), None]);
    }

    #[test]
    fn test_wheel_gesture_boundaries() {
        let input = gestures();
        let mut wheel = WheelGesture::default();
        assert_eq!(wheel.push(&input, 20.0, at(0)), None);
        // the pause drops the partial sum
        assert_eq!(wheel.push(&input, 20.0, at(200)), None);
        assert_eq!(wheel.push(&input, 20.0, at(210)), Some(Direction::Forward));
        // inertia tail keeps the gesture alive
        assert_eq!(wheel.push(&input, 40.0, at(300)), None);
        assert_eq!(wheel.push(&input, 40.0, at(400)), None);
        // turning around starts over at once
        assert_eq!(wheel.push(&input, -35.0, at(410)), Some(Direction::Backward));
    }

    #[test]
    fn test_absorbed_gesture_never_steps() {
        let input = gestures();
        let mut wheel = WheelGesture::default();
        wheel.absorb(&input, 50.0, at(0));
        assert!(wheel.is_spent());
        assert_eq!(wheel.push(&input, 50.0, at(20)), None);
        assert_eq!(wheel.push(&input, 50.0, at(300)), Some(Direction::Forward));
    }

    #[test]
    fn test_overflow_edges() {
        let middle = Overflow {
            scroll_top: 200.0,
            scroll_height: 1200.0,
            client_height: 600.0,
        };
        assert!(middle.can_scroll(Direction::Forward));
        assert!(middle.can_scroll(Direction::Backward));

        let top = Overflow {
            scroll_top: 0.0,
            ..middle
        };
        assert!(top.can_scroll(Direction::Forward));
        assert!(!top.can_scroll(Direction::Backward));

        let bottom = Overflow {
            scroll_top: 599.5,
            ..middle
        };
        assert!(!bottom.can_scroll(Direction::Forward));
        assert!(bottom.can_scroll(Direction::Backward));

        let fits = Overflow {
            scroll_top: 0.0,
            scroll_height: 400.0,
            client_height: 400.0,
        };
        assert!(!fits.can_scroll(Direction::Forward));
        assert!(!fits.can_scroll(Direction::Backward));
    }

    #[test]
    fn test_direction_of() {
        assert_eq!(Direction::of(3.0), Some(Direction::Forward));
        assert_eq!(Direction::of(-0.5), Some(Direction::Backward));
        assert_eq!(Direction::of(0.0), None);
        assert_eq!(Direction::of(f64::INFINITY), None);
    }
}
