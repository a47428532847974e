use crate::{
    scroll::{interpolate, Spring},
    transition::Direction,
};

/// Slide distance in pixels for the slide variants.
pub const SLIDE_DISTANCE: f64 = 50.0;

/// Distance used for panels entering or leaving the glass card.
pub const PANEL_DISTANCE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Hidden,
    Visible,
    Exit,
}

/// A single animation target: what a variant resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub blur: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        blur: 0.0,
    };

    fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn to_style(&self) -> String {
        let mut style = format!(
            "opacity: {:.3}; transform: translate3d({:.1}px, {:.1}px, 0) scale({:.3});",
            self.opacity, self.x, self.y, self.scale
        );
        if self.blur > 0.0 {
            style.push_str(&format!(" filter: blur({:.1}px);", self.blur));
        }
        style
    }
}

impl Animation {
    pub fn pose(self, variant: Variant) -> Pose {
        if variant == Variant::Visible {
            return Pose::VISIBLE;
        }
        let hidden = Pose::hidden();
        match self {
            Animation::Fade => hidden,
            Animation::SlideUp => Pose {
                y: SLIDE_DISTANCE,
                ..hidden
            },
            Animation::SlideDown => Pose {
                y: -SLIDE_DISTANCE,
                ..hidden
            },
            Animation::SlideLeft => Pose {
                x: SLIDE_DISTANCE,
                ..hidden
            },
            Animation::SlideRight => Pose {
                x: -SLIDE_DISTANCE,
                ..hidden
            },
            Animation::Scale => Pose {
                scale: 0.8,
                ..hidden
            },
        }
    }

    /// Like [`Animation::pose`], but everything is visible when the user asked
    /// for reduced motion.
    pub fn pose_for(self, variant: Variant, reduced_motion: bool) -> Pose {
        if reduced_motion {
            Pose::VISIBLE
        } else {
            self.pose(variant)
        }
    }
}

/// Which variant a glass-card panel is in, keyed on the active panel.
pub fn panel_variant(index: usize, active: usize) -> Variant {
    match index.cmp(&active) {
        std::cmp::Ordering::Less => Variant::Exit,
        std::cmp::Ordering::Equal => Variant::Visible,
        std::cmp::Ordering::Greater => Variant::Hidden,
    }
}

/// Pose of a glass-card panel. Panels already passed leave upwards, panels not
/// yet reached wait below; the motion is mirrored when travelling backwards.
pub fn panel_pose(index: usize, active: usize, direction: Direction, reduced_motion: bool) -> Pose {
    let variant = panel_variant(index, active);
    if variant == Variant::Visible {
        return Pose::VISIBLE;
    }
    if reduced_motion {
        return Pose::hidden();
    }
    let offset = match (variant, direction) {
        (Variant::Exit, Direction::Forward) => -PANEL_DISTANCE,
        (Variant::Exit, Direction::Backward) => -PANEL_DISTANCE / 2.0,
        (_, Direction::Forward) => PANEL_DISTANCE / 2.0,
        (_, Direction::Backward) => PANEL_DISTANCE,
    };
    Pose {
        y: offset,
        scale: 0.96,
        blur: 8.0,
        ..Pose::hidden()
    }
}

const HERO_RANGE: (f64, f64) = (0.0, 0.3);

/// The hero fades, blurs and drifts up over the first part of the page.
/// With reduced motion only the fade remains.
pub fn hero_pose(progress: f64, reduced_motion: bool) -> Pose {
    let opacity = interpolate(progress, HERO_RANGE, (1.0, 0.0));
    if reduced_motion {
        return Pose {
            opacity,
            ..Pose::VISIBLE
        };
    }
    Pose {
        opacity,
        x: 0.0,
        y: interpolate(progress, HERO_RANGE, (0.0, -100.0)),
        scale: interpolate(progress, HERO_RANGE, (1.0, 0.95)),
        blur: interpolate(progress, HERO_RANGE, (0.0, 20.0)),
    }
}

/// Spring-smoothed entrance of the glass card, driven by scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardReveal {
    opacity: Spring,
    scale: Spring,
    y: Spring,
    blur: f64,
}

impl CardReveal {
    pub fn new(opacity: Spring) -> Self {
        Self {
            opacity,
            scale: Spring::new(70.0, 15.0).with_value(0.92),
            y: Spring::new(80.0, 18.0).with_value(PANEL_DISTANCE),
            blur: 15.0,
        }
    }

    fn targets(progress: f64) -> (f64, f64, f64) {
        (
            interpolate(progress, (0.15, 0.35), (0.0, 1.0)),
            interpolate(progress, (0.18, 0.4), (0.92, 1.0)),
            interpolate(progress, (0.18, 0.35), (PANEL_DISTANCE, 0.0)),
        )
    }

    pub fn advance(&mut self, progress: f64, dt_secs: f64) -> Pose {
        let (opacity, scale, y) = Self::targets(progress);
        self.opacity.step(opacity, dt_secs);
        self.scale.step(scale, dt_secs);
        self.y.step(y, dt_secs);
        self.blur = interpolate(progress, (0.18, 0.35), (15.0, 0.0));
        self.pose()
    }

    /// Jumps straight to the resting pose for `progress`.
    pub fn snap(&mut self, progress: f64) -> Pose {
        let (opacity, scale, y) = Self::targets(progress);
        self.opacity = self.opacity.with_value(opacity);
        self.scale = self.scale.with_value(scale);
        self.y = self.y.with_value(y);
        self.blur = 0.0;
        self.pose()
    }

    pub fn pose(&self) -> Pose {
        Pose {
            opacity: self.opacity.value().clamp(0.0, 1.0),
            x: 0.0,
            y: self.y.value(),
            scale: self.scale.value(),
            blur: self.blur,
        }
    }

    /// The card takes over wheel and touch input once it is mostly visible.
    pub fn is_revealed(&self) -> bool {
        self.opacity.value() > 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_is_identity() {
        for a in [
            Animation::Fade,
            Animation::SlideUp,
            Animation::SlideDown,
            Animation::SlideLeft,
            Animation::SlideRight,
            Animation::Scale,
        ] {
            assert_eq!(a.pose(Variant::Visible), Pose::VISIBLE);
            assert_eq!(a.pose(Variant::Hidden).opacity, 0.0);
            assert_eq!(a.pose_for(Variant::Hidden, true), Pose::VISIBLE);
        }
        assert_eq!(Animation::SlideUp.pose(Variant::Hidden).y, SLIDE_DISTANCE);
        assert_eq!(Animation::SlideRight.pose(Variant::Exit).x, -SLIDE_DISTANCE);
        assert_eq!(Animation::Scale.pose(Variant::Hidden).scale, 0.8);
    }

    #[test]
    fn test_panel_variants() {
        assert_eq!(panel_variant(0, 2), Variant::Exit);
        assert_eq!(panel_variant(2, 2), Variant::Visible);
        assert_eq!(panel_variant(3, 2), Variant::Hidden);

        let leaving = panel_pose(1, 2, Direction::Forward, false);
        let waiting = panel_pose(3, 2, Direction::Forward, false);
        assert!(leaving.y < 0.0);
        assert!(waiting.y > 0.0);
        assert_eq!(leaving.opacity, 0.0);
        assert_eq!(panel_pose(2, 2, Direction::Backward, false), Pose::VISIBLE);

        let reduced = panel_pose(3, 2, Direction::Forward, true);
        assert_eq!(reduced.y, 0.0);
        assert_eq!(reduced.opacity, 0.0);
    }

    #[test]
    fn test_style_rendering() {
        assert_eq!(
            Pose::VISIBLE.to_style(),
            "opacity: 1.000; transform: translate3d(0.0px, 0.0px, 0) scale(1.000);"
        );
        let blurred = panel_pose(0, 1, Direction::Forward, false).to_style();
        assert!(blurred.ends_with("filter: blur(8.0px);"));
    }

    #[test]
    fn test_hero_fades_out() {
        assert_eq!(hero_pose(0.0, false), Pose::VISIBLE);
        let gone = hero_pose(0.5, false);
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.y, -100.0);
        assert_eq!(gone.blur, 20.0);
        let reduced = hero_pose(0.15, true);
        assert!((reduced.opacity - 0.5).abs() < 1e-9);
        assert_eq!(reduced.blur, 0.0);
    }

    #[test]
    fn test_card_reveal_settles() {
        let mut card = CardReveal::new(Spring::new(100.0, 20.0));
        assert!(!card.is_revealed());
        for _ in 0..300 {
            card.advance(0.5, 1.0 / 60.0);
        }
        let pose = card.pose();
        assert!((pose.opacity - 1.0).abs() < 1e-2);
        assert!(pose.y.abs() < 0.5);
        assert_eq!(pose.blur, 0.0);
        assert!(card.is_revealed());

        let hidden = card.snap(0.0);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y, PANEL_DISTANCE);
        assert!(!card.is_revealed());
    }
}
