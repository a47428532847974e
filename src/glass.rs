//! Glass-morphism panel styling. Purely visual: every combination of options
//! maps to a fixed set of utility classes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Default,
    Purple,
    Blue,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlassStyle {
    pub intensity: Intensity,
    pub tint: Tint,
    pub border_glow: bool,
    pub hover: bool,
}

impl Default for GlassStyle {
    fn default() -> Self {
        Self {
            intensity: Intensity::default(),
            tint: Tint::default(),
            border_glow: true,
            hover: true,
        }
    }
}

impl Intensity {
    fn background(self) -> &'static str {
        match self {
            Intensity::Low => "bg-white/10",
            Intensity::Medium => "bg-white/15",
            Intensity::High => "bg-white/20",
        }
    }

    fn blur(self) -> &'static str {
        match self {
            Intensity::Low => "backdrop-blur-[12px]",
            Intensity::Medium => "backdrop-blur-[15px]",
            Intensity::High => "backdrop-blur-[20px]",
        }
    }
}

impl Tint {
    fn border(self, glow: bool) -> &'static str {
        match (self, glow) {
            (Tint::Default, true) => "border border-white/30",
            (Tint::Default, false) => "border border-white/10",
            (Tint::Purple, true) => "border border-purple-500/30 animate-subtle-glow",
            (Tint::Purple, false) => "border border-purple-500/10",
            (Tint::Blue, true) => "border border-blue-500/30 animate-subtle-glow",
            (Tint::Blue, false) => "border border-blue-500/10",
            (Tint::Green, true) => "border border-emerald-500/30 animate-subtle-glow",
            (Tint::Green, false) => "border border-emerald-500/10",
        }
    }

    fn shadow(self) -> &'static str {
        match self {
            Tint::Default => "shadow-[0_8px_32px_rgba(0,0,0,0.12)]",
            Tint::Purple => "shadow-[0_8px_24px_rgba(139,92,246,0.18)]",
            Tint::Blue => "shadow-[0_8px_24px_rgba(59,130,246,0.18)]",
            Tint::Green => "shadow-[0_8px_24px_rgba(16,185,129,0.18)]",
        }
    }
}

const HOVER: &str = "transition-all duration-300 ease-out hover:shadow-[0_16px_64px_rgba(139,92,246,0.15)] hover:scale-[1.005]";

impl GlassStyle {
    pub fn new(intensity: Intensity, tint: Tint) -> Self {
        Self {
            intensity,
            tint,
            ..Self::default()
        }
    }

    pub fn classes(&self) -> String {
        let mut parts = vec![
            "glass-card rounded-3xl relative overflow-hidden",
            self.intensity.background(),
            self.intensity.blur(),
            self.tint.border(self.border_glow),
            self.tint.shadow(),
        ];
        if self.hover {
            parts.push(HOVER);
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        let style = GlassStyle::new(Intensity::Low, Tint::Purple);
        let classes = style.classes();
        assert!(classes.starts_with("glass-card"));
        assert!(classes.contains("bg-white/10"));
        assert!(classes.contains("animate-subtle-glow"));
        assert!(classes.contains("hover:scale"));

        let flat = GlassStyle {
            border_glow: false,
            hover: false,
            ..GlassStyle::new(Intensity::High, Tint::Default)
        };
        let classes = flat.classes();
        assert!(classes.contains("border-white/10"));
        assert!(!classes.contains("hover:"));
        assert!(!classes.contains("animate-subtle-glow"));
    }
}
