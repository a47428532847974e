//! Timing of the hero's terminal animation. Everything here is a pure function
//! of the time elapsed since the hero was mounted, so a single interval can
//! drive the whole sequence.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Success,
}

impl LineKind {
    pub fn class(self) -> &'static str {
        match self {
            LineKind::Command => "text-cyan-400",
            LineKind::Output => "text-gray-300",
            LineKind::Success => "text-green-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    pub text: &'static str,
    pub kind: LineKind,
    /// Milliseconds after mount at which the line appears.
    pub delay_ms: u32,
}

const fn line(text: &'static str, kind: LineKind, delay_ms: u32) -> ScriptLine {
    ScriptLine {
        text,
        kind,
        delay_ms,
    }
}

pub static HERO_SCRIPT: &[ScriptLine] = &[
    line("~/portfolio$ whoami", LineKind::Command, 0),
    line("anusara_sugeeshwara", LineKind::Output, 800),
    line("~/portfolio$ cat /etc/skills", LineKind::Command, 1600),
    line("✓ Data Science Expert", LineKind::Success, 2200),
    line("✓ Machine Learning Engineer", LineKind::Success, 2600),
    line("✓ AI Specialist", LineKind::Success, 3000),
    line("~/portfolio$ python hack_insights.py", LineKind::Command, 3800),
    line("[INFO] Connecting to data streams...", LineKind::Output, 4400),
    line("[SUCCESS] 🚀 Insights extracted!", LineKind::Success, 5200),
    line("~/portfolio$ sudo ./deploy_awesome", LineKind::Command, 6000),
    line("Deployment successful! 🎯", LineKind::Success, 6600),
];

/// Lines of `script` that have appeared after `elapsed_ms`. The script must be
/// ordered by delay.
pub fn visible_lines(script: &[ScriptLine], elapsed_ms: u32) -> &[ScriptLine] {
    let shown = script.partition_point(|l| l.delay_ms <= elapsed_ms);
    &script[..shown]
}

pub fn is_complete(script: &[ScriptLine], elapsed_ms: u32) -> bool {
    visible_lines(script, elapsed_ms).len() == script.len()
}

/// The part of `text` typed after `elapsed_ms` at one character per `speed_ms`.
/// Always cut on a char boundary.
pub fn typed_prefix(text: &str, elapsed_ms: u32, speed_ms: u32) -> &str {
    let count = (elapsed_ms / speed_ms.max(1)) as usize;
    match text.char_indices().nth(count) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

fn typing_time(text: &str, speed_ms: u32) -> u32 {
    text.chars().count() as u32 * speed_ms.max(1)
}

/// A line typed out character by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedLine {
    pub text: &'static str,
    pub speed_ms: u32,
}

/// Pause between the end of one typed line and the start of the next.
pub const STEP_GAP_MS: u32 = 200;

/// Delay before the first typed line starts.
pub const FIRST_STEP_MS: u32 = 100;

pub static HERO_TITLE: &[TypedLine] = &[
    TypedLine {
        text: "SYSTEM_ONLINE",
        speed_ms: 50,
    },
    TypedLine {
        text: "> Anusara Sugeeshwara",
        speed_ms: 20,
    },
    TypedLine {
        text: "Data Science Enthusiast",
        speed_ms: 12,
    },
    TypedLine {
        text: "~/specialties$",
        speed_ms: 10,
    },
    TypedLine {
        text: "Extracting intelligence from chaos. Converting raw data into powerful insights through advanced ML algorithms.",
        speed_ms: 12,
    },
];

/// Progress of a chain of typed lines where each starts once the previous one
/// finished. Returns the typed prefix of every line that has started, and
/// whether the last one is done.
pub fn typed_sequence(steps: &[TypedLine], elapsed_ms: u32) -> (Vec<&'static str>, bool) {
    let mut shown = Vec::with_capacity(steps.len());
    let mut start = FIRST_STEP_MS;
    for step in steps {
        if elapsed_ms < start {
            return (shown, false);
        }
        let local = elapsed_ms - start;
        shown.push(typed_prefix(step.text, local, step.speed_ms));
        start += typing_time(step.text, step.speed_ms) + STEP_GAP_MS;
    }
    let done = elapsed_ms + STEP_GAP_MS >= start;
    (shown, done)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_lines() {
        assert_eq!(visible_lines(HERO_SCRIPT, 0).len(), 1);
        assert_eq!(visible_lines(HERO_SCRIPT, 799).len(), 1);
        assert_eq!(visible_lines(HERO_SCRIPT, 800).len(), 2);
        assert_eq!(visible_lines(HERO_SCRIPT, 3000).len(), 6);
        assert!(!is_complete(HERO_SCRIPT, 6599));
        assert!(is_complete(HERO_SCRIPT, 6600));
        assert!(HERO_SCRIPT.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms));
    }

    #[test]
    fn test_typed_prefix_is_char_safe() {
        assert_eq!(typed_prefix("hello", 0, 50), "");
        assert_eq!(typed_prefix("hello", 149, 50), "he");
        assert_eq!(typed_prefix("hello", 150, 50), "hel");
        assert_eq!(typed_prefix("hello", 10_000, 50), "hello");
        assert_eq!(typed_prefix("✓ ok", 10, 10), "✓");
        assert_eq!(typed_prefix("🚀🎯", 20, 10), "🚀🎯");
        assert_eq!(typed_prefix("abc", 5, 0), "abc");
    }

    #[test]
    fn test_typed_sequence() {
        let steps = [
            TypedLine {
                text: "ab",
                speed_ms: 10,
            },
            TypedLine {
                text: "cd",
                speed_ms: 10,
            },
        ];
        assert_eq!(typed_sequence(&steps, 0), (vec![], false));
        assert_eq!(typed_sequence(&steps, FIRST_STEP_MS + 10), (vec!["a"], false));
        // first line done at 120, second starts after the gap at 320
        assert_eq!(typed_sequence(&steps, 319), (vec!["ab"], false));
        assert_eq!(typed_sequence(&steps, 330), (vec!["ab", "c"], false));
        assert_eq!(typed_sequence(&steps, 340), (vec!["ab", "cd"], true));
    }
}
