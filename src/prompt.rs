use std::collections::VecDeque;

use crate::{data::PROFILE, sections::Section};

static HISTORY_SIZE: usize = 100;

const HELP_TEXT: &str = r#"Use this prompt to move around the page.
    cd      jump to a section (cd skills, cd .., cd ~)
    clear   clear the prompt output
    contact jump to the contact form
    help    show this message
    ls      list sections
    whoami  print who runs this site
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRes {
    EmptyErr,
    Err(String),
    Jump(Section),
    Output(String),
    Nothing,
}

enum Command {
    Help,
    Ls,
    Cd,
    WhoAmI,
    Clear,
    Contact,
    Sudo,
    Unknown,
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        match value {
            "help" => Self::Help,
            "ls" => Self::Ls,
            "cd" => Self::Cd,
            "whoami" => Self::WhoAmI,
            "clear" => Self::Clear,
            "contact" => Self::Contact,
            "sudo" => Self::Sudo,
            _ => Self::Unknown,
        }
    }
}

/// Parses one prompt line. `current` is the section shown when the line was
/// entered; relative jumps are resolved against it.
pub fn run(line: &str, current: Section) -> PromptRes {
    let mut parts = line.split_whitespace();
    let Some(cmd_text) = parts.next() else {
        return PromptRes::EmptyErr;
    };
    let args = parts.collect::<Vec<_>>();
    match Command::from(cmd_text) {
        Command::Help => PromptRes::Output(HELP_TEXT.to_string()),
        Command::Ls => PromptRes::Output(
            Section::ALL
                .iter()
                .map(|s| s.slug())
                .collect::<Vec<_>>()
                .join("  "),
        ),
        Command::Cd => cd(&args, current),
        Command::WhoAmI => {
            if args.is_empty() {
                PromptRes::Output(format!("{} - {}", PROFILE.name, PROFILE.title))
            } else {
                PromptRes::Err("usage: whoami".to_string())
            }
        }
        Command::Clear => PromptRes::Nothing,
        Command::Contact => PromptRes::Jump(Section::Contact),
        Command::Sudo => PromptRes::Err(format!(
            "user is not in the sudoers file. This incident will be reported to {}.",
            PROFILE.name
        )),
        Command::Unknown => PromptRes::Err(format!("command not found: {}", cmd_text)),
    }
}

fn cd(args: &[&str], current: Section) -> PromptRes {
    match args {
        [] | ["~"] | ["/"] => PromptRes::Jump(Section::Hero),
        [".."] => PromptRes::Jump(current.prev().unwrap_or(Section::Hero)),
        ["."] => PromptRes::Nothing,
        [target] => match Section::from_slug(target) {
            Some(section) => PromptRes::Jump(section),
            None => PromptRes::Err(format!("cd: no such section: {}", target)),
        },
        _ => PromptRes::Err("cd: too many arguments".to_string()),
    }
}

/// Bounded command history with up/down cycling.
#[derive(Debug, Default)]
pub struct History {
    lines: VecDeque<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        let line = line.trim();
        if line.is_empty() || self.lines.back().is_some_and(|l| l == line) {
            return;
        }
        if self.lines.len() == HISTORY_SIZE {
            self.lines.pop_front();
        }
        self.lines.push_back(line.to_string());
    }

    pub fn prev(&mut self) -> Option<&str> {
        let index = match self.cursor {
            None => self.lines.len().checked_sub(1)?,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(index);
        self.lines.get(index).map(String::as_str)
    }

    /// Moves towards the newest entry; `None` once past it.
    pub fn next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.lines.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(index);
        self.lines.get(index).map(String::as_str)
    }

    pub fn reset(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd() {
        assert_eq!(run("cd", Section::Skills), PromptRes::Jump(Section::Hero));
        assert_eq!(run("cd ~", Section::Skills), PromptRes::Jump(Section::Hero));
        assert_eq!(run("cd ..", Section::Skills), PromptRes::Jump(Section::About));
        assert_eq!(run("cd ..", Section::Hero), PromptRes::Jump(Section::Hero));
        assert_eq!(
            run("cd Projects", Section::Hero),
            PromptRes::Jump(Section::Projects)
        );
        assert_eq!(
            run("cd #contact", Section::Hero),
            PromptRes::Jump(Section::Contact)
        );
        assert_eq!(
            run("cd blog", Section::Hero),
            PromptRes::Err("cd: no such section: blog".to_string())
        );
        assert!(matches!(run("cd a b", Section::Hero), PromptRes::Err(_)));
    }

    #[test]
    fn test_commands() {
        assert_eq!(run("   ", Section::Hero), PromptRes::EmptyErr);
        assert_eq!(run("clear", Section::Hero), PromptRes::Nothing);
        assert_eq!(
            run("contact", Section::About),
            PromptRes::Jump(Section::Contact)
        );
        assert_eq!(
            run("rm -rf /", Section::Hero),
            PromptRes::Err("command not found: rm".to_string())
        );
        match run("ls", Section::Hero) {
            PromptRes::Output(s) => {
                for section in Section::ALL {
                    assert!(s.contains(section.slug()));
                }
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(run("whoami", Section::Hero), PromptRes::Output(s) if s.contains(PROFILE.name)));
        assert!(matches!(run("sudo ls", Section::Hero), PromptRes::Err(_)));
    }

    #[test]
    fn test_history() {
        let mut h = History::default();
        assert_eq!(h.prev(), None);
        h.push("ls");
        h.push("cd skills");
        h.push("cd skills");
        h.push("  ");

        assert_eq!(h.prev(), Some("cd skills"));
        assert_eq!(h.prev(), Some("ls"));
        assert_eq!(h.prev(), Some("ls"));
        assert_eq!(h.next(), Some("cd skills"));
        assert_eq!(h.next(), None);
        assert_eq!(h.next(), None);

        for i in 0..HISTORY_SIZE + 5 {
            h.push(&format!("cmd {}", i));
        }
        assert_eq!(h.lines.len(), HISTORY_SIZE);
        assert_eq!(h.lines.front().map(String::as_str), Some("cmd 5"));
    }
}
