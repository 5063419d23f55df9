#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// What to say: the base message list and how many times to go through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub messages: Vec<String>,
    pub repeat: usize,
}

impl Script {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() || self.repeat == 0
    }
}

/// File messages first, then command-line ones. An explicit command-line
/// repeat wins over the file's; with neither, the list is said once.
pub fn resolve_script(
    file: Option<&TomlConfig>,
    cli_messages: &[String],
    cli_repeat: Option<usize>,
) -> Script {
    let mut messages: Vec<String> = file.map(|f| f.messages().to_vec()).unwrap_or_default();
    messages.extend_from_slice(cli_messages);

    let repeat = cli_repeat
        .or_else(|| file.and_then(|f| f.say.repeat))
        .unwrap_or(1);

    Script { messages, repeat }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_only() {
        let script = resolve_script(None, &strings(&["a", "b"]), Some(2));
        assert_eq!(script.messages, ["a", "b"]);
        assert_eq!(script.repeat, 2);
    }

    #[test]
    fn test_defaults_to_once() {
        let script = resolve_script(None, &strings(&["a"]), None);
        assert_eq!(script.repeat, 1);
    }

    #[test]
    fn test_file_messages_come_first() {
        let file = TomlConfig::from_toml_str("[say]\nmessages = [\"f\"]\nrepeat = 2\n").unwrap();
        let script = resolve_script(Some(&file), &strings(&["c"]), None);
        assert_eq!(script.messages, ["f", "c"]);
        assert_eq!(script.repeat, 2);
    }

    #[test]
    fn test_explicit_cli_repeat_of_one_overrides_file() {
        let file = TomlConfig::from_toml_str("[say]\nmessages = [\"f\"]\nrepeat = 3\n").unwrap();
        let script = resolve_script(Some(&file), &[], Some(1));
        assert_eq!(script.repeat, 1);
    }

    #[test]
    fn test_huge_repeat_is_not_expanded() {
        let script = resolve_script(None, &strings(&["x"]), Some(usize::MAX));
        assert_eq!(script.messages.len(), 1);
        assert_eq!(script.repeat, usize::MAX);
    }

    #[test]
    fn test_nothing_to_say() {
        assert!(resolve_script(None, &[], Some(usize::MAX)).is_empty());
    }
}
