//! Player input while a round is running

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Quit,
    /// Reveal the current game and move on to a random one
    Skip,
    /// Reveal the current game and switch to the given app id
    Load(u64),
    /// `:load` without a usable app id
    InvalidLoad(String),
    Guess(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "" => Command::Empty,
        ":quit" => Command::Quit,
        ":skip" => Command::Skip,
        _ => match line.strip_prefix(":load") {
            // ":loader" is a guess, not a command
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                let arg = rest.trim();
                arg.parse()
                    .map(Command::Load)
                    .unwrap_or_else(|_| Command::InvalidLoad(arg.to_string()))
            }
            _ => Command::Guess(line.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  "), Command::Empty);
        assert_eq!(parse_command(":quit"), Command::Quit);
        assert_eq!(parse_command(" :skip "), Command::Skip);
    }

    #[test]
    fn load_takes_an_app_id() {
        assert_eq!(parse_command(":load 620"), Command::Load(620));
        assert_eq!(parse_command(":load   440  "), Command::Load(440));
        assert_eq!(parse_command(":load"), Command::InvalidLoad(String::new()));
        assert_eq!(parse_command(":load portal"), Command::InvalidLoad("portal".to_string()));
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(parse_command(" Portal 2 "), Command::Guess("Portal 2".to_string()));
        assert_eq!(parse_command(":loader"), Command::Guess(":loader".to_string()));
    }
}
