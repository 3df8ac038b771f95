use panel_core::Panel;

/// One line of console input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fire(Panel),
    SetQuery(String),
    SetSkill(String),
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses a single input line.
///
/// Field setters take everything after the command word; a bare `q` or
/// `skill` clears the field.
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    match word {
        "profile" => Command::Fire(Panel::Profile),
        "search" => Command::Fire(Panel::Search),
        "projects" => Command::Fire(Panel::Projects),
        "top" => Command::Fire(Panel::TopSkills),
        "q" => Command::SetQuery(rest.to_string()),
        "skill" => Command::SetSkill(rest.to_string()),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

pub const HELP_TEXT: &str = "\
commands:
  profile       load the profile panel
  search        run a search with the current q value
  projects      load projects, filtered by the current skill value
  top           load the top skills panel
  q [text]      set the search query (bare q clears it)
  skill [text]  set the project skill filter (bare skill clears it)
  show          print all panels
  help          print this text
  quit          leave";

#[cfg(test)]
mod tests {
    use panel_core::Panel;

    use super::{parse, Command};

    #[test]
    fn trigger_words_fire_panels() {
        assert_eq!(parse("profile"), Command::Fire(Panel::Profile));
        assert_eq!(parse("search"), Command::Fire(Panel::Search));
        assert_eq!(parse("projects"), Command::Fire(Panel::Projects));
        assert_eq!(parse("  top  "), Command::Fire(Panel::TopSkills));
    }

    #[test]
    fn field_setters_take_the_rest_of_the_line() {
        assert_eq!(parse("q c++ dev"), Command::SetQuery("c++ dev".to_string()));
        assert_eq!(
            parse("skill   data engineering"),
            Command::SetSkill("data engineering".to_string())
        );
    }

    #[test]
    fn bare_field_words_clear_the_field() {
        assert_eq!(parse("q"), Command::SetQuery(String::new()));
        assert_eq!(parse("skill"), Command::SetSkill(String::new()));
    }

    #[test]
    fn control_words_parse() {
        assert_eq!(parse("show"), Command::Show);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn unknown_input_is_reported_back() {
        assert_eq!(
            parse("frobnicate now"),
            Command::Unknown("frobnicate now".to_string())
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse(""), Command::Empty);
        assert_eq!(parse("   "), Command::Empty);
    }
}
