use crate::app::render::render_page;
use crate::core::controller::PageController;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Type to search by name, city, degree, specialty, language, experience or phone.
  ::text   search for text starting with ':'
  :reset   clear the search
  :more    load more advocates
  :help    show this help
  :quit    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Reset,
    More,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// 不以 `:` 開頭的整行都是新的搜尋字串，空行即清空；`::` 開頭代表搜尋字面上的 `:`
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(literal) = line.strip_prefix("::") {
            return Command::Search(format!(":{}", literal));
        }
        match line.strip_prefix(':') {
            None => Command::Search(line.to_string()),
            Some(cmd) => match cmd.trim() {
                "reset" | "r" => Command::Reset,
                "more" | "m" => Command::More,
                "help" | "h" | "?" => Command::Help,
                "quit" | "q" => Command::Quit,
                other => Command::Unknown(other.to_string()),
            },
        }
    }
}

/// Line-oriented directory session. Every command is applied to the
/// controller and the page is re-rendered right away, without debouncing.
pub struct Session<W: Write> {
    controller: PageController,
    format: OutputFormat,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(controller: PageController, format: OutputFormat, output: W) -> Self {
        Self {
            controller,
            format,
            output,
        }
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn into_parts(self) -> (PageController, W) {
        (self.controller, self.output)
    }

    fn render(&mut self) -> Result<()> {
        let page = render_page(&self.controller, self.format)?;
        writeln!(self.output, "{}", page)?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns `false` when the session should end.
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        tracing::debug!(?command, "session command");
        match command {
            Command::Search(query) => self.controller.set_query(query),
            Command::Reset => self.controller.reset_query(),
            Command::More => {
                if !self.controller.load_more() {
                    writeln!(self.output, "No more advocates to load")?;
                    return Ok(true);
                }
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Unknown(cmd) => {
                writeln!(self.output, "Unknown command ':{}'\n{}", cmd, HELP)?;
                return Ok(true);
            }
        }
        self.render()?;
        Ok(true)
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.render()?;
        writeln!(self.output, "{}", HELP)?;

        for line in input.lines() {
            let line = line?;
            if !self.handle(Command::parse(&line))? {
                break;
            }
        }

        tracing::debug!("Session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AdvocateRow, TextOrList};

    fn jane() -> AdvocateRow {
        AdvocateRow {
            id: "1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            city: Some("Boston".into()),
            degree: None,
            specialties: Some(TextOrList::List(vec!["CBT".into()])),
            languages: None,
            years_of_experience: None,
            phone_number: None,
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("bos"), Command::Search("bos".into()));
        assert_eq!(Command::parse(""), Command::Search(String::new()));
        assert_eq!(Command::parse(":reset"), Command::Reset);
        assert_eq!(Command::parse(":more\r\n"), Command::More);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":zzz"), Command::Unknown("zzz".into()));
    }

    #[test]
    fn test_double_colon_searches_literal_colon() {
        assert_eq!(Command::parse("::30"), Command::Search(":30".into()));
        assert_eq!(Command::parse("::reset"), Command::Search(":reset".into()));
        assert_eq!(Command::parse("::"), Command::Search(":".into()));
    }

    #[test]
    fn test_session_search_and_reset() {
        let mut controller = PageController::default();
        controller.apply(Ok(vec![jane()]));
        let mut session = Session::new(controller, OutputFormat::Table, Vec::new());

        session.handle(Command::Search("nyc".into())).unwrap();
        assert!(session.controller().visible().is_empty());

        session.handle(Command::Reset).unwrap();
        assert_eq!(session.controller().visible().len(), 1);

        assert!(!session.handle(Command::Quit).unwrap());
    }

    #[test]
    fn test_more_when_exhausted() {
        let mut controller = PageController::default();
        controller.apply(Ok(vec![jane()]));
        let mut session = Session::new(controller, OutputFormat::Table, Vec::new());

        session.handle(Command::More).unwrap();
        let (controller, output) = session.into_parts();
        assert_eq!(controller.pages_shown(), 1);
        assert!(String::from_utf8(output).unwrap().contains("No more advocates to load"));
    }
}
