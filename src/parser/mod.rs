pub mod lexer;
pub mod types;

use lexer::ParseError;
use types::{DanceProgram, ScriptLine};

/// Collects fields while scanning; `style=` and `name=` are last-wins.
#[derive(Debug, Default)]
struct ProgramBuilder {
    moves: Vec<String>,
    style: Option<String>,
    name: Option<String>,
}

impl ProgramBuilder {
    fn finish(self) -> Result<DanceProgram, ParseError> {
        let style = self
            .style
            .filter(|s| !s.is_empty())
            .ok_or(ParseError::MissingStyle)?;
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(ParseError::MissingName)?;

        Ok(DanceProgram {
            moves: self.moves,
            style: style.parse()?,
            name,
        })
    }
}

pub fn parse_dance(input: &str) -> Result<DanceProgram, ParseError> {
    let lines: Vec<&str> = input.lines().collect();

    let first = lines.iter().find(|l| !l.trim().is_empty());
    if !first.is_some_and(|l| l.trim().eq_ignore_ascii_case("dance")) {
        return Err(ParseError::MissingStartKeyword {
            found: first.map(|l| l.to_string()).unwrap_or_default(),
        });
    }

    // Only the physical last line counts; trailing blank lines fail this check.
    let last = lines.last().copied().unwrap_or_default();
    if !last.eq_ignore_ascii_case("end dance") {
        return Err(ParseError::MissingEndKeyword {
            found: last.to_string(),
        });
    }

    let mut builder = ProgramBuilder::default();
    for (idx, line) in lines.iter().enumerate() {
        match lexer::classify_line(line, idx + 1)? {
            ScriptLine::Blank | ScriptLine::Start => {}
            ScriptLine::Style(value) => builder.style = Some(value),
            ScriptLine::Name(value) => builder.name = Some(value),
            ScriptLine::Move(name) => builder.moves.push(name),
            ScriptLine::End => break,
        }
    }

    builder.finish()
}
