use super::types::ScriptLine;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("program must start with keyword \"dance\"\n  | {found}")]
    MissingStartKeyword { found: String },
    #[error("program has no end: the last line must be \"end dance\"\n  | {found}")]
    MissingEndKeyword { found: String },
    #[error("line {line_number}: expected '{key}=<value>'")]
    MalformedField { line_number: usize, key: &'static str },
    #[error("a style has not been chosen")]
    MissingStyle,
    #[error("the dance has no name")]
    MissingName,
    #[error(transparent)]
    UnknownStyle(#[from] super::types::UnknownStyle),
}

pub fn classify_line(line: &str, line_number: usize) -> Result<ScriptLine, ParseError> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Ok(ScriptLine::Blank);
    }

    if trimmed.eq_ignore_ascii_case("dance") {
        return Ok(ScriptLine::Start);
    }

    if trimmed.starts_with("style") {
        let value = field_value(trimmed, "style", line_number)?;
        return Ok(ScriptLine::Style(value));
    }

    if trimmed.starts_with("name") {
        let value = field_value(trimmed, "name", line_number)?;
        return Ok(ScriptLine::Name(value));
    }

    if trimmed.eq_ignore_ascii_case("end dance") {
        return Ok(ScriptLine::End);
    }

    // Moves never contain whitespace: "jump  step" is the move "jumpstep"
    let name: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(ScriptLine::Move(name))
}

/// Everything after the first '=' is the value, so `name=a=b` names the dance "a=b".
fn field_value(line: &str, key: &'static str, line_number: usize) -> Result<String, ParseError> {
    let Some((_, value)) = line.split_once('=') else {
        return Err(ParseError::MalformedField { line_number, key });
    };
    Ok(value.trim().to_string())
}
