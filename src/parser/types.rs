use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Breaking,
    Ballet,
    Dancehall,
}

impl StyleTag {
    pub const ALL: [StyleTag; 3] = [StyleTag::Breaking, StyleTag::Ballet, StyleTag::Dancehall];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Breaking => "breaking",
            StyleTag::Ballet => "ballet",
            StyleTag::Dancehall => "dancehall",
        }
    }

    /// Name of the directory holding this style's move GIFs.
    pub fn directory_name(&self) -> String {
        format!("{} gifs", self.as_str())
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is either unavailable or is spelled wrong. Try one of: breaking, ballet, dancehall")]
pub struct UnknownStyle(pub String);

impl FromStr for StyleTag {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleTag::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// One classified line of a dance script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Blank,
    Start,
    End,
    Style(String),
    Name(String),
    Move(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanceProgram {
    pub moves: Vec<String>,
    pub style: StyleTag,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("breaking".parse::<StyleTag>().unwrap(), StyleTag::Breaking);
        assert_eq!("ballet".parse::<StyleTag>().unwrap(), StyleTag::Ballet);
        assert_eq!(
            "dancehall".parse::<StyleTag>().unwrap(),
            StyleTag::Dancehall
        );
    }

    #[test]
    fn test_style_is_case_sensitive() {
        let err = "Ballet".parse::<StyleTag>().unwrap_err();
        assert_eq!(err, UnknownStyle("Ballet".into()));
    }

    #[test]
    fn test_unknown_style_message() {
        let err = "tango".parse::<StyleTag>().unwrap_err();
        assert!(err.to_string().starts_with("tango is either unavailable"));
    }

    #[test]
    fn test_style_directory_name() {
        assert_eq!(StyleTag::Ballet.directory_name(), "ballet gifs");
        assert_eq!(StyleTag::Dancehall.to_string(), "dancehall");
    }

    #[test]
    fn test_program_serializes_style_lowercase() {
        let program = DanceProgram {
            moves: vec!["spin".into()],
            style: StyleTag::Breaking,
            name: "demo".into(),
        };
        let json = serde_json::to_string(&program).unwrap();
        assert!(json.contains("\"style\":\"breaking\""));
        assert!(json.contains("\"moves\":[\"spin\"]"));
    }
}
