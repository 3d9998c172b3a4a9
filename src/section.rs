//! Composition vocabulary.
//!
//! A column in the layout config is an ordered list of tokens such as
//! `work` or `new-page`. Tokens are parsed into [`Block`] values once, so the
//! assembler dispatches with an exhaustive `match` instead of comparing
//! strings. Tokens that do not parse are kept aside and reported as config
//! warnings.
//!
//! | Token | Block |
//! |-------|-------|
//! | `work` | `Section(Work)` |
//! | `education` | `Section(Education)` |
//! | `volunteer` | `Section(Volunteer)` |
//! | `certificates` | `Section(Certificates)` |
//! | `awards` | `Section(Awards)` |
//! | `technical-skills` | `Section(TechnicalSkills)` |
//! | `languages` | `Section(Languages)` |
//! | `soft-skills`, `other-skills` | `Section(SoftSkills)` |
//! | `interests` | `Section(Interests)` |
//! | `new-page` | `NewPage` |

use std::fmt;
use std::str::FromStr;

/// A résumé section that has a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Work,
    Education,
    Volunteer,
    Certificates,
    Awards,
    TechnicalSkills,
    Languages,
    SoftSkills,
    Interests,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Work,
        Section::Education,
        Section::Volunteer,
        Section::Certificates,
        Section::Awards,
        Section::TechnicalSkills,
        Section::Languages,
        Section::SoftSkills,
        Section::Interests,
    ];

    /// Canonical composition token.
    pub fn token(self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::Education => "education",
            Section::Volunteer => "volunteer",
            Section::Certificates => "certificates",
            Section::Awards => "awards",
            Section::TechnicalSkills => "technical-skills",
            Section::Languages => "languages",
            Section::SoftSkills => "soft-skills",
            Section::Interests => "interests",
        }
    }

    /// Keys tried, in order, when looking up the heading in the display-string table.
    ///
    /// Older configs label the languages section as `language` and the soft
    /// skills section as `other-skills`.
    pub fn label_keys(self) -> &'static [&'static str] {
        match self {
            Section::Languages => &["language", "languages"],
            Section::SoftSkills => &["soft-skills", "other-skills"],
            Section::Work => &["work"],
            Section::Education => &["education"],
            Section::Volunteer => &["volunteer"],
            Section::Certificates => &["certificates"],
            Section::Awards => &["awards"],
            Section::TechnicalSkills => &["technical-skills"],
            Section::Interests => &["interests"],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One item of a column composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Section(Section),
    NewPage,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Section(section) => f.write_str(section.token()),
            Block::NewPage => f.write_str("new-page"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for Block {
    type Err = UnknownToken;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let block = match token.trim() {
            "new-page" => Block::NewPage,
            "work" => Block::Section(Section::Work),
            "education" => Block::Section(Section::Education),
            "volunteer" => Block::Section(Section::Volunteer),
            "certificates" => Block::Section(Section::Certificates),
            "awards" => Block::Section(Section::Awards),
            "technical-skills" => Block::Section(Section::TechnicalSkills),
            "languages" => Block::Section(Section::Languages),
            "soft-skills" | "other-skills" => Block::Section(Section::SoftSkills),
            "interests" => Block::Section(Section::Interests),
            _ => return Err(UnknownToken(token.to_string())),
        };
        Ok(block)
    }
}

/// A parsed column: recognized blocks in order, plus the tokens that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    pub blocks: Vec<Block>,
    pub unknown: Vec<UnknownToken>,
}

/// Parse a column's tokens, keeping order and setting aside anything unrecognized.
pub fn parse_composition<S: AsRef<str>>(tokens: &[S]) -> Composition {
    let mut composition = Composition::default();
    for token in tokens {
        match token.as_ref().parse::<Block>() {
            Ok(block) => composition.blocks.push(block),
            Err(unknown) => composition.unknown.push(unknown),
        }
    }
    composition
}
