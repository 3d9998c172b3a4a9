//! JSON Resume document model.
//!
//! Follows the public [JSON Resume](https://jsonresume.org/schema) layout,
//! plus the non-standard `other_skills` list. Only the fields the renderers
//! read are modelled; everything else in the document is ignored.
//!
//! Required fields are plain `String`s, so a record missing one fails to
//! load with a `serde_json` error naming the field and its position. Fields
//! that are optional in the layout (summary, highlights, url/website,
//! location, label) are `Option`s and tolerate both absence and `null`.
//! Top-level lists may be omitted entirely and load as empty.

use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Resume data error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resume {
    pub basics: Basics,
    #[serde(default)]
    pub work: Vec<Work>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub volunteer: Vec<Volunteer>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub interests: Vec<NamedItem>,
    #[serde(default, alias = "otherSkills")]
    pub other_skills: Vec<NamedItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Basics {
    pub name: String,
    /// Short professional headline, rendered as the AltaCV tagline.
    #[serde(default)]
    pub label: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default, alias = "url")]
    pub website: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub region: String,
    pub country_code: String,
}

impl Location {
    /// `City, Region, CC` as shown in the header.
    pub fn display(&self) -> String {
        format!("{}, {}, {}", self.city, self.region, self.country_code)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub network: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub position: String,
    #[serde(alias = "name")]
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub area: String,
    pub study_type: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, alias = "url")]
    pub website: Option<String>,
}

impl Education {
    /// `Area, StudyType`, the event title for a degree.
    pub fn title(&self) -> String {
        format!("{}, {}", self.area, self.study_type)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub position: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "url")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certificate {
    #[serde(alias = "name")]
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Free-form grouping used by `ignore-certificates-of`.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Award {
    pub title: String,
    pub awarder: String,
    pub date: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub keywords: Vec<Keyword>,
}

impl Skill {
    /// Keyword labels joined with `, `.
    pub fn keyword_list(&self) -> String {
        self.keywords
            .iter()
            .map(Keyword::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A skill keyword.
///
/// Keywords are usually stored as `[label, years]` pairs; only the first
/// element is displayed. Plain strings are accepted as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Keyword {
    Plain(String),
    Pair(Vec<Value>),
}

impl Keyword {
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Keyword::Plain(s) => Cow::Borrowed(s.as_str()),
            Keyword::Pair(items) => match items.first() {
                Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
                Some(other) => Cow::Owned(other.to_string()),
                None => Cow::Borrowed(""),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Language {
    #[serde(alias = "language")]
    pub name: String,
    pub level: i64,
}

impl Language {
    /// Rating shown by `\cvskill`.
    ///
    /// Levels above 1 are shifted up by one to fit the five-dot scale.
    pub fn display_level(&self) -> i64 {
        if self.level > 1 {
            self.level.saturating_add(1)
        } else {
            self.level
        }
    }
}

/// A record that only carries a name (interests, other skills).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedItem {
    pub name: String,
}

pub fn parse_resume(content: &str) -> Result<Resume, ResumeError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a résumé JSON file.
pub fn load_resume(path: &Path) -> Result<Resume, ResumeError> {
    let content = fs::read_to_string(path)?;
    parse_resume(&content)
}
