//! Shared test fixtures for the altacv-builder unit tests.
//!
//! Provides a small but complete résumé (every section populated, with one
//! entry each exercising the optional link/summary/highlight paths) and a
//! matching layout config.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let resume = sample_resume();
//! let config = sample_config();
//! let doc = assemble(&config, &resume).unwrap();
//! ```

use crate::config::{ConfigFormat, LayoutConfig, parse_config};
use crate::resume::{Certificate, Resume, parse_resume};

// =========================================================================
// Résumé fixtures
// =========================================================================

/// The smallest document that loads: `basics` only.
pub fn minimal_resume_json() -> String {
    r#"{
        "basics": {
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+44 20 0000 0000",
            "location": {"city": "London", "region": "England", "countryCode": "UK"}
        }
    }"#
    .to_string()
}

pub fn minimal_resume() -> Resume {
    parse_resume(&minimal_resume_json()).unwrap()
}

pub fn sample_resume_json() -> String {
    r#"{
        "basics": {
            "name": "Ada Lovelace",
            "label": "Analyst",
            "email": "ada@example.com",
            "phone": "+44 20 0000 0000",
            "website": "https://ada.example.com",
            "location": {"city": "London", "region": "England", "countryCode": "UK"},
            "profiles": [
                {"network": "GitHub", "username": "ada"},
                {"network": "Stack Overflow", "username": "1815"}
            ]
        },
        "work": [
            {
                "position": "Engineer",
                "company": "Analytical Engines Ltd",
                "startDate": "2020-01-15",
                "endDate": "present",
                "location": "London",
                "summary": "Built things with <i>Rust</i>.",
                "highlights": ["Shipped the mill", "Wrote <i>notes</i>"]
            },
            {
                "position": "Intern",
                "company": "Difference Co",
                "startDate": "2019-06-01",
                "endDate": "2019-12-01"
            }
        ],
        "education": [
            {
                "area": "Mathematics",
                "studyType": "Bachelor",
                "institution": "University of London",
                "startDate": "2010-03-01",
                "endDate": "2014-12-01",
                "website": "https://london.ac.uk"
            }
        ],
        "volunteer": [
            {
                "position": "Tutor",
                "organization": "Code Club",
                "startDate": "2015-06-01",
                "endDate": "2016-02-01",
                "location": "Online",
                "summary": "Taught kids."
            }
        ],
        "skills": [
            {"name": "Languages", "keywords": [["Rust", 5], ["Python", 8]]}
        ],
        "certificates": [
            {"title": "Intro Course", "issuer": "MOOC", "date": "2018-01-01", "category": "course"},
            {"title": "Cloud Architect", "issuer": "Cloud Inc", "date": "2019-05-01",
             "url": "https://cert.example.com/1", "category": "cloud", "summary": "Hard exam."}
        ],
        "awards": [
            {"title": "Best Paper", "awarder": "Royal Society", "date": "2018-11-20"}
        ],
        "languages": [
            {"name": "English", "level": 4},
            {"name": "French", "level": 1}
        ],
        "interests": [{"name": "poetry"}, {"name": "horse racing"}],
        "other_skills": [{"name": "Teamwork"}]
    }"#
    .to_string()
}

pub fn sample_resume() -> Resume {
    parse_resume(&sample_resume_json()).unwrap()
}

pub fn certificate(title: &str, category: Option<&str>) -> Certificate {
    Certificate {
        title: title.to_string(),
        issuer: "Issuer".to_string(),
        date: "2020".to_string(),
        summary: None,
        url: None,
        category: category.map(str::to_string),
    }
}

// =========================================================================
// Config fixtures
// =========================================================================

pub const SAMPLE_CONFIG_YAML: &str = r#"
json_resume_path: resume.json
language: en
name: ""
colors:
  accent: "8F0D0D"
  heading: "2E2E2E"
composition:
  first-column:
    - work
    - new-page
    - education
    - volunteer
    - certificates
    - awards
  second-column:
    - technical-skills
    - languages
    - soft-skills
    - interests
strings:
  work: Experience
  education: Education
  volunteer: Volunteering
  certificates: Certificates
  awards: Awards
  technical-skills: Technical Skills
  language: Languages
  soft-skills: Soft Skills
  interests: Interests
ignore-certificates-of:
  - course
"#;

pub fn sample_config() -> LayoutConfig {
    parse_config(SAMPLE_CONFIG_YAML, ConfigFormat::Yaml).unwrap()
}
