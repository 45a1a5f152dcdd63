//! Typed entry structs for each data section.
//!
//! The loader keeps sections as raw JSON; these structs are deserialized
//! one entry at a time by the renderers, so a missing required field is
//! reported with the section name and entry index of the offender.
//! Optional fields default to absent/false. Unknown fields are ignored:
//! the data file is allowed to carry more than the renderers consume.

use serde::Deserialize;

/// One author in the roster, with an optional homepage.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorProfile {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// One named external link (ordered list at the top level of the data file).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub url: String,
}

/// A degree held, rendered as a `cvEvent` block.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(rename = "where")]
    pub place: String,
    pub years: String,
    pub bullets: Vec<String>,
}

/// A position held. Bullets may nest one level deep.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    #[serde(rename = "where")]
    pub place: String,
    pub years: String,
    pub bullets: Vec<Bullet>,
}

/// A bullet in an experience entry: either a single top-level bullet or a
/// group of sub-bullets indented beneath the previous top-level one.
///
/// The grouping itself emits no bullet of its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Bullet {
    Simple(String),
    Group(Vec<String>),
}

/// A course taught; same shape as education with a role instead of a degree.
#[derive(Debug, Clone, Deserialize)]
pub struct TeachingEntry {
    pub role: String,
    #[serde(rename = "where")]
    pub place: String,
    pub years: String,
    pub bullets: Vec<String>,
}

/// A publication. `links` drives the homepage rendering; the CV only uses
/// title, authors, and venue.
#[derive(Debug, Clone, Deserialize)]
pub struct PaperEntry {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub links: PaperLinks,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Candidate links for one publication.
///
/// The primary link prefers the preprint (`arxiv`) and falls back to the
/// formal publication (`paper`); `extras` is an ordered name-to-URL map of
/// secondary links (video, code, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PaperLinks {
    #[serde(default)]
    pub arxiv: Option<String>,
    #[serde(default)]
    pub paper: Option<String>,
    #[serde(rename = "repImage")]
    pub rep_image: String,
    #[serde(default)]
    pub extras: Option<serde_json::Map<String, serde_json::Value>>,
}

impl PaperLinks {
    /// The paper's primary link: preprint if present, else the formal
    /// publication link. `None` means the entry is unusable and the caller
    /// must fail the run.
    pub fn primary(&self) -> Option<&str> {
        self.arxiv.as_deref().or(self.paper.as_deref())
    }
}

/// A patent. `number` is only required once the patent is granted; while
/// `pending` is true the CV shows a fixed label instead and the homepage
/// omits the entry entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct PatentEntry {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "patentNumber", default)]
    pub number: Option<String>,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub link: Option<String>,
}

/// A book chapter.
#[derive(Debug, Clone, Deserialize)]
pub struct BookChapterEntry {
    pub title: String,
    pub authors: Vec<String>,
    pub book: String,
    pub pages: String,
    pub editors: Vec<String>,
    pub publisher: String,
    pub year: String,
}

/// A grant or funding award.
#[derive(Debug, Clone, Deserialize)]
pub struct FundingEntry {
    pub name: String,
    pub award: String,
    pub years: String,
}

/// An award or honor; the link is only emitted when present.
#[derive(Debug, Clone, Deserialize)]
pub struct AwardEntry {
    pub name: String,
    pub year: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Press coverage; `pub_info` is appended after the linked title if present.
#[derive(Debug, Clone, Deserialize)]
pub struct PressEntry {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubInfo", default)]
    pub pub_info: Option<String>,
}

/// One skill category with its ordered item list.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}
