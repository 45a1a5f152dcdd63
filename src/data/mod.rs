//! Data file loading.
//!
//! [`RecordStore::load`] parses `personalData.json` once per run into an
//! immutable store: the site owner's name, the author roster, and a map
//! of section name to ordered raw entries. The loader performs no
//! semantic validation beyond JSON well-formedness; required fields are
//! discovered lazily when a renderer asks for a section's typed entries
//! through [`RecordStore::entries`], so a missing field is reported with
//! the section and entry index that triggered it and the data file can
//! carry sections no template ever references.

pub mod entries;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use serde_json::map::Map;
use tracing::debug;

use crate::core::CvgenError;
use crate::render::authors::Roster;

pub use entries::{
    AuthorProfile, AwardEntry, BookChapterEntry, Bullet, EducationEntry, ExperienceEntry,
    FundingEntry, NamedLink, PaperEntry, PaperLinks, PatentEntry, PressEntry, SkillGroup,
    TeachingEntry,
};

/// Shape of the data file as parsed. The owner name and roster are typed
/// up front; everything else stays raw until a renderer needs it.
#[derive(Debug, Deserialize)]
struct RawStore {
    name: String,
    authors: Vec<AuthorProfile>,
    #[serde(flatten)]
    sections: Map<String, Value>,
}

/// The in-memory record store for one run. Loaded once, never mutated.
#[derive(Debug)]
pub struct RecordStore {
    name: String,
    authors: Vec<AuthorProfile>,
    sections: Map<String, Value>,
}

impl RecordStore {
    /// Load and parse the data file at `path`.
    ///
    /// Fails with [`CvgenError::FileSystem`] if the file cannot be read
    /// and [`CvgenError::DataFormat`] if it is not well-formed JSON.
    pub fn load(path: &Path) -> Result<Self, CvgenError> {
        let text = std::fs::read_to_string(path).map_err(|_| CvgenError::FileSystem {
            operation: "read".to_string(),
            path: path.display().to_string(),
        })?;

        let raw: RawStore = serde_json::from_str(&text).map_err(|e| CvgenError::DataFormat {
            what: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(
            sections = raw.sections.len(),
            authors = raw.authors.len(),
            "loaded data file {}",
            path.display()
        );

        Ok(Self {
            name: raw.name,
            authors: raw.authors,
            sections: raw.sections,
        })
    }

    /// The distinguished author: the person this CV/homepage is about.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The roster view used to resolve author names to links.
    pub fn roster(&self) -> Roster<'_> {
        Roster::new(&self.name, &self.authors)
    }

    /// Deserialize a section's entries into their typed form.
    ///
    /// Entries are converted one at a time so a failure identifies the
    /// exact entry: a missing or mistyped required field becomes
    /// [`CvgenError::MissingField`] carrying the section name and the
    /// entry's zero-based index. A section key absent from the data file
    /// is [`CvgenError::SectionMissing`]; a section that is not an array
    /// is [`CvgenError::DataFormat`].
    pub fn entries<T>(&self, section: &str) -> Result<Vec<T>, CvgenError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self
            .sections
            .get(section)
            .ok_or_else(|| CvgenError::SectionMissing {
                section: section.to_string(),
            })?;

        let raw = value.as_array().ok_or_else(|| CvgenError::DataFormat {
            what: format!("section '{section}'"),
            reason: "expected an ordered list of entries".to_string(),
        })?;

        raw.iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value(entry.clone()).map_err(|e| CvgenError::MissingField {
                    section: section.to_string(),
                    index,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}
