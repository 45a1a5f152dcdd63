//! Author-list formatting.
//!
//! Author names on papers and patents are plain strings; the roster maps
//! them to optional websites. Rules shared by both output formats:
//!
//! - the distinguished author (the data file's top-level `name`) always
//!   renders bold and unlinked, compared case-insensitively, even when
//!   the roster lists a website for that exact name;
//! - roster hits with a website become hyperlinks (HTML only; TeX output
//!   carries no links);
//! - unmatched names render as plain text;
//! - the joined list preserves entry order and uses ", " as separator.

use crate::data::AuthorProfile;

/// Read-only view over the author roster for one run.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    owner: &'a str,
    authors: &'a [AuthorProfile],
}

impl<'a> Roster<'a> {
    pub fn new(owner: &'a str, authors: &'a [AuthorProfile]) -> Self {
        Self { owner, authors }
    }

    /// Whether `name` is the distinguished author. Case-insensitive so a
    /// casing mismatch between a paper's author list and the top-level
    /// name does not silently drop the bolding.
    pub fn is_owner(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(self.owner)
    }

    /// Exact-match roster lookup.
    pub fn find(&self, name: &str) -> Option<&AuthorProfile> {
        self.authors.iter().find(|author| author.name == name)
    }

    /// Author list for HTML output: `<a href="...">Name</a>` for roster
    /// hits with a website, `<b>Name</b>` for the distinguished author,
    /// plain text otherwise.
    pub fn html_author_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|name| {
                if self.is_owner(name) {
                    return format!("<b>{name}</b>");
                }
                match self.find(name).and_then(|author| author.website.as_deref()) {
                    Some(website) => format!("<a href=\"{website}\">{name}</a>"),
                    None => name.clone(),
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Author list for TeX output: no hyperlinks, distinguished author
    /// wrapped in `{\bf ...}`.
    pub fn tex_author_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|name| {
                if self.is_owner(name) {
                    format!("{{\\bf {name}}}")
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
