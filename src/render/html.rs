//! HTML rendering rules for the webpage pipeline.
//!
//! The homepage template uses single-brace markers (`{papers_placeholder}`)
//! and a smaller vocabulary than the CV: papers, patents, and the external
//! link list. Markup follows the Bootstrap grid the template is built on.
//!
//! Divergence from the document pipeline, preserved deliberately: patents
//! with `pending: true` are omitted from the homepage entirely, while the
//! CV lists them with a placeholder number.

use crate::core::CvgenError;
use crate::data::{NamedLink, PaperEntry, PatentEntry, RecordStore};

/// The closed set of sections the homepage template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Papers,
    Patents,
    Links,
}

/// Marker vocabulary for the homepage template.
pub const MARKERS: &[(&str, PageSection)] = &[
    ("{papers_placeholder}", PageSection::Papers),
    ("{patents_placeholder}", PageSection::Patents),
    ("{links_placeholder}", PageSection::Links),
];

/// Render one section of the homepage into its output lines.
pub fn render_section(
    section: PageSection,
    store: &RecordStore,
) -> Result<Vec<String>, CvgenError> {
    match section {
        PageSection::Papers => render_papers(store),
        PageSection::Patents => render_patents(store),
        PageSection::Links => render_links(store),
    }
}

fn render_papers(store: &RecordStore) -> Result<Vec<String>, CvgenError> {
    let papers: Vec<PaperEntry> = store.entries("papers")?;
    let roster = store.roster();
    let mut lines = Vec::new();

    for (index, paper) in papers.iter().enumerate() {
        let primary = paper.links.primary().ok_or_else(|| CvgenError::MissingField {
            section: "papers".to_string(),
            index,
            reason: "no primary link: `links` needs either `arxiv` or `paper`".to_string(),
        })?;
        let author_list = roster.html_author_list(&paper.authors);
        let extras = extras_list(paper, index)?;

        // Image column hides below the md breakpoint; text column takes
        // the full width there.
        lines.push(r#"<div class="row mt-4 align-items-center">"#.to_string());
        lines.push(r#"  <div class="col-4 d-none d-md-block">"#.to_string());
        lines.push(format!(
            r#"    <img class="img-fluid rounded mx-auto d-block" width="300px" src="{}">"#,
            paper.links.rep_image
        ));
        lines.push("  </div>".to_string());
        lines.push(r#"  <div class="col-xs-12 col-md-8">"#.to_string());
        lines.push(format!(
            r#"      <p class="lead"><a href="{}">{}</a></p>"#,
            primary, paper.title
        ));
        lines.push(format!("      <p>{author_list}</p>"));
        lines.push(format!("      <p><i>{}</i></p>", paper.venue));
        if !extras.is_empty() {
            lines.push(format!("      <p>{}</p>", extras.join(" | ")));
        }
        if let Some(notes) = &paper.notes {
            lines.push(format!(r#"      <p class="small">{notes}</p>"#));
        }
        lines.push("  </div>".to_string());
        lines.push("</div>".to_string());
        lines.push(String::new());
    }

    Ok(lines)
}

/// Secondary links for one paper, in data-file order. Values must be URL
/// strings; anything else is reported against the owning entry.
fn extras_list(paper: &PaperEntry, index: usize) -> Result<Vec<String>, CvgenError> {
    let Some(extras) = &paper.links.extras else {
        return Ok(Vec::new());
    };

    extras
        .iter()
        .map(|(name, link)| match link.as_str() {
            Some(url) => Ok(format!(r#"<a href="{url}">{name}</a>"#)),
            None => Err(CvgenError::MissingField {
                section: "papers".to_string(),
                index,
                reason: format!("extras entry '{name}' must be a URL string"),
            }),
        })
        .collect()
}

fn render_patents(store: &RecordStore) -> Result<Vec<String>, CvgenError> {
    let patents: Vec<PatentEntry> = store.entries("patents")?;
    let roster = store.roster();
    let mut lines = Vec::new();

    for (index, patent) in patents.iter().enumerate() {
        // Pending patents are not listed on the homepage at all.
        if patent.pending {
            continue;
        }

        let link = patent.link.as_deref().ok_or_else(|| CvgenError::MissingField {
            section: "patents".to_string(),
            index,
            reason: "missing field `link`".to_string(),
        })?;
        let number = patent.number.as_deref().ok_or_else(|| CvgenError::MissingField {
            section: "patents".to_string(),
            index,
            reason: "missing field `patentNumber` on a non-pending patent".to_string(),
        })?;
        let author_list = roster.html_author_list(&patent.authors);

        lines.push(r#"<div class="row mt-4">"#.to_string());
        lines.push(r#"  <div class="col-12">"#.to_string());
        lines.push(format!(
            r#"    <p class="lead"><a href="{}">{}</a></p>"#,
            link, patent.title
        ));
        lines.push(format!("    <p>{author_list}</p>"));
        lines.push(format!("    <p>Patent No. {number}</p>"));
        lines.push("  </div>".to_string());
        lines.push("</div>".to_string());
        lines.push(String::new());
    }

    Ok(lines)
}

fn render_links(store: &RecordStore) -> Result<Vec<String>, CvgenError> {
    let links: Vec<NamedLink> = store.entries("links")?;
    Ok(links
        .iter()
        .map(|link| format!(r#"<li><a href="{}">{}</a></li>"#, link.url, link.name))
        .collect())
}
