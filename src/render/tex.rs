//! LaTeX rendering rules for the document pipeline.
//!
//! Each CV section maps to one marker in the template (for example
//! `{{education-placeholder}}`) and one rendering rule here. Event-style
//! sections (education, experience, teaching) become `cvEvent`
//! environments; list-style sections become a run of `\cvEventBullet`
//! lines. The section macros themselves are defined by the template's
//! preamble, not by this module.

use crate::constants::PENDING_PATENT_LABEL;
use crate::core::CvgenError;
use crate::data::{
    AwardEntry, BookChapterEntry, Bullet, EducationEntry, ExperienceEntry, FundingEntry,
    NamedLink, PaperEntry, PatentEntry, PressEntry, RecordStore, SkillGroup, TeachingEntry,
};

/// The closed set of sections the CV template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvSection {
    Education,
    Experience,
    Teaching,
    Publications,
    Patents,
    BookChapters,
    Funding,
    Awards,
    Press,
    Skills,
    Links,
}

/// Marker vocabulary for the CV template: double-brace markers, one per
/// section. Matching is exact on the trimmed line; near-misses stay
/// literal.
pub const MARKERS: &[(&str, CvSection)] = &[
    ("{{education-placeholder}}", CvSection::Education),
    ("{{experience-placeholder}}", CvSection::Experience),
    ("{{teaching-placeholder}}", CvSection::Teaching),
    ("{{publications-placeholder}}", CvSection::Publications),
    ("{{patents-placeholder}}", CvSection::Patents),
    ("{{bookchapters-placeholder}}", CvSection::BookChapters),
    ("{{funding-placeholder}}", CvSection::Funding),
    ("{{awards-placeholder}}", CvSection::Awards),
    ("{{press-placeholder}}", CvSection::Press),
    ("{{skills-placeholder}}", CvSection::Skills),
    ("{{links-placeholder}}", CvSection::Links),
];

/// Comment banner emitted once at the top of the generated document,
/// before the first template line.
pub fn banner() -> String {
    let rule = "%".repeat(50);
    format!("{rule}\n%%\n%% This file was generated by cvgen. Do not edit by hand.\n%%\n{rule}\n\n\n")
}

/// Render one section of the CV into its output lines.
///
/// Entries are typed lazily here, so the first entry missing a required
/// field aborts the run with an error naming the section and index before
/// any of that entry's lines are produced.
pub fn render_section(
    section: CvSection,
    store: &RecordStore,
) -> Result<Vec<String>, CvgenError> {
    match section {
        CvSection::Education => {
            let entries: Vec<EducationEntry> = store.entries("education")?;
            let mut lines = Vec::new();
            for entry in &entries {
                event_open(&mut lines, &entry.degree, &entry.place, &entry.years);
                for bullet in &entry.bullets {
                    lines.push(bullet_line(bullet));
                }
                event_close(&mut lines);
            }
            Ok(lines)
        }
        CvSection::Experience => {
            let entries: Vec<ExperienceEntry> = store.entries("experience")?;
            let mut lines = Vec::new();
            for entry in &entries {
                event_open(&mut lines, &entry.role, &entry.place, &entry.years);
                for bullet in &entry.bullets {
                    match bullet {
                        Bullet::Simple(text) => lines.push(bullet_line(text)),
                        Bullet::Group(items) => {
                            for item in items {
                                lines.push(format!("\\cvEventBulletSub{{{item}}}"));
                            }
                        }
                    }
                }
                event_close(&mut lines);
            }
            Ok(lines)
        }
        CvSection::Teaching => {
            let entries: Vec<TeachingEntry> = store.entries("teaching")?;
            let mut lines = Vec::new();
            for entry in &entries {
                event_open(&mut lines, &entry.role, &entry.place, &entry.years);
                for bullet in &entry.bullets {
                    lines.push(bullet_line(bullet));
                }
                event_close(&mut lines);
            }
            Ok(lines)
        }
        CvSection::Publications => {
            let entries: Vec<PaperEntry> = store.entries("papers")?;
            let roster = store.roster();
            Ok(entries
                .iter()
                .map(|paper| {
                    let authors = roster.tex_author_list(&paper.authors);
                    bullet_line(&format!(
                        "{}. {}, {{\\it {}}}.",
                        authors, paper.title, paper.venue
                    ))
                })
                .collect())
        }
        CvSection::Patents => {
            let entries: Vec<PatentEntry> = store.entries("patents")?;
            let roster = store.roster();
            let mut lines = Vec::new();
            for (index, patent) in entries.iter().enumerate() {
                let number = if patent.pending {
                    PENDING_PATENT_LABEL
                } else {
                    patent.number.as_deref().ok_or_else(|| {
                        CvgenError::MissingField {
                            section: "patents".to_string(),
                            index,
                            reason: "missing field `patentNumber` on a non-pending patent"
                                .to_string(),
                        }
                    })?
                };
                let authors = roster.tex_author_list(&patent.authors);
                lines.push(bullet_line(&format!(
                    "{}. {}, {{\\it {}}}.",
                    authors, patent.title, number
                )));
            }
            Ok(lines)
        }
        CvSection::BookChapters => {
            let entries: Vec<BookChapterEntry> = store.entries("bookchapters")?;
            let roster = store.roster();
            Ok(entries
                .iter()
                .map(|chapter| {
                    let authors = roster.tex_author_list(&chapter.authors);
                    bullet_line(&format!(
                        "{}. {}. In {{\\it {}}} ({} eds). {}, {}, {}.",
                        authors,
                        chapter.title,
                        chapter.book,
                        chapter.editors.join(", "),
                        chapter.publisher,
                        chapter.year,
                        chapter.pages
                    ))
                })
                .collect())
        }
        CvSection::Funding => {
            let entries: Vec<FundingEntry> = store.entries("funding")?;
            Ok(entries
                .iter()
                .map(|grant| {
                    bullet_line(&format!(
                        "{}. {{\\it {}}}, {}.",
                        grant.award, grant.name, grant.years
                    ))
                })
                .collect())
        }
        CvSection::Awards => {
            let entries: Vec<AwardEntry> = store.entries("awards")?;
            Ok(entries
                .iter()
                .map(|award| match &award.link {
                    Some(link) => bullet_line(&format!(
                        "\\href{{{}}}{{{}}}, {}.",
                        link, award.name, award.year
                    )),
                    None => bullet_line(&format!("{}, {}.", award.name, award.year)),
                })
                .collect())
        }
        CvSection::Press => {
            let entries: Vec<PressEntry> = store.entries("press")?;
            Ok(entries
                .iter()
                .map(|item| {
                    let mut text = format!("\\href{{{}}}{{{}}}", item.link, item.title);
                    if let Some(pub_info) = &item.pub_info {
                        text.push(' ');
                        text.push_str(pub_info);
                    }
                    bullet_line(&text)
                })
                .collect())
        }
        CvSection::Skills => {
            let entries: Vec<SkillGroup> = store.entries("skills")?;
            Ok(entries
                .iter()
                .map(|group| {
                    bullet_line(&format!(
                        "{{\\bf {}}}: {}",
                        capitalize(&group.category),
                        group.items.join(", ")
                    ))
                })
                .collect())
        }
        CvSection::Links => {
            let entries: Vec<NamedLink> = store.entries("links")?;
            Ok(entries
                .iter()
                .map(|link| bullet_line(&format!("\\href{{{}}}{{{}}}", link.url, link.name)))
                .collect())
        }
    }
}

fn event_open(lines: &mut Vec<String>, heading: &str, place: &str, years: &str) {
    lines.push(format!("\\begin{{cvEvent}}{{{heading}}}{{{place}}}{{{years}}}"));
}

fn event_close(lines: &mut Vec<String>) {
    lines.push("\\end{cvEvent}".to_string());
    lines.push(String::new());
}

fn bullet_line(text: &str) -> String {
    format!("\\cvEventBullet{{{text}}}")
}

/// Upper-case the first character of a skill category for display.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
