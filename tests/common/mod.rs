//! Shared fixtures for integration tests.
//!
//! Builds a throwaway project directory (data file plus both templates)
//! and returns a command pointed at the compiled `cvgen` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A complete, well-formed data file exercising every section.
pub const DATA: &str = r#"{
  "name": "Kevin Karsch",
  "authors": [
    {"name": "Alice Liddell", "website": "https://alice.example"},
    {"name": "Bob Stone"},
    {"name": "Kevin Karsch", "website": "https://kevin.example"}
  ],
  "links": [
    {"name": "Google Scholar", "url": "https://scholar.example/kk"},
    {"name": "GitHub", "url": "https://github.example/kk"}
  ],
  "education": [
    {"degree": "PhD, Computer Science", "where": "University of Illinois",
     "years": "2009 - 2015",
     "bullets": ["Advisor: D. Forsyth", "Thesis on data-driven illumination"]}
  ],
  "experience": [
    {"role": "Senior Engineer", "where": "Acme Corp", "years": "2016 - present",
     "bullets": ["Did X", ["Detail A", "Detail B"], "Did Y"]}
  ],
  "teaching": [
    {"role": "Instructor", "where": "University of Illinois", "years": "2014",
     "bullets": ["CS 498: Computational Photography"]}
  ],
  "papers": [
    {"title": "Depth Transfer", "venue": "TPAMI 2014",
     "authors": ["Kevin Karsch", "Alice Liddell", "Bob Stone"],
     "notes": "Oral presentation",
     "links": {"arxiv": "https://arxiv.org/abs/1", "paper": "https://doi.org/10.1/1",
               "repImage": "img/depth.png",
               "extras": {"video": "https://video.example/1", "code": "https://code.example/1"}}},
    {"title": "Rendering Synthetic Objects", "venue": "SIGGRAPH Asia 2011",
     "authors": ["Kevin Karsch", "Carol Unknown"],
     "links": {"paper": "https://doi.org/10.1/2", "repImage": "img/render.png"}}
  ],
  "patents": [
    {"title": "Granted Gadget", "authors": ["Kevin Karsch", "Alice Liddell"],
     "patentNumber": "US 9,999,999", "link": "https://patents.example/9999999"},
    {"title": "Pending Widget", "authors": ["Kevin Karsch"], "pending": true}
  ],
  "bookchapters": [
    {"title": "Scene Reconstruction", "authors": ["Kevin Karsch"],
     "book": "Vision Handbook", "pages": "101-120", "editors": ["E. One", "E. Two"],
     "publisher": "Springer", "year": "2015"}
  ],
  "funding": [
    {"name": "NSF Graduate Fellowship", "award": "NSF", "years": "2010 - 2013"}
  ],
  "awards": [
    {"name": "Best Paper Award", "year": "2014", "link": "https://conf.example/best"},
    {"name": "Departmental Fellowship", "year": "2009"}
  ],
  "press": [
    {"title": "Researchers fake photos convincingly",
     "link": "https://news.example/1", "pubInfo": "(Wired, 2013)"}
  ],
  "skills": [
    {"category": "languages", "items": ["C++", "Python", "Rust"]},
    {"category": "tools", "items": ["OpenGL", "PyTorch"]}
  ]
}
"#;

pub const CV_TEMPLATE: &str = r"\documentclass{article}
\begin{document}
\section*{Education}
{{education-placeholder}}
\section*{Experience}
{{experience-placeholder}}
\section*{Teaching}
{{teaching-placeholder}}
\section*{Publications}
{{publications-placeholder}}
\section*{Patents}
{{patents-placeholder}}
\section*{Book Chapters}
{{bookchapters-placeholder}}
\section*{Funding}
{{funding-placeholder}}
\section*{Awards}
{{awards-placeholder}}
\section*{Press}
{{press-placeholder}}
\section*{Skills}
{{skills-placeholder}}
{{not-a-real-placeholder}}
\end{document}
";

pub const HOMEPAGE_TEMPLATE: &str = r#"<!doctype html>
<html>
  <body>
    <ul class="nav">
      {links_placeholder}
    </ul>
    <div class="container">
      {papers_placeholder}
    </div>
    <div class="container">
      {patents_placeholder}
    </div>
    {{unknown-placeholder}}
  </body>
</html>
"#;

/// A temporary project: `root/` holds the inputs, `out/` receives the
/// artifacts. The `TempDir` must stay alive for the duration of the test.
pub struct Fixture {
    pub temp: TempDir,
    pub root: PathBuf,
    pub out: PathBuf,
}

/// Build a fixture project with the standard data file and templates.
pub fn project() -> Fixture {
    project_with_data(DATA)
}

/// Build a fixture project with a custom data file.
pub fn project_with_data(data: &str) -> Fixture {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("site");
    let out = temp.path().join("out");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&out).unwrap();

    fs::write(root.join("personalData.json"), data).unwrap();
    fs::write(root.join("cv-in.tex"), CV_TEMPLATE).unwrap();
    fs::write(root.join("index-in.html"), HOMEPAGE_TEMPLATE).unwrap();

    Fixture { temp, root, out }
}

/// A command for the compiled cvgen binary.
pub fn cvgen() -> Command {
    Command::cargo_bin("cvgen").unwrap()
}
