//! Webpage pipeline: template expansion, author linking, indentation,
//! the pending-patent omission, and determinism.

use std::fs;

use crate::common;

#[test]
fn generates_homepage_from_fixture_project() {
    let fixture = common::project();

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .success();

    let html = fs::read_to_string(fixture.out.join("index.html")).unwrap();

    // Roster hit with a website becomes a link; the owner is bold and
    // unlinked even though the roster lists a website for him; unknown
    // names stay plain.
    assert!(html.contains(
        r#"<b>Kevin Karsch</b>, <a href="https://alice.example">Alice Liddell</a>, Bob Stone"#
    ));
    assert!(html.contains("<b>Kevin Karsch</b>, Carol Unknown"));

    // Primary link prefers arxiv, falls back to the formal link.
    assert!(html.contains(r#"<a href="https://arxiv.org/abs/1">Depth Transfer</a>"#));
    assert!(
        html.contains(r#"<a href="https://doi.org/10.1/2">Rendering Synthetic Objects</a>"#)
    );

    // Extras and notes only where present.
    assert!(html.contains(
        r#"<a href="https://video.example/1">video</a> | <a href="https://code.example/1">code</a>"#
    ));
    assert!(html.contains(r#"<p class="small">Oral presentation</p>"#));

    // Pending patents are omitted; granted ones keep their number.
    assert!(!html.contains("Pending Widget"));
    assert!(html.contains("Patent No. US 9,999,999"));

    // External links in data order.
    let scholar = html.find("Google Scholar").unwrap();
    let github = html.find("GitHub").unwrap();
    assert!(scholar < github);
}

#[test]
fn substituted_lines_inherit_placeholder_indentation() {
    let fixture = common::project();

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .success();

    let html = fs::read_to_string(fixture.out.join("index.html")).unwrap();

    // The {papers_placeholder} line is indented six spaces in the
    // template; every substituted row must carry that prefix.
    assert!(html.contains("\n      <div class=\"row mt-4 align-items-center\">"));
    // {links_placeholder} also sits six spaces deep.
    assert!(html.contains("\n      <li><a href=\"https://scholar.example/kk\">Google Scholar</a></li>"));
}

#[test]
fn unknown_markers_are_copied_verbatim() {
    let fixture = common::project();

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .success();

    let html = fs::read_to_string(fixture.out.join("index.html")).unwrap();
    assert!(html.contains("{{unknown-placeholder}}"));
}

#[test]
fn reruns_are_byte_identical() {
    let fixture = common::project();

    for _ in 0..2 {
        common::cvgen()
            .args(["homepage", "--root"])
            .arg(&fixture.root)
            .arg("--output-dir")
            .arg(&fixture.out)
            .assert()
            .success();
    }
    let first = fs::read(fixture.out.join("index.html")).unwrap();

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .success();
    let second = fs::read(fixture.out.join("index.html")).unwrap();

    assert_eq!(first, second);
}
