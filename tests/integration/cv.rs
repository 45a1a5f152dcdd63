//! Document pipeline up to `cv.tex`. The pdflatex step is skipped so the
//! tests run on machines without a TeX distribution; the finalizer's
//! artifact-naming logic is covered by unit tests.

use std::fs;

use crate::common;

fn generate_cv_tex(fixture: &common::Fixture) -> String {
    common::cvgen()
        .args(["cv", "--skip-pdf", "--root"])
        .arg(&fixture.root)
        .assert()
        .success();
    fs::read_to_string(fixture.root.join("cv.tex")).unwrap()
}

#[test]
fn cv_tex_starts_with_the_generated_banner() {
    let fixture = common::project();
    let tex = generate_cv_tex(&fixture);

    let first_line = tex.lines().next().unwrap();
    assert!(first_line.chars().all(|c| c == '%'));
    assert!(tex.contains("generated by cvgen"));
    // The banner sits before any template content.
    assert!(tex.find("generated by cvgen").unwrap() < tex.find("documentclass").unwrap());
}

#[test]
fn cv_tex_renders_every_section() {
    let fixture = common::project();
    let tex = generate_cv_tex(&fixture);

    assert!(tex.contains(
        "\\begin{cvEvent}{PhD, Computer Science}{University of Illinois}{2009 - 2015}"
    ));
    assert!(tex.contains("\\cvEventBullet{Advisor: D. Forsyth}"));

    // Publications bold the owner and never link anyone.
    assert!(tex.contains(
        "\\cvEventBullet{{\\bf Kevin Karsch}, Alice Liddell, Bob Stone. Depth Transfer, {\\it TPAMI 2014}.}"
    ));
    assert!(!tex.contains("<a href"));
    assert!(!tex.contains("\\href{https://alice.example}"));

    assert!(tex.contains("\\cvEventBullet{NSF. {\\it NSF Graduate Fellowship}, 2010 - 2013.}"));
    assert!(tex.contains("\\cvEventBullet{\\href{https://conf.example/best}{Best Paper Award}, 2014.}"));
    assert!(tex.contains("\\cvEventBullet{Departmental Fellowship, 2009.}"));
    assert!(tex.contains("\\cvEventBullet{{\\bf Languages}: C++, Python, Rust}"));
}

#[test]
fn nested_experience_bullets_keep_their_order() {
    let fixture = common::project();
    let tex = generate_cv_tex(&fixture);

    let x = tex.find("\\cvEventBullet{Did X}").unwrap();
    let a = tex.find("\\cvEventBulletSub{Detail A}").unwrap();
    let b = tex.find("\\cvEventBulletSub{Detail B}").unwrap();
    let y = tex.find("\\cvEventBullet{Did Y}").unwrap();
    assert!(x < a && a < b && b < y);
}

#[test]
fn pending_patents_appear_with_placeholder_number() {
    let fixture = common::project();
    let tex = generate_cv_tex(&fixture);

    // Unlike the homepage, the CV lists pending patents.
    assert!(tex.contains("Pending Widget, {\\it (pending)}."));
    assert!(tex.contains("Granted Gadget, {\\it US 9,999,999}."));
}

#[test]
fn unrecognized_markers_survive_expansion() {
    let fixture = common::project();
    let tex = generate_cv_tex(&fixture);
    assert!(tex.contains("{{not-a-real-placeholder}}"));
}

#[test]
fn reruns_are_byte_identical() {
    let fixture = common::project();
    let first = generate_cv_tex(&fixture);
    let second = generate_cv_tex(&fixture);
    assert_eq!(first, second);
}
