//! Data-file failures: the run must abort with a message naming the
//! offender, and no output should be trusted afterwards.

use predicates::str::contains;

use crate::common;

#[test]
fn missing_required_field_names_section_and_entry() {
    // Second paper lost its venue.
    let data = common::DATA.replace(r#""venue": "SIGGRAPH Asia 2011","#, "");
    let fixture = common::project_with_data(&data);

    common::cvgen()
        .args(["cv", "--skip-pdf", "--root"])
        .arg(&fixture.root)
        .assert()
        .failure()
        .stderr(contains("papers"))
        .stderr(contains("venue"));
}

#[test]
fn malformed_json_is_a_data_format_error() {
    let fixture = common::project_with_data("{ this is not json");

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .failure()
        .stderr(contains("Malformed data"));
}

#[test]
fn missing_data_file_fails() {
    let fixture = common::project();
    std::fs::remove_file(fixture.root.join("personalData.json")).unwrap();

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .failure()
        .stderr(contains("error"));
}

#[test]
fn homepage_requires_link_on_granted_patents() {
    let data = common::DATA.replace(r#""link": "https://patents.example/9999999""#, r#""note": "x""#);
    let fixture = common::project_with_data(&data);

    common::cvgen()
        .args(["homepage", "--root"])
        .arg(&fixture.root)
        .arg("--output-dir")
        .arg(&fixture.out)
        .assert()
        .failure()
        .stderr(contains("patents"));
}
