// ABOUTME: Integration tests for the playfeed CLI binary.
// ABOUTME: Runs catalog and details commands against a mock content API.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::process::Command;

fn playfeed_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("playfeed").unwrap();
    cmd.arg("--base-url")
        .arg(server.base_url())
        .arg("--catalog-path")
        .arg("/feed")
        .arg("--details-prefix")
        .arg("/content/path/");
    cmd
}

#[test]
fn catalog_prints_normalized_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200).json_body(json!({
            "page": {"content": {"items": [
                {"asset": {"title": "Film A", "url": "https://play.example.com/film/a", "id": "a-1"}}
            ]}}
        }));
    });

    let output = playfeed_cmd(&server)
        .arg("catalog")
        .arg("--compact")
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        json!([{"id": "a-1", "title": "Film A", "url": "film/a"}])
    );
}

#[test]
fn details_text_output_formats_duration() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/content/path/film/b");
        then.status(200).json_body(json!({
            "title": "Film B",
            "url": "/film/b",
            "duration": "PT1H5M",
            "description": "A film."
        }));
    });

    playfeed_cmd(&server)
        .arg("details")
        .arg("/film/b")
        .arg("--text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Film B"))
        .stdout(predicate::str::contains("duration: 1 h 5 min"))
        .stdout(predicate::str::contains("A film."));
}

#[test]
fn empty_feed_fails_with_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200).json_body(json!({"items": []}));
    });

    playfeed_cmd(&server)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog feed is empty"));
}

#[test]
fn http_error_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/content/path/film/gone");
        then.status(410);
    });

    playfeed_cmd(&server)
        .arg("details")
        .arg("film/gone")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP status 410"));
}
