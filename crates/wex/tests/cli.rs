// ABOUTME: Integration tests for the wex CLI binary.
// ABOUTME: Tests file, stdin and URL targets plus the --raw and --meta flags.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Test Page</title>
<meta name="author" content="Jane Doe">
</head>
<body>
<nav>Menu</nav>
<article><p>Hello <b>world</b></p><script>evil()</script></article>
</body>
</html>"#;

fn wex_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wex").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_page(dir: &TempDir, html: &str) -> PathBuf {
    let path = dir.path().join("page.html");
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn file_target_prints_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_page(&temp_dir, PAGE);

    wex_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout("Hello **world**\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn raw_flag_prints_html() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_page(&temp_dir, PAGE);

    wex_cmd()
        .arg("--raw")
        .arg(&path)
        .assert()
        .success()
        .stdout("<p>Hello <b>world</b></p>\n");
}

#[test]
fn meta_flag_writes_json_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_page(&temp_dir, PAGE);

    wex_cmd()
        .arg("-m")
        .arg("-r")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Hello <b>world</b></p>"))
        .stdout(predicate::str::contains("Test Page").not())
        .stderr(predicate::str::contains("\"title\": \"Test Page\""))
        .stderr(predicate::str::contains("\"author\": \"Jane Doe\""))
        .stderr(predicate::str::contains("description").not());
}

#[test]
fn stdin_target() {
    wex_cmd()
        .arg("-")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout("Hello **world**\n");
}

#[test]
fn url_target_fetches_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/post");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(PAGE);
    });

    wex_cmd()
        .arg(server.url("/post"))
        .assert()
        .success()
        .stdout("Hello **world**\n");

    mock.assert();
}

#[test]
fn bad_status_exits_non_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });

    wex_cmd()
        .arg(server.url("/missing"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("extraction failed"))
        .stderr(predicate::str::contains("bad status code: 404"));
}

#[test]
fn page_without_article_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_page(&temp_dir, "<html><body><p>Nothing to see</p></body></html>");

    wex_cmd()
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no article content found"));
}

#[test]
fn missing_file_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();

    wex_cmd()
        .arg(temp_dir.path().join("nope.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

#[test]
fn no_args_fails() {
    wex_cmd().assert().failure();
}

#[test]
fn version_flag() {
    wex_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
