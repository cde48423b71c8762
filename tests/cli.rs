use assert_cmd::Command;
use predicates::str::{contains, is_empty};
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("feed-fetcher").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("FEED_FETCHER_TIMEOUT_SECS")
        .env_remove("FEED_FETCHER_CONNECT_TIMEOUT_SECS")
        .env_remove("FEED_FETCHER_USER_AGENT");
    cmd
}

fn fixture_url(dir: &TempDir, name: &str) -> String {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name);
    let target = dir.path().join(name);
    std::fs::copy(&source, &target).expect("copy fixture");
    reqwest::Url::from_file_path(&target)
        .expect("absolute path converts to url")
        .to_string()
}

#[test]
fn no_arguments_is_usage_error() {
    cmd()
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Usage:"));
}

#[test]
fn two_arguments_is_usage_error() {
    cmd()
        .args(["https://a.example/feed.xml", "https://b.example/feed.xml"])
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Usage:"));
}

#[test]
fn help_with_extra_argument_is_still_usage_error() {
    cmd()
        .args(["--help", "https://a.example/feed.xml"])
        .assert()
        .code(1)
        .stderr(contains("Usage:"));
}

#[test]
fn help_alone_succeeds() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("<URL>"));
}

#[test]
fn prints_rss_feed() {
    let dir = TempDir::new().expect("create temp dir");
    let url = fixture_url(&dir, "sample.rss.xml");

    cmd().arg(&url).assert().success().stdout(
        "Example Feed\n  Post A posted on 2024-01-01T00:00:00Z\n  Post B posted on 2024-01-02T00:00:00Z\n",
    );
}

#[test]
fn prints_atom_feed_in_document_order() {
    let dir = TempDir::new().expect("create temp dir");
    let url = fixture_url(&dir, "sample.atom.xml");

    let output = cmd().arg(&url).assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Example Atom Feed");
    assert_eq!(lines[1], "  First entry posted on 2024-03-01T09:00:00Z");
    assert_eq!(lines[3], "  Third entry posted on 2024-03-03T12:30:00Z");
}

#[test]
fn repeated_runs_are_identical() {
    let dir = TempDir::new().expect("create temp dir");
    let url = fixture_url(&dir, "sample.jsonfeed.json");

    let first = cmd().arg(&url).assert().success().get_output().stdout.clone();
    let second = cmd().arg(&url).assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
}

#[test]
fn html_document_is_parse_error_without_output() {
    let dir = TempDir::new().expect("create temp dir");
    let url = fixture_url(&dir, "not-a-feed.html");

    cmd()
        .arg(&url)
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("parse error"));
}

#[test]
fn unreachable_host_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("local addr");
    drop(listener);

    cmd()
        .arg(format!("http://{address}/feed.xml"))
        .env("FEED_FETCHER_CONNECT_TIMEOUT_SECS", "2")
        .env("FEED_FETCHER_TIMEOUT_SECS", "5")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("network error"));
}

#[test]
fn invalid_timeout_is_reported() {
    cmd()
        .arg("https://example.com/feed.xml")
        .env("FEED_FETCHER_TIMEOUT_SECS", "never")
        .assert()
        .code(1)
        .stderr(contains("invalid configuration"));
}

#[cfg(target_os = "linux")]
#[test]
fn help_exits_nonzero_when_stdout_is_full() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("open /dev/full");
    let status = std::process::Command::new(assert_cmd::cargo::cargo_bin("feed-fetcher"))
        .arg("--help")
        .stdout(full)
        .stderr(std::process::Stdio::null())
        .status()
        .expect("run binary");

    assert_eq!(status.code(), Some(1));
}

#[test]
fn invalid_user_agent_is_reported_as_configuration() {
    cmd()
        .arg("https://example.com/feed.xml")
        .env("FEED_FETCHER_USER_AGENT", "reader\u{7f}/1")
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("invalid configuration"));
}
