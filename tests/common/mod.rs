use assert_cmd::Command;
use std::path::PathBuf;

pub type Result<A> = std::result::Result<A, Box<dyn std::error::Error>>;

pub const TARIFFS: &str = r#"[
  {"code": "A", "speed": "1.0", "name": "Slow", "active": true},
  {"code": "B", "speed": "max", "name": "Fast", "active": false}
]"#;

/// The binary under test, without a config file so nothing is read
/// from the home directory.
pub fn mk_cmd() -> Result<Command> {
    let mut cmd = Command::cargo_bin("yota-cli")?;
    cmd.env_remove("YOTA_CLI_API_URL")
        .args(["-f", &no_config_file().to_string_lossy()]);
    Ok(cmd)
}

/// Like `mk_cmd` but talking to `server` with valid credentials.
pub fn mk_api_cmd(server: &mockito::Server) -> Result<Command> {
    let mut cmd = mk_cmd()?;
    cmd.args(["--api-url", &server.url(), "-u", "joe", "-p", "secret"]);
    Ok(cmd)
}

pub fn no_config_file() -> PathBuf {
    std::env::temp_dir().join("yota-cli-tests-no-such-file.toml")
}

/// Writes a config file with the given content to a temp file.
pub fn config_file(name: &str, content: &str) -> Result<PathBuf> {
    let file = std::env::temp_dir().join(format!("yota-cli-test-{}.toml", name));
    std::fs::write(&file, content)?;
    Ok(file)
}

pub fn mock_login(server: &mut mockito::Server) -> mockito::Mock {
    server
        .mock("POST", "/api/login")
        .with_status(200)
        .with_header("set-cookie", "session=s1; Path=/")
        .create()
}

pub fn mock_tariffs(server: &mut mockito::Server) -> mockito::Mock {
    server
        .mock("GET", "/api/tariffs")
        .with_header("content-type", "application/json")
        .with_body(TARIFFS)
        .create()
}
