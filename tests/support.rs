use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the compiled `loadkit` binary with the provided args.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_loadkit<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = loadkit_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("LOADKIT_LOG")
        .env_remove("LOADKIT_BASE_URL")
        .output()
        .map_err(|err| format!("run loadkit failed: {}", err))
}

/// Stdout as UTF-8 with the trailing newline trimmed.
#[must_use]
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_owned()
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn loadkit_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_loadkit").map_or_else(
        || Err("CARGO_BIN_EXE_loadkit missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
