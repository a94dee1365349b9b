//! Sales redirect: a fixed external URL opened in the system browser.
//! No parameters, no callback; the process is detached and forgotten.

use std::process::{Command, Stdio};

/// Open `url` with the platform opener. Failure to spawn is reported;
/// whatever the browser does afterwards is not our concern.
pub fn open_sales_page(url: &str) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/c", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
