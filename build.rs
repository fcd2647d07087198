use std::env;
use std::process::Command;

fn main() {
    // The report label carries the toolchain version, the closest
    // equivalent of a platform version string.
    let version = rustc_version().unwrap_or_else(|| "rustc (unknown)".to_string());
    println!("cargo:rustc-env=NUMBOUND_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}

// Returns `None` if the compiler cannot be queried.
fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|version| version.trim().to_string())
}
