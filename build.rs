use std::process::Command;

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8(output.stdout).ok()
}

fn main() {
    let commit_hash = git_output(&["rev-parse", "--short=9", "HEAD"]);
    let commit_hash = commit_hash.as_deref().map(str::trim).unwrap_or("unknown");
    println!("cargo:rustc-env=COMMIT_HASH={}", commit_hash);

    let commit_date = git_output(&["show", "-s", "--format=%cd", "--date=short", "HEAD"]);
    let commit_date = commit_date.as_deref().map(str::trim).unwrap_or("unknown");
    println!("cargo:rustc-env=COMMIT_DATE={}", commit_date);
}
