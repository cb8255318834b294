use crate::repo;
use anyhow::Result;
use std::process::{Command, Stdio};

const STEPS: &[(&str, &[&str])] = &[
    ("cargo fetch", &["fetch"]),
    ("cargo check --all-targets", &["check", "--all-targets"]),
    ("cargo test --all", &["test", "--all"]),
    ("cargo fmt -- --check", &["fmt", "--", "--check"]),
    (
        "cargo clippy --all-targets -- -D warnings",
        &["clippy", "--all-targets", "--", "-D", "warnings"],
    ),
];

const RELEASE_STEP: (&str, &[&str]) = ("cargo build --release", &["build", "--release"]);

pub fn run(skip_release: bool) -> Result<()> {
    let root = repo::repo_root()?;
    for (label, args) in STEPS {
        run_step(&root, label, args)?;
    }
    if skip_release {
        eprintln!("==> {} (skipped)", RELEASE_STEP.0);
    } else {
        run_step(&root, RELEASE_STEP.0, RELEASE_STEP.1)?;
    }
    Ok(())
}

fn run_step(root: &std::path::Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
