#![cfg(feature = "server")]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dioxus::logger::tracing::info;

use crate::registry::{self, audit::Severity};

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Maintenance commands run instead of launching the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Registry snapshot as pretty JSON, to a file or stdout.
    ExportJson(Option<PathBuf>),
    /// Print registry audit findings; fail on any error.
    Audit,
}

impl Command {
    /// Reads a command from the arguments after the binary name. Anything
    /// unrecognised means "launch the dashboard".
    pub fn parse<I: Iterator<Item = String>>(mut args: I) -> Option<Command> {
        match args.next()?.as_str() {
            "export-json" => Some(Command::ExportJson(args.next().map(PathBuf::from))),
            "audit" => Some(Command::Audit),
            _ => None,
        }
    }

    pub fn run(&self) -> Result<()> {
        match self {
            Command::ExportJson(path) => export_json(path.as_deref()),
            Command::Audit => run_audit(),
        }
    }
}

fn export_json(path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&registry::snapshot())?;
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing snapshot to {}", path.display()))?;
            info!("[export-json] wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}")
                .context("writing snapshot to stdout")?;
        }
    }
    Ok(())
}

fn run_audit() -> Result<()> {
    let findings = registry::audit::audit();
    let mut errors = 0usize;
    for finding in &findings {
        let tag = match finding.severity() {
            Severity::Error => {
                errors += 1;
                "error"
            }
            Severity::Warning => "warning",
        };
        println!("{tag}: {finding}");
    }
    println!("{} finding(s), {} error(s)", findings.len(), errors);
    if errors > 0 {
        bail!("registry audit found {errors} error(s)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse(args(&["audit"])), Some(Command::Audit));
        assert_eq!(
            Command::parse(args(&["export-json", "out.json"])),
            Some(Command::ExportJson(Some(PathBuf::from("out.json"))))
        );
        assert_eq!(
            Command::parse(args(&["export-json"])),
            Some(Command::ExportJson(None))
        );
    }

    #[test]
    fn anything_else_launches() {
        assert_eq!(Command::parse(args(&[])), None);
        assert_eq!(Command::parse(args(&["--port", "8080"])), None);
    }

    #[test]
    fn export_writes_every_dataset() {
        let name = format!("mdm-snapshot-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        Command::ExportJson(Some(path.clone())).run().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["lifecycle_stages"][0]["name"], "Dormant");
        let keys = value.as_object().unwrap().len();
        assert_eq!(keys, registry::Dataset::ALL.len());
    }

    #[test]
    fn shipped_registry_passes_audit() {
        Command::Audit.run().unwrap();
    }
}
