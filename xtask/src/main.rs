//! Development automation for master-manifests
//!
//! Usage: cargo xtask <command>
//!
//! - test: Run tests
//! - samples: Render every bundled sample template through the CLI
//! - ci: Run format, clippy, tests and samples

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

/// Bundled sample templates: (kind, resource name)
const SAMPLES: &[(&str, &str)] = &[
    ("service", "apiserver"),
    ("ingress", "k8sniff"),
    ("deployment", "etcd"),
    ("apiserver", "apiserver"),
    ("pvc", "etcd"),
];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation for master-manifests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run tests
    Test {
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Render the sample templates under resources/
    Samples,
    /// Run CI checks (format, clippy, test, samples)
    Ci,
    /// Format code
    Format {
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Test { integration } => test(&sh, integration),
        Commands::Samples => samples(&sh),
        Commands::Ci => ci(&sh),
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    println!("🧪 Running tests...");

    if integration {
        cmd!(sh, "cargo test --test '*'").run()?;
    } else {
        cmd!(sh, "cargo test --all").run()?;
    }

    println!("✅ All tests passed");
    Ok(())
}

fn samples(sh: &Shell) -> Result<()> {
    println!("📄 Rendering sample templates...");

    // The apiserver sample uses an overwrite host so no DNS lookup happens.
    for (kind, name) in SAMPLES {
        cmd!(
            sh,
            "cargo run --quiet -- render --kind {kind} --name {name}
                --resources-path resources --cluster-name sample
                --address-url https://sample.example.com:6443 --node-port 30443
                --datacenter dc1 --external-url seed.example.com
                --overwrite-host 10.0.0.5"
        )
        .quiet()
        .ignore_stdout()
        .run()
        .with_context(|| format!("Failed to render {} sample '{}'", kind, name))?;
        println!("  ✓ {} ({})", name, kind);
    }

    println!("✅ All samples rendered");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔍 Running CI checks...");

    println!("\n📝 Checking formatting...");
    format(sh, true)?;

    println!("\n🔧 Running clippy...");
    clippy(sh)?;

    println!("\n🧪 Running tests...");
    test(sh, false)?;

    println!();
    samples(sh)?;

    println!("\n✅ All CI checks passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
        println!("✅ Code formatting is correct");
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
        println!("✅ Code formatted");
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(
        sh,
        "cargo clippy --all-targets --all-features -- -D warnings"
    )
    .run()?;
    println!("✅ Clippy checks passed");
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
}
