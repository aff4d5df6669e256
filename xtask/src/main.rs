//! Build helpers for the ARTISANATTITUDE. web bundle
//!
//! Usage:
//!   cargo xtask build-web         # Release WASM + index.html + assets in dist/web
//!   cargo xtask build-web --dev   # Same, with a DEV marker in the page title
//!   cargo xtask package-web       # Zip dist/web for static hosting

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the binary crate's wasm output
const WASM_NAME: &str = "artisan-zine.wasm";

/// macroquad JS loader matching the macroquad version in Cargo.toml
const MQ_JS_BUNDLE_URL: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build helpers for the ARTISANATTITUDE. web bundle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the WASM bundle into dist/web
    BuildWeb {
        /// Mark the page title as a dev build
        #[arg(long)]
        dev: bool,
    },
    /// Build and zip dist/web into dist/artisan-zine-web.zip
    PackageWeb,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageWeb => package_web(),
    }
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().with_context(|| format!("Failed to execute {:?}", cmd.get_program()))?;
    if !status.success() {
        anyhow::bail!("{:?} failed with status: {}", cmd.get_program(), status);
    }
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("Reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(WASM_NAME),
        dist.join(WASM_NAME),
    )
    .context("WASM binary missing after build")?;

    std::fs::copy(root.join("docs/index.html"), dist.join("index.html")).context("docs/index.html missing")?;

    let mq_js = dist.join("mq_js_bundle.js");
    println!("Downloading {}...", MQ_JS_BUNDLE_URL);
    run_cmd(Command::new("curl").args(["-fsSL", "-o"]).arg(&mq_js).arg(MQ_JS_BUNDLE_URL))?;

    // Cover image and site.ron are fetched at runtime
    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    if dev {
        println!("Marking as DEV build...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        let index = index.replace("<title>ARTISANATTITUDE.", "<title>[DEV] ARTISANATTITUDE.");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

fn package_web() -> Result<()> {
    build_web(false)?;

    let dist = project_root()?.join("dist");
    let zip_name = "artisan-zine-web.zip";
    let zip_path = dist.join(zip_name);
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating {}...", zip_name);
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", &format!("../{}", zip_name), "."]),
    )?;

    println!("Package ready: dist/{}", zip_name);
    Ok(())
}
