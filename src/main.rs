use anyhow::Result;
use clap::{Parser, Subcommand};
use mlir_dist::areas::checkout::Checkout;
use mlir_dist::areas::distribution::Distribution;
use mlir_dist::artifacts::build::settings::BuildSettings;
use mlir_dist::artifacts::checkout::request::CheckoutRequest;
use mlir_dist::commands::build::BuildOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mlir-dist",
    version = "0.1.0",
    author = "Arthur",
    about = "Build orchestration for LLVM/MLIR binary distributions",
    long_about = "This tool drives the LLVM/MLIR distribution pipeline: it materializes \
    pinned, depth-1 checkouts of the LLVM monorepo, configures and builds the tree \
    through CMake, and stages the resulting install directory as an importable \
    package layout.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "checkout-repo",
        about = "Materialize a pinned, depth-1 checkout of a repository",
        long_about = "This command creates the destination directory, initializes git state in it, \
        fetches exactly one revision's worth of history for the named branch, and force-creates \
        the local branch at that revision. The destination must not exist yet."
    )]
    CheckoutRepo {
        #[arg(index = 1, help = "Destination directory (must not exist yet)")]
        path: PathBuf,
        #[arg(index = 2, help = "URL of the repository to fetch from")]
        repo_url: String,
        #[arg(index = 3, help = "Branch to (re)create at the pinned revision")]
        branch: String,
        #[arg(index = 4, help = "File containing the pinned revision, surrounding whitespace ignored")]
        version_file: PathBuf,
    },
    #[command(
        name = "build",
        about = "Configure and build LLVM+MLIR, then stage the install tree",
        long_about = "This command runs the CMake configure and build steps for the LLVM+MLIR \
        tree and repackages the install directory as a distributable package layout. \
        Directories and build options are taken from the environment (REPO_DIR, \
        LLVM_REPO_DIR, RELEASE_MODE, LLVM_ASSERTIONS, USE_<TOOL>)."
    )]
    Build {
        #[arg(long = "cmake", help = "Discard any existing CMake cache before configuring")]
        rerun_cmake: bool,
        #[arg(long = "cmake-only", help = "Stop after the CMake configure step")]
        cmake_only: bool,
        #[arg(short, long, help = "Suppress report output")]
        quiet: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::CheckoutRepo {
            path,
            repo_url,
            branch,
            version_file,
        } => {
            let request = CheckoutRequest::from_cli(path, repo_url, branch, version_file)?;
            let mut checkout = Checkout::new(request, Box::new(std::io::stdout()));

            checkout.run().await?
        }
        Commands::Build {
            rerun_cmake,
            cmake_only,
            quiet,
        } => {
            let settings = BuildSettings::from_env()?;
            let writer: Box<dyn std::io::Write> = if *quiet {
                Box::new(std::io::sink())
            } else {
                Box::new(std::io::stdout())
            };
            let mut distribution = Distribution::new(settings, writer);

            distribution
                .build(BuildOptions::new(*rerun_cmake, *cmake_only))
                .await?
        }
    }

    Ok(())
}
