use crate::areas::checkout::Checkout;
use crate::areas::exec;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::process::Output;
use tokio::process::Command;

impl Checkout {
    /// Materialize a working copy of the requested repository at its pinned
    /// revision, with the minimum network transfer: no tags, no submodules,
    /// single-commit depth.
    ///
    /// Every step is fatal on error. There is no retry and no rollback: a
    /// failure leaves the destination partially initialized, and a re-run
    /// fails at the precondition check because the directory now exists.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let destination = self.request().destination().to_path_buf();
        let remote_url = self.request().remote_url().to_string();
        let branch = self.request().branch().as_str().to_string();
        let revision = self.request().revision().as_str().to_string();

        writeln!(
            self.writer(),
            "Checking out {} at revision {} into {}",
            remote_url,
            revision,
            destination.display()
        )?;

        // The destination is created fresh by this procedure; pre-existence
        // is an error, raised before any git invocation.
        anyhow::ensure!(
            !destination.exists(),
            "destination {} already exists",
            destination.display()
        );
        fs::create_dir_all(&destination)
            .with_context(|| format!("failed to create destination {}", destination.display()))?;

        self.run_step(self.git().init(), "git init").await?;
        self.run_step(self.git().remote_add(&remote_url), "git remote add")
            .await?;
        self.run_step(self.git().disable_auto_gc(), "git config")
            .await?;
        self.run_step(self.git().fetch_pinned(&revision, &branch), "git fetch")
            .await?;
        self.run_step(self.git().force_checkout(&branch), "git checkout")
            .await?;

        let output = self.run_step(self.git().head_commit(), "git log").await?;
        let head = String::from_utf8_lossy(&output.stdout).trim().to_string();
        writeln!(self.writer(), "{} {}", "HEAD is now at".green(), head)?;

        Ok(())
    }

    async fn run_step(&self, command: Command, label: &str) -> anyhow::Result<Output> {
        writeln!(
            self.writer(),
            "{} {}  [from {}]",
            "Run:".dimmed(),
            exec::render(&command),
            self.git().work_dir().display()
        )?;

        exec::run_tool(command, label).await
    }
}
