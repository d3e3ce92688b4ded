use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Builds `git` invocations scoped to one working directory.
///
/// Every method returns a ready-to-run [`Command`] so the caller decides how
/// the invocation is echoed and executed. Child processes run with
/// `GIT_TERMINAL_PROMPT=0`: an authentication failure must fail the step, not
/// park it on an interactive prompt.
pub(crate) struct Git {
    work_dir: Box<Path>,
}

impl Git {
    pub(crate) fn new(work_dir: &Path) -> Self {
        Git {
            work_dir: work_dir.into(),
        }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(&self.work_dir);
        command.env("GIT_TERMINAL_PROMPT", "0");
        command.stdin(Stdio::null());
        command
    }

    pub(crate) fn init(&self) -> Command {
        let mut command = self.command();
        command.arg("init");
        command
    }

    pub(crate) fn remote_add(&self, url: &str) -> Command {
        let mut command = self.command();
        command.args(["remote", "add", "origin"]).arg(url);
        command
    }

    /// Background compaction must not race the steps that follow `init`.
    pub(crate) fn disable_auto_gc(&self) -> Command {
        let mut command = self.command();
        command.args(["config", "--local", "gc.auto", "0"]);
        command
    }

    /// Fetch exactly one revision's worth of history for `branch`: protocol
    /// version 2, tags excluded, pruning enabled, submodules untouched,
    /// history depth 1.
    pub(crate) fn fetch_pinned(&self, revision: &str, branch: &str) -> Command {
        let mut command = self.command();
        command
            .args([
                "-c",
                "protocol.version=2",
                "fetch",
                "--no-tags",
                "--prune",
                "--no-recurse-submodules",
                "--depth=1",
                "origin",
            ])
            .arg(format!("+{revision}:refs/remotes/origin/{branch}"));
        command
    }

    /// Force-create (or reset) the local branch onto its freshly fetched
    /// remote-tracking ref, discarding any prior local state under that name.
    pub(crate) fn force_checkout(&self, branch: &str) -> Command {
        let mut command = self.command();
        command
            .args(["checkout", "--force", "-B"])
            .arg(branch)
            .arg(format!("refs/remotes/origin/{branch}"));
        command
    }

    pub(crate) fn head_commit(&self) -> Command {
        let mut command = self.command();
        command.args(["log", "-1", "--format=%H"]);
        command
    }
}
