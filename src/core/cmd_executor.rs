use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{core::cmd::Cmd, core::raw_msg::RawMsg, infrastructure::export::export_csv};

const EXPORT_LABEL: &str = "Export";

/// Executes commands and reports their outcome back as raw messages
#[derive(Clone)]
pub struct CmdExecutor {
    raw_msg_sender: mpsc::UnboundedSender<RawMsg>,
}

impl CmdExecutor {
    pub fn new(raw_msg_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self { raw_msg_sender }
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ExportRows { dataset, path } => {
                let report = match export_csv(dataset, path) {
                    Ok(rows) => RawMsg::SystemMessage {
                        label: EXPORT_LABEL.to_string(),
                        message: format!("Wrote {rows} rows to {}", path.display()),
                    },
                    Err(e) => {
                        tracing::error!(path = %path.display(), "export failed: {e:#}");
                        RawMsg::Error {
                            label: EXPORT_LABEL.to_string(),
                            message: format!("{e:#}"),
                        }
                    }
                };
                self.raw_msg_sender.send(report)?;
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    tracing::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::complaint::{ComplaintRecord, Dataset};

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<RawMsg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CmdExecutor::new(tx), rx)
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("complaintui-executor-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_export_reports_success() {
        let (executor, mut rx) = create_test_executor();
        let path = scratch_path("ok.csv");
        let cmd = Cmd::ExportRows {
            dataset: Arc::new(Dataset::from_records(vec![ComplaintRecord::new(
                1.0, "Noise", "QUEENS",
            )])),
            path: path.clone(),
        };

        executor.execute_command(&cmd).expect("command runs");
        assert_eq!(
            rx.try_recv().expect("report sent"),
            RawMsg::SystemMessage {
                label: "Export".to_string(),
                message: format!("Wrote 1 rows to {}", path.display()),
            }
        );
        assert!(path.exists());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_export_failure_is_reported_not_raised() {
        let (executor, mut rx) = create_test_executor();
        let blocker = scratch_path("blocker");
        std::fs::create_dir_all(blocker.parent().expect("parent")).expect("scratch dir");
        std::fs::write(&blocker, "file").expect("blocker file");

        // A regular file cannot be a parent directory
        let cmd = Cmd::ExportRows {
            dataset: Arc::new(Dataset::default()),
            path: blocker.join("rows.csv"),
        };
        let log = executor.execute_commands(&[cmd]);
        assert_eq!(log, vec!["✓ Executed: ExportRows".to_string()]);
        assert!(matches!(
            rx.try_recv().expect("report sent"),
            RawMsg::Error { label, .. } if label == "Export"
        ));
        let _ = std::fs::remove_file(blocker);
    }

    #[test]
    fn test_closed_channel_is_an_error() {
        let (executor, rx) = create_test_executor();
        drop(rx);
        let cmd = Cmd::ExportRows {
            dataset: Arc::new(Dataset::default()),
            path: scratch_path("closed.csv"),
        };
        assert!(executor.execute_command(&cmd).is_err());
        let _ = std::fs::remove_file(scratch_path("closed.csv"));
    }
}
