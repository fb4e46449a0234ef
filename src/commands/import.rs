use super::{open_store, save_store};
use crate::db::tasks::Tasks;
use crate::libs::import::{import_csv, ImportSummary};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with a header row
    path: PathBuf,
}

pub fn cmd(args: ImportArgs, file: Option<&Path>) -> Result<()> {
    let (_, mut tasks) = open_store(file)?;

    let summary = run_import(&args.path, &mut tasks)?;
    if summary.imported > 0 {
        save_store(&tasks)?;
    }
    Ok(())
}

/// Imports a CSV file into `tasks` and reports the outcome. Saving is left to
/// the caller.
pub fn run_import(path: &Path, tasks: &mut Tasks) -> Result<ImportSummary> {
    match import_csv(path, tasks) {
        Ok(summary) => {
            msg_success!(Message::ImportCompleted(summary.imported, summary.skipped));
            Ok(summary)
        }
        Err(e) => {
            msg_error!(Message::ImportFailed(e.to_string()));
            Err(e.into())
        }
    }
}
