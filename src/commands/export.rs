//! Export command.
//!
//! Writes the whole task list to a file in one of the supported formats. The
//! store itself is never modified.

use super::open_store;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    ///
    /// - **csv**: the interchange format accepted by `import`
    /// - **json**: the same records as the task file
    /// - **excel**: one worksheet with a bold header row
    /// - **text**: a readable report grouped by category
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file path
    ///
    /// Defaults to `tasks_export_YYYYMMDD_HHMMSS.<ext>` in the current
    /// directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, file: Option<&Path>) -> Result<()> {
    let (_, tasks) = open_store(file)?;
    export_tasks(tasks.all(), args.format, args.output)
}

/// Exports `tasks`, reporting an empty list instead of writing an empty file.
pub fn export_tasks(tasks: &[Task], format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    if tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    msg_info!(Message::ExportingData(format.to_string()));
    let exporter = Exporter::new(format, output);

    match exporter.export(tasks) {
        Ok(count) => {
            msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string(), count));
            Ok(())
        }
        Err(e) => {
            msg_error!(Message::ExportFailed(e.to_string()));
            Err(e.into())
        }
    }
}

pub fn prompt_format() -> Result<ExportFormat> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptExportFormat.to_string())
        .items(&ExportFormat::ALL)
        .default(0)
        .interact()?;
    Ok(ExportFormat::ALL[index])
}
