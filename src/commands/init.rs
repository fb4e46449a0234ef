//! Configuration setup command.
//!
//! Runs the interactive wizard, or writes the default configuration when
//! `--defaults` is given.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without asking
    #[arg(long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };

    config.save()?;
    msg_success!(Message::ConfigSaved);
    msg_info!(Message::StoreLocation(config.tasks_path()?.display().to_string()));
    Ok(())
}
