pub mod capture;
pub mod init;
pub mod link;
pub mod list;
pub mod manage;

pub use capture::{capture, CaptureArgs};
pub use init::{init, InitArgs};
pub use link::{link, status, unlink, LinkArgs};
pub use list::{list, show, ListArgs, ShowArgs};
pub use manage::{remove, rename, RemoveArgs, RenameArgs};

use crate::config::Config;
use anyhow::Result;
use pagekit_common::FileStorage;
use pagekit_prebuilt::PrebuiltRegistry;

/// Open the prebuilt registry configured for `cwd`
pub fn open_registry(cwd: &str) -> Result<PrebuiltRegistry<FileStorage>> {
    let config = Config::load(cwd)?;
    let storage = FileStorage::new(config.get_storage_dir(cwd));
    tracing::debug!("Using storage directory {}", storage.root().display());
    Ok(PrebuiltRegistry::load(storage)?)
}
