use anyhow::Error;
use log::info;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::spec::terragrunt::completion_spec;
use crate::spec::{CompletionSpec, DelegateSource};

pub static DELEGATE_ENV: &str = "TERRAGRUNT_COMPLETION_DELEGATE";

pub struct Context {
    delegate: DelegateSource,
}

impl Context {
    pub fn init(delegate_flag: Option<PathBuf>) -> Context {
        let delegate = select_delegate(delegate_flag, std::env::var_os(DELEGATE_ENV));
        info!("Using delegate spec: {}", delegate.describe());
        Context { delegate }
    }

    pub fn delegate(&self) -> &DelegateSource {
        &self.delegate
    }

    pub fn completion_spec(&self) -> Result<CompletionSpec, Error> {
        let delegate_subcommands = self.delegate.subcommands()?;
        Ok(completion_spec(&delegate_subcommands))
    }
}

/// `--delegate` wins over the environment; with neither, or with blank
/// values, the bundled terraform spec is used.
fn select_delegate(flag: Option<PathBuf>, env_value: Option<OsString>) -> DelegateSource {
    flag.filter(|path| !path.as_os_str().is_empty())
        .or_else(|| {
            env_value
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .map(DelegateSource::File)
        .unwrap_or_default()
}
