use anyhow::Error;
use log::debug;
use std::path::{Path, PathBuf};

use super::{CompletionSpec, Subcommand};
use crate::utils::{load_document, load_json};

/// Terraform's own completion spec, shipped with the binary
pub const BUNDLED_TERRAFORM: &str = include_str!("terraform.json");

/// Where the delegate tool's spec comes from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DelegateSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl DelegateSource {
    pub fn describe(&self) -> String {
        match self {
            DelegateSource::Bundled => "bundled terraform spec".to_owned(),
            DelegateSource::File(path) => path.display().to_string(),
        }
    }

    /// Loads the delegate spec and returns its subcommands.
    pub fn subcommands(&self) -> Result<Vec<Subcommand>, Error> {
        let spec = match self {
            DelegateSource::Bundled => bundled()?,
            DelegateSource::File(path) => from_file(path)?,
        };
        debug!(
            "[delegate] {} subcommands from {}",
            spec.subcommands.len(),
            self.describe()
        );
        Ok(spec.subcommands)
    }
}

pub fn bundled() -> Result<CompletionSpec, Error> {
    load_json(BUNDLED_TERRAFORM)
}

pub fn from_file(path: &Path) -> Result<CompletionSpec, Error> {
    load_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Template;
    use tempfile::TempDir;

    fn write_temp(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn bundled_terraform_keeps_help_order() {
        let subcommands = DelegateSource::Bundled.subcommands().unwrap();
        let names: Vec<_> = subcommands.iter().map(|cmd| cmd.name.as_str()).collect();

        assert_eq!(&names[..5], ["init", "validate", "plan", "apply", "destroy"]);
        assert!(names.contains(&"workspace"));
        assert!(subcommands.iter().all(|cmd| !cmd.description.is_empty()));
    }

    #[test]
    fn bundled_terraform_carries_subcommand_options() {
        let subcommands = DelegateSource::Bundled.subcommands().unwrap();
        let plan = subcommands.iter().find(|cmd| cmd.name == "plan").unwrap();
        let var_file = plan
            .options
            .iter()
            .find(|opt| opt.name.matches("-var-file"))
            .unwrap();

        assert_eq!(
            var_file.args.as_ref().and_then(|args| args.template),
            Some(Template::Filepaths)
        );
        assert!(plan.options.iter().all(|opt| !opt.is_persistent));

        let init = subcommands.iter().find(|cmd| cmd.name == "init").unwrap();
        assert!(init.options.iter().any(|opt| opt.name.matches("-upgrade")));
    }

    #[test]
    fn loads_json_with_only_subcommands() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(
            &dir,
            "delegate.json",
            r#"{ "subcommands": [{ "name": "init", "description": "Init" }] }"#,
        );
        let subcommands = DelegateSource::File(path).subcommands().unwrap();

        assert_eq!(subcommands, vec![Subcommand::new("init", "Init")]);
    }

    #[test]
    fn loads_toml_with_nested_subcommands() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(
            &dir,
            "delegate.toml",
            r#"
[[subcommands]]
name = "state"
description = "Advanced state management"

[[subcommands.subcommands]]
name = "list"
description = "List resources in the state"
"#,
        );
        let subcommands = DelegateSource::File(path).subcommands().unwrap();

        assert_eq!(subcommands.len(), 1);
        assert_eq!(subcommands[0].subcommands[0].name, "list");
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "delegate.yaml", "subcommands: []");
        let err = DelegateSource::File(path).subcommands().unwrap_err();

        assert!(format!("{:#}", err).contains("unsupported document format"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert!(DelegateSource::File(path).subcommands().is_err());
    }
}
