use itertools::Itertools;

use super::{SpecValidationContext, NAMES};
use crate::spec::{OptionSpec, Subcommand};

/// Option aliases and subcommand names must be unique within one scope.
pub fn verify_unique_names(
    ctx: &mut SpecValidationContext,
    scope: &str,
    options: &[OptionSpec],
    subcommands: &[Subcommand],
) {
    let duplicate_flags: Vec<&str> = options
        .iter()
        .flat_map(|opt| opt.name.aliases())
        .duplicates()
        .collect();
    let duplicate_cmds: Vec<&str> = subcommands
        .iter()
        .map(|cmd| cmd.name.as_str())
        .duplicates()
        .collect();

    for flag in &duplicate_flags {
        ctx.invalid_field(NAMES, scope, format!("duplicate option {:?}", flag));
    }
    for name in &duplicate_cmds {
        ctx.invalid_field(NAMES, scope, format!("duplicate subcommand {:?}", name));
    }

    if duplicate_flags.is_empty() && duplicate_cmds.is_empty() {
        ctx.valid_field(
            NAMES,
            scope,
            format!(
                "{} options and {} subcommands are unique",
                options.len(),
                subcommands.len()
            ),
        );
    }
}
