use super::{
    ArgumentSpec, CompletionSpec, OptionSpec, ParserDirectives, Subcommand, Template,
};

pub const NAME: &str = "terragrunt";
pub const DESCRIPTION: &str = "Terragrunt CLI";

pub const RUN_ALL: &str = "run-all";

pub const LOG_LEVELS: [&str; 7] = ["panic", "fatal", "error", "warn", "info", "debug", "trace"];
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the Terragrunt completion spec on top of the delegate's subcommands.
///
/// The root subcommand list is the delegate's list, then [`aggregate_commands`],
/// then [`utility_commands`], in that order.
pub fn completion_spec(delegate_subcommands: &[Subcommand]) -> CompletionSpec {
    let subcommands = delegate_subcommands
        .iter()
        .cloned()
        .chain(aggregate_commands())
        .chain(utility_commands())
        .collect();

    CompletionSpec {
        name: NAME.to_owned(),
        description: DESCRIPTION.to_owned(),
        options: global_options(),
        subcommands,
        parser_directives: ParserDirectives {
            flags_are_posix_noncompliant: true,
        },
    }
}

fn flag(name: &str, description: &str) -> OptionSpec {
    OptionSpec::new(name, description).persistent()
}

fn path_flag(name: &str, description: &str) -> OptionSpec {
    flag(name, description).with_args(ArgumentSpec::template(Template::Filepaths))
}

pub fn global_options() -> Vec<OptionSpec> {
    vec![
        flag(
            "-help",
            "Show this help output, or the help for a specified subcommand",
        ),
        flag("-version", "Show the current terragrunt version"),
        path_flag(
            "--terragrunt-config",
            "Path to the Terragrunt config file. Default is terragrunt.hcl",
        ),
        path_flag(
            "--terragrunt-tfpath",
            "Path to the Terraform binary. Default is terraform (on PATH)",
        ),
        flag(
            "--terragrunt-no-auto-init",
            "Don't automatically run 'terraform init' during other terragrunt commands. You must run 'terragrunt init' manually",
        ),
        flag("--terragrunt-non-interactive", "Assume 'yes' for all prompts"),
        path_flag(
            "--terragrunt-working-dir",
            "The path to the Terraform templates. Default is current directory",
        ),
        path_flag(
            "--terragrunt-download-dir",
            "The path where to download Terraform code. Default is .terragrunt-cache in the working directory",
        ),
        path_flag(
            "--terragrunt-source",
            "Download Terraform configurations from the specified source into a temporary folder, and run Terraform in that temporary folder",
        ),
        flag(
            "--terragrunt-source-update",
            "Delete the contents of the temporary folder to clear out any old, cached source code before downloading new source code into it",
        ),
        flag(
            "--terragrunt-iam-role",
            "Assume the specified IAM role before executing Terraform. Can also be set via the TERRAGRUNT_IAM_ROLE environment variable",
        )
        .with_args(ArgumentSpec::named("iam-role-arn").with_description("AWS IAM role ARN")),
        flag(
            "--terragrunt-ignore-dependency-errors",
            "*-all commands continue processing components even if a dependency fails",
        ),
        flag(
            "--terragrunt-ignore-dependency-order",
            "*-all commands will be run disregarding the dependencie",
        ),
        flag(
            "--terragrunt-ignore-external-dependencies",
            "*-all commands will not attempt to include external dependencies",
        ),
        flag(
            "--terragrunt-include-external-dependencies",
            "*-all commands will include external dependencies",
        ),
        flag(
            "--terragrunt-parallelism",
            "*-all commands parallelism set to at most N module",
        )
        .with_args(ArgumentSpec::named("modules")),
        path_flag(
            "--terragrunt-exclude-dir",
            "Unix-style glob of directories to exclude when running *-all commands",
        ),
        path_flag(
            "--terragrunt-include-dir",
            "Unix-style glob of directories to include when running *-all command",
        ),
        flag("--terragrunt-check", "Enable check mode in the hclfmt command"),
        path_flag(
            "--terragrunt-hclfmt-file",
            "The path to a single terragrunt.hcl file that the hclfmt command should run on",
        ),
        flag(
            "--terragrunt-override-attr",
            "A key=value attribute to override in a provider block as part of the aws-provider-patch command. May be specified multiple times",
        )
        .with_args(ArgumentSpec::named("attr=value").with_description("ATTR=VALUE")),
        flag(
            "--terragrunt-debug",
            "Write terragrunt-debug.tfvars to working folder to help root-cause issues",
        ),
        flag(
            "--terragrunt-log-level",
            "Sets the logging level for Terragrunt",
        )
        .with_args(
            ArgumentSpec::named("level")
                .with_suggestions(&LOG_LEVELS)
                .with_default(DEFAULT_LOG_LEVEL),
        ),
    ]
}

/// `run-all` and the actions it fans out over every module of a stack.
pub fn aggregate_commands() -> Vec<Subcommand> {
    vec![Subcommand::new(
        RUN_ALL,
        "Run a terraform command against a 'stack' by running the specified command in each subfolder. E.g., to run 'terragrunt apply' in each subfolder, use 'terragrunt run-all apply",
    )
    .with_subcommands(vec![
        Subcommand::new(
            "plan",
            "Display the plans of a ‘stack’ by running ‘terragrunt plan’ in each subfolder",
        ),
        Subcommand::new(
            "apply",
            "Apply a ‘stack’ by running ‘terragrunt apply’ in each subfolder",
        ),
        Subcommand::new(
            "output",
            "Display the outputs of a ‘stack’ by running ‘terragrunt output’ in each subfolder",
        ),
        Subcommand::new(
            "destroy",
            "Destroy a ‘stack’ by running ‘terragrunt destroy’ in each subfolder",
        ),
        // Wording mirrors `destroy` upstream; kept as published.
        Subcommand::new(
            "validate",
            "Validate a ‘stack’ by running ‘terragrunt destroy’ in each subfolder",
        ),
    ])]
}

/// Terragrunt-only commands with no Terraform counterpart.
pub fn utility_commands() -> Vec<Subcommand> {
    vec![
        Subcommand::new(
            "terragrunt-info",
            "Emits limited terragrunt state on stdout in a JSON format and exits",
        ),
        Subcommand::new(
            "graph-dependencies",
            "Prints the terragrunt dependency graph, in DOT format, to stdout",
        ),
        Subcommand::new(
            "hclfmt",
            "Recursively find hcl files and rewrite them into a canonical format",
        ),
        Subcommand::new(
            "validate-inputs",
            "Emits information about the input variables that are configured with the given terragrunt configuration",
        )
        .with_options(vec![OptionSpec::new(
            "--terragrunt-strict-validate",
            "Enable strict mode",
        )]),
        Subcommand::new(
            "render-json",
            "Render out the final interpreted terragrunt.hcl file",
        )
        .with_options(vec![OptionSpec::new(
            "--terragrunt-json-out",
            "Configure where terragrunt renders out the json representation",
        )]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const GLOBAL_FLAGS: [&str; 23] = [
        "-help",
        "-version",
        "--terragrunt-config",
        "--terragrunt-tfpath",
        "--terragrunt-no-auto-init",
        "--terragrunt-non-interactive",
        "--terragrunt-working-dir",
        "--terragrunt-download-dir",
        "--terragrunt-source",
        "--terragrunt-source-update",
        "--terragrunt-iam-role",
        "--terragrunt-ignore-dependency-errors",
        "--terragrunt-ignore-dependency-order",
        "--terragrunt-ignore-external-dependencies",
        "--terragrunt-include-external-dependencies",
        "--terragrunt-parallelism",
        "--terragrunt-exclude-dir",
        "--terragrunt-include-dir",
        "--terragrunt-check",
        "--terragrunt-hclfmt-file",
        "--terragrunt-override-attr",
        "--terragrunt-debug",
        "--terragrunt-log-level",
    ];

    fn delegate() -> Vec<Subcommand> {
        vec![
            Subcommand::new("init", "Prepare your working directory for other commands"),
            Subcommand::new("plan", "Show changes required by the current configuration"),
        ]
    }

    fn names(cmds: &[Subcommand]) -> Vec<&str> {
        cmds.iter().map(|cmd| cmd.name.as_str()).collect()
    }

    #[test]
    fn every_global_flag_appears_once_and_persists() {
        let spec = completion_spec(&delegate());

        for flag in GLOBAL_FLAGS {
            let matching: Vec<_> = spec
                .options
                .iter()
                .filter(|opt| opt.name.matches(flag))
                .collect();
            assert_eq!(matching.len(), 1, "{} should be declared once", flag);
            assert!(matching[0].is_persistent, "{} should be persistent", flag);
        }
        assert_eq!(spec.options.len(), GLOBAL_FLAGS.len());
    }

    #[test]
    fn root_subcommands_follow_merge_order() {
        let spec = completion_spec(&delegate());

        assert_eq!(
            names(&spec.subcommands),
            vec![
                "init",
                "plan",
                "run-all",
                "terragrunt-info",
                "graph-dependencies",
                "hclfmt",
                "validate-inputs",
                "render-json",
            ]
        );
        assert_eq!(spec.subcommands[..2], delegate()[..]);
    }

    #[test]
    fn run_all_lists_the_five_actions() {
        let spec = completion_spec(&[]);
        let run_all = spec.subcommand(RUN_ALL).unwrap();

        assert_eq!(
            names(&run_all.subcommands),
            vec!["plan", "apply", "output", "destroy", "validate"]
        );
        assert!(run_all
            .subcommands
            .iter()
            .all(|cmd| !cmd.description.is_empty()));
    }

    #[test]
    fn log_level_suggestions_and_default() {
        let spec = completion_spec(&[]);
        let args = spec
            .option("--terragrunt-log-level")
            .and_then(|opt| opt.args.as_ref())
            .unwrap();

        assert_eq!(
            args.suggestions.as_deref().unwrap(),
            ["panic", "fatal", "error", "warn", "info", "debug", "trace"]
        );
        assert_eq!(args.default.as_deref(), Some("warn"));
        assert_eq!(args.name.as_deref(), Some("level"));
    }

    #[test]
    fn path_flags_use_filepaths_template() {
        let spec = completion_spec(&[]);
        for flag in [
            "--terragrunt-config",
            "--terragrunt-tfpath",
            "--terragrunt-working-dir",
            "--terragrunt-download-dir",
            "--terragrunt-source",
            "--terragrunt-exclude-dir",
            "--terragrunt-include-dir",
            "--terragrunt-hclfmt-file",
        ] {
            let template = spec
                .option(flag)
                .and_then(|opt| opt.args.as_ref())
                .and_then(|args| args.template);
            assert_eq!(template, Some(Template::Filepaths), "{}", flag);
        }
    }

    #[test]
    fn names_are_unique_per_scope() {
        let spec = completion_spec(&delegate());

        let root_flags: Vec<_> = spec.options.iter().flat_map(|o| o.name.aliases()).collect();
        assert_eq!(root_flags.iter().duplicates().count(), 0);
        assert_eq!(names(&spec.subcommands).iter().duplicates().count(), 0);

        for cmd in &spec.subcommands {
            let local: Vec<_> = cmd.options.iter().flat_map(|o| o.name.aliases()).collect();
            assert_eq!(local.iter().duplicates().count(), 0, "{}", cmd.name);
            assert_eq!(names(&cmd.subcommands).iter().duplicates().count(), 0);
        }
    }

    #[test]
    fn utility_options_stay_local() {
        let spec = completion_spec(&[]);
        let strict = spec.subcommand("validate-inputs").unwrap();
        let render = spec.subcommand("render-json").unwrap();

        assert_eq!(strict.options.len(), 1);
        assert!(!strict.options[0].is_persistent);
        assert_eq!(render.options.len(), 1);
        assert!(!render.options[0].is_persistent);
        assert!(spec.option("--terragrunt-strict-validate").is_none());
    }

    #[test]
    fn construction_is_idempotent() {
        assert_eq!(completion_spec(&delegate()), completion_spec(&delegate()));
    }

    #[test]
    fn root_declares_posix_noncompliant_flags() {
        let spec = completion_spec(&[]);
        assert_eq!(spec.name, "terragrunt");
        assert_eq!(spec.description, "Terragrunt CLI");
        assert!(spec.parser_directives.flags_are_posix_noncompliant);
    }
}
