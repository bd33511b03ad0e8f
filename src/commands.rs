use anyhow::Context as _;
use log::{debug, info, warn};

use crate::context::Context;
use crate::spec::{CompletionSpec, Scope};
use crate::types::{Commands, ReportFormat, SpecFormat};
use crate::validations::{self, SpecValidationContext};

pub(crate) fn execute_cmd(ctx: &Context, cmd: &Commands) -> Result<(), anyhow::Error> {
    let spec = ctx.completion_spec()?;
    debug!(
        "[spec] {} options, {} subcommands (delegate: {})",
        spec.options.len(),
        spec.subcommands.len(),
        ctx.delegate().describe()
    );

    let output = match cmd {
        Commands::Spec { format, compact } => {
            info!("Rendering completion spec");
            render_spec(&spec, *format, *compact)?
        }
        Commands::Validate { format } => {
            info!("Validating completion spec");
            let report = validations::validate(&spec);
            println!("{}", render_report(&report, *format)?);
            return check_report(&report);
        }
        Commands::Scope { words } => {
            let path: Vec<&str> = words.iter().map(String::as_str).collect();
            info!("Resolving scope {:?}", path);
            render_scope(&spec.scope(&path)?)
        }
    };
    println!("{}", output);

    Ok(())
}

fn render_spec(
    spec: &CompletionSpec,
    format: SpecFormat,
    compact: bool,
) -> Result<String, anyhow::Error> {
    match format {
        SpecFormat::Json if compact => {
            serde_json::to_string(spec).with_context(|| "failed rendering JSON spec")
        }
        SpecFormat::Json => {
            serde_json::to_string_pretty(spec).with_context(|| "failed rendering JSON spec")
        }
        SpecFormat::Toml => toml::to_string(spec).with_context(|| "failed rendering TOML spec"),
    }
}

fn render_report(
    report: &SpecValidationContext,
    format: ReportFormat,
) -> Result<String, anyhow::Error> {
    Ok(match format {
        ReportFormat::Text => {
            let mut lines = Vec::new();
            for (key, checks) in report.checks() {
                lines.extend(checks.iter().map(|check| format!("✅ [{}] {}", key, check)));
            }
            for (key, errors) in report.errors() {
                lines.extend(errors.iter().map(|error| format!("⛔️ [{}] {}", key, error)));
            }
            lines.join("\n")
        }
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
        ReportFormat::Table => {
            let value = serde_json::to_value(report)?;
            json_to_table::json_to_table(&value).to_string()
        }
    })
}

fn check_report(report: &SpecValidationContext) -> Result<(), anyhow::Error> {
    if report.is_valid() {
        info!("Completion spec is valid");
        return Ok(());
    }
    for (key, errors) in report.errors() {
        for error in errors {
            warn!("[{}] {}", key, error);
        }
    }
    Err(anyhow::anyhow!(
        "completion spec has {} structural errors",
        report.error_count()
    ))
}

fn render_scope(scope: &Scope) -> String {
    let mut lines = Vec::new();
    for opt in &scope.options {
        let flag = opt.name.aliases().join(", ");
        let arg = opt
            .args
            .as_ref()
            .map(|args| format!(" <{}>", args.name.as_deref().unwrap_or("value")))
            .unwrap_or_default();
        lines.push(format!("{}{}\t{}", flag, arg, opt.description));
    }
    for cmd in &scope.subcommands {
        lines.push(format!("{}\t{}", cmd.name, cmd.description));
    }
    lines.join("\n")
}
