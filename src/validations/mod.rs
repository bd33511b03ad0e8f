use serde::Serialize;
use std::collections::BTreeMap;

use crate::spec::{CompletionSpec, OptionSpec, Subcommand};

mod arguments;
mod names;

pub use arguments::verify_argument_spec;
pub use names::verify_unique_names;

pub const NAMES: &str = "names";
pub const DESCRIPTIONS: &str = "descriptions";
pub const ARGUMENTS: &str = "arguments";
pub const PERSISTENCE: &str = "persistence";

/// Checks and errors collected while walking a spec, grouped by check key
#[derive(Clone, Debug, Default, Serialize)]
pub struct SpecValidationContext {
    checks: BTreeMap<&'static str, Vec<String>>,
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl SpecValidationContext {
    pub fn checks(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.checks
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn valid_field(&mut self, key: &'static str, field: &str, message: String) {
        self.checks
            .entry(key)
            .or_default()
            .push(format!("{}: {}", field, message));
    }

    pub fn invalid_field(&mut self, key: &'static str, field: &str, message: String) {
        self.errors
            .entry(key)
            .or_default()
            .push(format!("{}: {}", field, message));
    }
}

#[macro_export]
macro_rules! required {
    ($ctx:expr, $key:expr, $field:expr, $value:expr) => {
        if $value.trim().is_empty() {
            $ctx.invalid_field($key, $field, "required".to_owned());
        } else {
            $ctx.valid_field($key, $field, "present".to_owned());
        }
    };
}

#[macro_export]
macro_rules! verify_equals {
    ($ctx:expr, $key:expr, $field:expr, $expected:expr, $actual:expr, $error_fmt:literal) => {
        if $actual == $expected {
            $ctx.valid_field($key, $field, "verified".to_owned());
        } else {
            $ctx.invalid_field($key, $field, format!($error_fmt, $expected, $actual));
        }
    };
}

pub trait Validate {
    /// Records checks for `self`, where `scope` names the enclosing command path.
    fn validate(&self, ctx: &mut SpecValidationContext, scope: &str);
}

impl Validate for CompletionSpec {
    fn validate(&self, ctx: &mut SpecValidationContext, _scope: &str) {
        let scope = self.name.as_str();
        required!(ctx, DESCRIPTIONS, scope, self.description);
        verify_unique_names(ctx, scope, &self.options, &self.subcommands);

        for opt in &self.options {
            let field = format!("{} {}", scope, opt.name.aliases().join("|"));
            verify_equals!(
                ctx,
                PERSISTENCE,
                &field,
                true,
                opt.is_persistent,
                "global options must be persistent: expected {} | actual {}"
            );
            opt.validate(ctx, scope);
        }
        for cmd in &self.subcommands {
            cmd.validate(ctx, scope);
        }
    }
}

impl Validate for Subcommand {
    fn validate(&self, ctx: &mut SpecValidationContext, scope: &str) {
        let scope = format!("{} {}", scope, self.name);
        required!(ctx, DESCRIPTIONS, &scope, self.description);
        verify_unique_names(ctx, &scope, &self.options, &self.subcommands);

        for opt in &self.options {
            opt.validate(ctx, &scope);
        }
        for cmd in &self.subcommands {
            cmd.validate(ctx, &scope);
        }
    }
}

impl Validate for OptionSpec {
    fn validate(&self, ctx: &mut SpecValidationContext, scope: &str) {
        let field = format!("{} {}", scope, self.name.aliases().join("|"));
        required!(ctx, DESCRIPTIONS, &field, self.description);
        if let Some(args) = &self.args {
            verify_argument_spec(ctx, &field, args);
        }
    }
}

/// Runs every structural check over `spec`.
pub fn validate(spec: &CompletionSpec) -> SpecValidationContext {
    let mut ctx = SpecValidationContext::default();
    spec.validate(&mut ctx, "");
    ctx
}
