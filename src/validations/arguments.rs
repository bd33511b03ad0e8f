use itertools::Itertools;

use super::{SpecValidationContext, ARGUMENTS};
use crate::spec::ArgumentSpec;

pub fn verify_argument_spec(ctx: &mut SpecValidationContext, field: &str, args: &ArgumentSpec) {
    let Some(suggestions) = &args.suggestions else {
        return;
    };

    let duplicates: Vec<&String> = suggestions.iter().duplicates().collect();
    if duplicates.is_empty() {
        ctx.valid_field(
            ARGUMENTS,
            field,
            format!("{} unique suggestions", suggestions.len()),
        );
    } else {
        ctx.invalid_field(
            ARGUMENTS,
            field,
            format!("duplicate suggestions {:?}", duplicates),
        );
    }

    if let Some(default) = &args.default {
        if suggestions.contains(default) {
            ctx.valid_field(ARGUMENTS, field, format!("default {:?} is suggested", default));
        } else {
            ctx.invalid_field(
                ARGUMENTS,
                field,
                format!("default {:?} is not a suggestion", default),
            );
        }
    }
}
