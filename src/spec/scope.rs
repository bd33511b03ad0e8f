use anyhow::{anyhow, Error};

use super::{CompletionSpec, OptionSpec, Subcommand};

/// Options and subcommands visible after a path of subcommand words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope<'a> {
    pub path: Vec<&'a str>,
    pub options: Vec<&'a OptionSpec>,
    pub subcommands: Vec<&'a Subcommand>,
}

impl CompletionSpec {
    /// Resolves `path` from the root.
    ///
    /// Persistent options declared on the root or any ancestor stay visible
    /// below it; options declared on the final node are visible regardless of
    /// persistence. A flag declared closer to the final node shadows an
    /// inherited one of the same name.
    ///
    /// Words starting with `-` are matched against the options visible at that
    /// point and skipped, together with their value when the option takes an
    /// argument and it wasn't given as `--flag=value`.
    pub fn scope<'a>(&'a self, path: &[&str]) -> Result<Scope<'a>, Error> {
        let mut inherited: Vec<&OptionSpec> = Vec::new();
        let mut local: &[OptionSpec] = &self.options;
        let mut children: &[Subcommand] = &self.subcommands;
        let mut resolved = Vec::with_capacity(path.len());
        let mut parent = self.name.as_str();

        let mut words = path.iter();
        while let Some(word) = words.next() {
            if word.starts_with('-') {
                let (flag, inline_value) = match word.split_once('=') {
                    Some((flag, _)) => (flag, true),
                    None => (*word, false),
                };
                let opt = local
                    .iter()
                    .chain(inherited.iter().copied())
                    .find(|opt| opt.name.matches(flag))
                    .ok_or_else(|| anyhow!("unknown option {:?} under {:?}", flag, parent))?;
                if opt.args.is_some() && !inline_value {
                    words.next();
                }
                continue;
            }

            let cmd = children
                .iter()
                .find(|cmd| cmd.name == *word)
                .ok_or_else(|| anyhow!("unknown subcommand {:?} under {:?}", word, parent))?;

            inherited.extend(local.iter().filter(|opt| opt.is_persistent));
            local = &cmd.options;
            children = &cmd.subcommands;
            resolved.push(cmd.name.as_str());
            parent = cmd.name.as_str();
        }

        let mut options: Vec<&OptionSpec> = Vec::new();
        for (i, opt) in inherited.iter().copied().enumerate() {
            // A flag redeclared further down shadows this one.
            if !shadowed(opt, inherited[i + 1..].iter().copied().chain(local)) {
                options.push(opt);
            }
        }
        options.extend(local.iter());

        Ok(Scope {
            path: resolved,
            options,
            subcommands: children.iter().collect(),
        })
    }
}

fn shadowed<'b>(opt: &OptionSpec, mut later: impl Iterator<Item = &'b OptionSpec>) -> bool {
    let aliases = opt.name.aliases();
    later.any(|other| aliases.iter().any(|alias| other.name.matches(alias)))
}
