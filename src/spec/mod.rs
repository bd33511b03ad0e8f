use serde::{Deserialize, Serialize};

pub mod delegate;
pub mod scope;
pub mod terragrunt;

pub use delegate::DelegateSource;
pub use scope::Scope;

/// Completion source the host fills in for an argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Filepaths,
    Folders,
    History,
    Help,
}

/// Option name, either a single flag or a set of aliases
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Name {
    Single(String),
    Aliases(Vec<String>),
}

impl Name {
    pub fn aliases(&self) -> Vec<&str> {
        match self {
            Name::Single(name) => vec![name.as_str()],
            Name::Aliases(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn matches(&self, flag: &str) -> bool {
        self.aliases().contains(&flag)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::Single(name.to_owned())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArgumentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ArgumentSpec {
    pub fn template(template: Template) -> Self {
        ArgumentSpec {
            template: Some(template),
            ..Default::default()
        }
    }

    pub fn named(name: &str) -> Self {
        ArgumentSpec {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = Some(suggestions.iter().map(|s| (*s).to_owned()).collect());
        self
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_owned());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSpec {
    pub name: Name,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_persistent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<ArgumentSpec>,
}

impl OptionSpec {
    pub fn new(name: impl Into<Name>, description: &str) -> Self {
        OptionSpec {
            name: name.into(),
            description: description.to_owned(),
            is_persistent: false,
            args: None,
        }
    }

    pub fn persistent(mut self) -> Self {
        self.is_persistent = true;
        self
    }

    pub fn with_args(mut self, args: ArgumentSpec) -> Self {
        self.args = Some(args);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcommand {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<Subcommand>,
}

impl Subcommand {
    pub fn new(name: &str, description: &str) -> Self {
        Subcommand {
            name: name.to_owned(),
            description: description.to_owned(),
            options: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Vec<OptionSpec>) -> Self {
        self.options = options;
        self
    }

    pub fn with_subcommands(mut self, subcommands: Vec<Subcommand>) -> Self {
        self.subcommands = subcommands;
        self
    }
}

/// Tokenizer hints passed through to the completion host
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserDirectives {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub flags_are_posix_noncompliant: bool,
}

/// Root record handed to the completion host.
///
/// Every field defaults so that a delegate document carrying only
/// `subcommands` deserializes into one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletionSpec {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<Subcommand>,
    pub parser_directives: ParserDirectives,
}

#[cfg(test)]
impl CompletionSpec {
    pub fn subcommand(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands.iter().find(|cmd| cmd.name == name)
    }

    pub fn option(&self, flag: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|opt| opt.name.matches(flag))
    }
}
