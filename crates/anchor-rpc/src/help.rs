//! Help text for commands.

use std::fmt::Write;

use crate::config::HelpConfig;

/// Description of one command argument.
#[derive(Clone, Debug)]
pub struct ArgHelp {
    /// Argument name, also its key when passed by name.
    pub name: &'static str,

    /// JSON type, e.g. `"string"`.
    pub ty: &'static str,

    /// Whether the argument must be provided.
    pub required: bool,

    /// Human readable description.
    pub description: &'static str,
}

/// Description of one field of a command's result object.
#[derive(Clone, Debug)]
pub struct ResultFieldHelp {
    /// Key in the result object.
    pub key: &'static str,

    /// JSON type, e.g. `"string"`.
    pub ty: &'static str,

    /// Human readable description.
    pub description: &'static str,
}

/// Everything needed to describe a command to a user.
#[derive(Clone, Debug)]
pub struct CommandHelp {
    /// Command name.
    pub name: &'static str,

    /// Category the command is listed under.
    pub category: &'static str,

    /// One paragraph describing what the command does.
    pub description: &'static str,

    /// Arguments, in positional order.
    pub args: Vec<ArgHelp>,

    /// Fields of the result object.
    pub result: Vec<ResultFieldHelp>,

    /// Example argument values, in positional order.
    pub example_args: Vec<&'static str>,
}

impl CommandHelp {
    /// Number of arguments that must be passed.
    pub fn required_args(&self) -> usize {
        self.args.iter().filter(|a| a.required).count()
    }

    /// Names of all arguments.
    pub fn arg_names(&self) -> Vec<&'static str> {
        self.args.iter().map(|a| a.name).collect()
    }

    /// The one-line usage, e.g. `anchorgamestate "state_hash"`.
    pub fn usage(&self) -> String {
        let mut out = self.name.to_owned();
        for arg in &self.args {
            if arg.required {
                let _ = write!(out, " \"{}\"", arg.name);
            } else {
                let _ = write!(out, " ( \"{}\" )", arg.name);
            }
        }
        out
    }

    /// Renders the full help text.
    pub fn render(&self, config: &HelpConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.usage());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.description);

        if !self.args.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Arguments:");
            for (i, arg) in self.args.iter().enumerate() {
                let req = if arg.required { "required" } else { "optional" };
                let _ = writeln!(
                    out,
                    "{}. {:<20} ({}, {}) {}",
                    i + 1,
                    arg.name,
                    arg.ty,
                    req,
                    arg.description
                );
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Result:");
        let _ = writeln!(out, "{{");
        for field in &self.result {
            let _ = writeln!(
                out,
                "  \"{}\" : {:<12} ({}) {}",
                field.key, field.ty, field.ty, field.description
            );
        }
        let _ = writeln!(out, "}}");

        let _ = writeln!(out);
        let _ = writeln!(out, "Examples:");
        let _ = writeln!(out, "{}", self.example_cli(config));
        let _ = writeln!(out, "{}", self.example_rpc(config));
        out
    }

    fn example_cli(&self, config: &HelpConfig) -> String {
        let mut out = format!("> {} {}", config.cli_name, self.name);
        for arg in &self.example_args {
            let _ = write!(out, " \"{arg}\"");
        }
        out
    }

    fn example_rpc(&self, config: &HelpConfig) -> String {
        let params = self
            .example_args
            .iter()
            .map(|a| format!("\"{a}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "> curl --user myusername --data-binary '{{\"jsonrpc\": \"2.0\", \"id\": \"curltest\", \"method\": \"{}\", \"params\": [{}]}}' -H 'content-type: application/json' {}",
            self.name, params, config.rpc_url
        )
    }
}
