//! Table of commands, built once at startup and shared by reference with
//! whatever dispatches requests.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::Value;
use tracing::*;

use crate::command::{RpcCommand, check_arity};
use crate::config::HelpConfig;
use crate::errors::{RegistryError, RpcError, RpcResult};
use crate::params::Params;
use crate::request::{RpcRequest, RpcResponse};

/// Builder for a [`CommandRegistry`].
#[derive(Debug, Default)]
pub struct CommandRegistryBuilder {
    commands: BTreeMap<&'static str, Box<dyn RpcCommand>>,
}

impl CommandRegistryBuilder {
    /// Constructs an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command, failing if its name is already taken.
    pub fn register(mut self, cmd: impl RpcCommand + 'static) -> Result<Self, RegistryError> {
        let name = cmd.help().name;
        match self.commands.entry(name) {
            Entry::Occupied(_) => return Err(RegistryError::DuplicateCommand(name)),
            Entry::Vacant(e) => {
                e.insert(Box::new(cmd));
            }
        }

        debug!(%name, "registered rpc command");
        Ok(self)
    }

    /// Finishes the registry.
    pub fn build(self, help_config: HelpConfig) -> CommandRegistry {
        CommandRegistry {
            commands: self.commands,
            help_config,
        }
    }
}

/// Immutable table mapping command names to handlers.
#[derive(Debug)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Box<dyn RpcCommand>>,
    help_config: HelpConfig,
}

impl CommandRegistry {
    /// Returns whether a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Names of registered commands, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Names of registered commands in a category, sorted.
    pub fn names_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.commands
            .values()
            .filter(move |c| c.help().category == category)
            .map(|c| c.help().name)
    }

    /// Renders help for one command, or the list of all commands grouped by
    /// category if `name` is `None`.
    pub fn help(&self, name: Option<&str>) -> RpcResult<String> {
        match name {
            Some(name) => {
                let cmd = self.lookup(name)?;
                Ok(cmd.help().render(&self.help_config))
            }
            None => Ok(self.overview()),
        }
    }

    /// Runs a command by name.
    pub fn dispatch(&self, method: &str, params: &Params) -> RpcResult<Value> {
        let cmd = self.lookup(method)?;
        let help = cmd.help();

        trace!(%method, n_params = params.len(), "dispatching rpc command");
        check_arity(help, params, || help.render(&self.help_config))?;

        match cmd.execute(params) {
            Ok(v) => {
                debug!(%method, "rpc command succeeded");
                Ok(v)
            }
            Err(e) => {
                warn!(%method, code = e.code(), err = %e, "rpc command failed");
                Err(e)
            }
        }
    }

    /// Handles a whole request envelope, never failing.
    pub fn handle(&self, req: RpcRequest) -> RpcResponse {
        let res = Params::from_value(req.params).and_then(|p| self.dispatch(&req.method, &p));
        RpcResponse::from_result(req.id, res)
    }

    fn lookup(&self, name: &str) -> RpcResult<&dyn RpcCommand> {
        match self.commands.get(name) {
            Some(cmd) => Ok(cmd.as_ref()),
            None => {
                debug!(%name, "unknown rpc command");
                Err(RpcError::MethodNotFound(name.to_owned()))
            }
        }
    }

    fn overview(&self) -> String {
        let mut by_category: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for cmd in self.commands.values() {
            let help = cmd.help();
            by_category
                .entry(help.category)
                .or_default()
                .push(help.usage());
        }

        let mut sections = Vec::with_capacity(by_category.len());
        for (category, usages) in by_category {
            let mut section = format!("== {} ==", capitalize(category));
            for usage in usages {
                section.push('\n');
                section.push_str(&usage);
            }
            sections.push(section);
        }

        sections.join("\n\n")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
