//! The interface every registered command implements.

use std::fmt;

use serde_json::Value;

use crate::errors::{RpcError, RpcResult};
use crate::help::CommandHelp;
use crate::params::Params;

/// A command that can be registered with a
/// [`CommandRegistry`](crate::CommandRegistry).
///
/// Implementations should be stateless past their config, since one instance
/// serves every caller.
pub trait RpcCommand: fmt::Debug + Send + Sync {
    /// Describes the command.  The name and category are taken from here.
    fn help(&self) -> &CommandHelp;

    /// Runs the command.  Argument count and names have already been checked
    /// against [`Self::help`].
    fn execute(&self, params: &Params) -> RpcResult<Value>;
}

/// Checks the argument count and names against the command's help, returning
/// the usage error the caller should see if they don't fit.
pub(crate) fn check_arity(
    help: &CommandHelp,
    params: &Params,
    usage: impl Fn() -> String,
) -> RpcResult<()> {
    params.check_names(&help.arg_names())?;

    let supplied = match params {
        Params::Positional(v) => v.len(),
        Params::Named(_) => help
            .args
            .iter()
            .enumerate()
            .filter(|(i, a)| params.get(*i, a.name).is_some())
            .count(),
    };

    let required_present = help
        .args
        .iter()
        .enumerate()
        .filter(|(i, a)| a.required && params.get(*i, a.name).is_some())
        .count();

    if supplied > help.args.len() || required_present < help.required_args() {
        return Err(RpcError::Usage(usage()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::help::ArgHelp;

    fn one_arg_help() -> CommandHelp {
        CommandHelp {
            name: "one",
            category: "test",
            description: "Takes one argument.",
            args: vec![ArgHelp {
                name: "x",
                ty: "string",
                required: true,
                description: "The argument.",
            }],
            result: Vec::new(),
            example_args: vec!["00"],
        }
    }

    fn check(params: serde_json::Value) -> RpcResult<()> {
        let params = Params::from_value(params).unwrap();
        check_arity(&one_arg_help(), &params, || "usage".to_owned())
    }

    #[test]
    fn test_check_arity() {
        assert!(check(json!(["00"])).is_ok());
        assert!(check(json!({"x": "00"})).is_ok());

        assert!(matches!(check(json!([])), Err(RpcError::Usage(_))));
        assert!(matches!(check(json!(null)), Err(RpcError::Usage(_))));
        assert!(matches!(check(json!([null])), Err(RpcError::Usage(_))));
        assert!(matches!(check(json!(["00", "11"])), Err(RpcError::Usage(_))));
        assert!(matches!(check(json!({})), Err(RpcError::Usage(_))));
        assert!(matches!(
            check(json!({"x": "00", "y": 1})),
            Err(RpcError::UnknownParam(_))
        ));
    }
}
