//! Command layer for anchoring state hashes on L1.
//!
//! Commands implement [`RpcCommand`] and are collected once at startup into a
//! [`CommandRegistry`], which is then handed by reference to whatever serves
//! requests.  Each command has a typed request and response; the registry
//! only deals with JSON at its edges.
//!
//! ```
//! use serde_json::json;
//! use strata_anchor_rpc::*;
//!
//! let config = AnchorRpcConfig::default();
//! let registry = register_anchor_commands(CommandRegistryBuilder::new(), &config)
//!     .unwrap()
//!     .build(config.help.clone());
//!
//! let params = Params::from_value(json!(["deadbeef"])).unwrap();
//! let out = registry.dispatch(ANCHOR_GAME_STATE, &params).unwrap();
//! assert_eq!(out, json!({ "op_return_script": "6a04deadbeef" }));
//! ```

mod anchor;
mod command;
mod config;
mod errors;
mod help;
mod params;
mod registry;
mod request;

pub use anchor::{
    ANCHOR_GAME_STATE, AnchorGameState, AnchorGameStateRequest, AnchorGameStateResponse,
    register_anchor_commands,
};
pub use command::RpcCommand;
pub use config::{AnchorRpcConfig, DEFAULT_CLI_NAME, DEFAULT_RPC_URL, HelpConfig};
pub use errors::*;
pub use help::{ArgHelp, CommandHelp, ResultFieldHelp};
pub use params::{Params, parse_hex_param};
pub use registry::{CommandRegistry, CommandRegistryBuilder};
pub use request::{RpcErrorObject, RpcRequest, RpcResponse};
