//! The `anchorgamestate` command, which wraps a state hash in an `OP_RETURN`
//! script for the caller to embed in a transaction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strata_l1_datacarrier::{DataCarrierCodec, DataCarrierError};
use tracing::*;

use crate::command::RpcCommand;
use crate::config::AnchorRpcConfig;
use crate::errors::{RegistryError, RpcError, RpcResult};
use crate::help::{ArgHelp, CommandHelp, ResultFieldHelp};
use crate::params::{Params, parse_hex_param};
use crate::registry::CommandRegistryBuilder;

/// Name of the command.
pub const ANCHOR_GAME_STATE: &str = "anchorgamestate";

const STATE_HASH_PARAM: &str = "state_hash";

/// Request of [`ANCHOR_GAME_STATE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorGameStateRequest {
    /// Raw hash bytes to anchor.
    pub state_hash: Vec<u8>,
}

impl AnchorGameStateRequest {
    /// Extracts the request from command parameters.
    pub fn from_params(params: &Params) -> RpcResult<Self> {
        let value = params
            .get(0, STATE_HASH_PARAM)
            .ok_or(RpcError::MissingParam(STATE_HASH_PARAM))?;

        Ok(Self {
            state_hash: parse_hex_param(STATE_HASH_PARAM, value)?,
        })
    }
}

/// Response of [`ANCHOR_GAME_STATE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorGameStateResponse {
    /// Hex of the `OP_RETURN` script carrying the hash.
    pub op_return_script: String,
}

/// Handler for [`ANCHOR_GAME_STATE`].
#[derive(Debug)]
pub struct AnchorGameState {
    codec: DataCarrierCodec,
    help: CommandHelp,
}

impl AnchorGameState {
    /// Constructs a new instance.
    pub fn new(codec: DataCarrierCodec) -> Self {
        Self {
            codec,
            help: anchor_help(),
        }
    }

    /// Builds the script for a request.
    pub fn anchor(&self, req: &AnchorGameStateRequest) -> RpcResult<AnchorGameStateResponse> {
        let script = self.codec.encode(&req.state_hash).map_err(|e| match e {
            DataCarrierError::PayloadTooLarge { len, max } => RpcError::PayloadTooLarge {
                param: STATE_HASH_PARAM,
                len,
                max,
            },
            e => RpcError::Internal(e.to_string()),
        })?;

        debug!(payload_len = req.state_hash.len(), script = %script, "built anchor script");

        Ok(AnchorGameStateResponse {
            op_return_script: script.to_hex(),
        })
    }
}

impl RpcCommand for AnchorGameState {
    fn help(&self) -> &CommandHelp {
        &self.help
    }

    fn execute(&self, params: &Params) -> RpcResult<Value> {
        let req = AnchorGameStateRequest::from_params(params)?;
        let resp = self.anchor(&req)?;
        serde_json::to_value(resp).map_err(|e| RpcError::Internal(e.to_string()))
    }
}

fn anchor_help() -> CommandHelp {
    CommandHelp {
        name: ANCHOR_GAME_STATE,
        category: "blockchain",
        description: "Anchors a game state hash into the chain using OP_RETURN.",
        args: vec![ArgHelp {
            name: STATE_HASH_PARAM,
            ty: "string",
            required: true,
            description: "The hex-encoded game state hash (e.g. BLAKE3 hash).",
        }],
        result: vec![ResultFieldHelp {
            key: "op_return_script",
            ty: "string",
            description: "The hex-encoded OP_RETURN script containing the game state hash.",
        }],
        example_args: vec!["00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"],
    }
}

/// Registers the anchoring commands.
pub fn register_anchor_commands(
    builder: CommandRegistryBuilder,
    config: &AnchorRpcConfig,
) -> Result<CommandRegistryBuilder, RegistryError> {
    let codec = DataCarrierCodec::new(config.carrier);
    builder.register(AnchorGameState::new(codec))
}
