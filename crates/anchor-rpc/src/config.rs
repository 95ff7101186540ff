use serde::{Deserialize, Serialize};
use strata_l1_datacarrier::CarrierConfig;

/// Default client binary named in help examples.
pub const DEFAULT_CLI_NAME: &str = "strata-cli";

/// Default endpoint named in help examples.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8432/";

/// Config for the anchoring commands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorRpcConfig {
    /// Data-carrier policy applied to anchored payloads.
    pub carrier: CarrierConfig,

    /// How help examples are rendered.
    pub help: HelpConfig,
}

/// Names used when rendering help examples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpConfig {
    /// Client binary shown in command-line examples.
    pub cli_name: String,

    /// Endpoint shown in JSON-RPC examples.
    pub rpc_url: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            cli_name: DEFAULT_CLI_NAME.to_owned(),
            rpc_url: DEFAULT_RPC_URL.to_owned(),
        }
    }
}
