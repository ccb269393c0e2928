//! Response bodies of the server's JSON endpoints.
//!
//! Field names follow the wire format. Everything the server may omit (or
//! that older servers never sent) is defaulted so a partial body still
//! decodes.

use serde::{Deserialize, Serialize};

/// `GET /json/server_stats`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStats {
    pub hostname: String,
    pub instance_name: String,
    pub ip: String,
    pub broadcast: String,
    pub subnet: String,
    pub hw_address: String,
    pub version: String,
    pub up_since: String,
    pub quit_enabled: bool,
    pub config_dir: String,
}

/// One plugin row of `GET /json/universe_plugin_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// One universe row of `GET /json/universe_plugin_list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub input_ports: u32,
    #[serde(default)]
    pub output_ports: u32,
    #[serde(default)]
    pub rdm_devices: u32,
}

/// `GET /json/universe_plugin_list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversePluginList {
    pub plugins: Vec<PluginSummary>,
    pub universes: Vec<UniverseSummary>,
}

/// How a universe combines several sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeMode {
    /// Highest takes precedence.
    #[default]
    #[serde(rename = "HTP")]
    Htp,
    /// Latest takes precedence.
    #[serde(rename = "LTP")]
    Ltp,
}

/// Priority settings of a port that supports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortPriority {
    pub value: u8,
    #[serde(default)]
    pub current_mode: Option<String>,
}

/// A device port patched to (or available for) a universe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    pub id: String,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_output: bool,
    #[serde(default)]
    pub priority: Option<PortPriority>,
}

/// `GET /json/universe_info?id={id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub merge_mode: MergeMode,
    #[serde(default)]
    pub input_ports: Vec<PortInfo>,
    #[serde(default)]
    pub output_ports: Vec<PortInfo>,
}

/// `GET /json/plugin_info?id={id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    pub active: Option<bool>,
    pub enabled: Option<bool>,
}
