pub mod run_options;

use run_options::Args;
use serde::Deserialize;
use std::fs;

pub const CONFIG_FILE: &str = "./plantwatch.toml";

/// WiFi credentials. Opaque to the core; the session hands them to the link
/// association step.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Network {
    pub ssid: String,
    pub password: String,
}

impl Default for Network {
    fn default() -> Self {
        Self { ssid: "plantnet".to_owned(), password: String::new() }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Broker {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub key: String,
    pub client_id: String,
    pub keep_alive_secs: u64,
}

impl Default for Broker {
    fn default() -> Self {
        Self {
            host: "io.adafruit.com".to_owned(),
            port: 1883,
            username: String::new(),
            key: String::new(),
            client_id: "plantwatch".to_owned(),
            keep_alive_secs: 5,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorBridge {
    pub address: String,
}

impl Default for SensorBridge {
    fn default() -> Self {
        Self { address: "http://127.0.0.1:9090".to_owned() }
    }
}

/// What the loop does when a sensor read fails mid-cycle. `Fatal` propagates
/// the error out of the loop (forcing a process restart), `Skip` abandons the
/// cycle the same way a transport fault does.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SensorFaultPolicy {
    Fatal,
    Skip,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Sampling {
    pub interval_secs: i64,
    pub sensor_fault_policy: SensorFaultPolicy,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            interval_secs: crate::monitor::SAMPLE_INTERVAL_SECS,
            sensor_fault_policy: SensorFaultPolicy::Fatal,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: Network,
    pub broker: Broker,
    pub sensor_bridge: SensorBridge,
    pub sampling: Sampling,
}

impl Config {
    pub fn load(args: Args) -> Self {
        let config_content = fs::read_to_string(args.cfg_file).expect("Unable to read config file");
        let config: Config = toml::from_str(&config_content).expect("Unable to parse config");
        config
    }

    // test helper
    pub fn load_from_str(config_str: &str) -> Self {
        let config: Config = toml::from_str(config_str).expect("Unable to parse config");
        config
    }
}
