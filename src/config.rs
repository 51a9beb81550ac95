/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ConfigError, Floor, FloorRange};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_elevators: usize,
    pub lowest_floor: Floor,
    pub highest_floor: Floor,
    pub queue_capacity: usize,
    pub direction_penalty: u32,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_elevators: 10,
            lowest_floor: 1,
            highest_floor: 10,
            queue_capacity: 50,
            direction_penalty: 5,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn floors(&self) -> FloorRange {
        FloorRange::new(self.lowest_floor, self.highest_floor)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
/// Reads the configuration from `path`. A missing file gives the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = match fs::read_to_string(path.as_ref()) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Configuration file {} not found, using defaults",
                path.as_ref().display()
            );
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    validate(&config.simulation)?;
    Ok(config)
}

fn validate(config: &SimulationConfig) -> Result<(), ConfigError> {
    if config.lowest_floor > config.highest_floor {
        return Err(ConfigError::Invalid(format!(
            "lowest_floor {} is above highest_floor {}",
            config.lowest_floor, config.highest_floor
        )));
    }
    if config.queue_capacity == 0 {
        return Err(ConfigError::Invalid("queue_capacity must be positive".into()));
    }
    Ok(())
}
