/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor};

/***************************************/
/*               Errors                */
/***************************************/
/// Errors reported to whoever submits or pulls requests.
///
/// None of them are fatal. The caller discards the request (or notes the
/// empty queue) and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("invalid request: floor {floor}, direction {direction}")]
    InvalidRequest { floor: Floor, direction: Direction },

    #[error("request queue full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("request queue empty")]
    QueueEmpty,

    #[error("invalid floor range: lowest {lowest} is above highest {highest}")]
    InvalidFloorRange { lowest: Floor, highest: Floor },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
