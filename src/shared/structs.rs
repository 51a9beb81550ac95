/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = i32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "moving")]
    Moving,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction of travel from `from` to `to`, `Idle` when they are the same floor.
    pub fn between(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = i32;

    fn try_from(item: i32) -> Result<Self, Self::Error> {
        match item {
            1 => Ok(Direction::Up),
            -1 => Ok(Direction::Down),
            0 => Ok(Direction::Idle),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Idle => write!(f, "idle"),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "idle"),
            Status::Moving => write!(f, "moving"),
        }
    }
}

/// Inclusive range of floors served by the building.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRange {
    pub lowest: Floor,
    pub highest: Floor,
}

impl FloorRange {
    pub fn new(lowest: Floor, highest: Floor) -> FloorRange {
        FloorRange { lowest, highest }
    }

    pub fn contains(&self, floor: Floor) -> bool {
        floor >= self.lowest && floor <= self.highest
    }
}

impl Default for FloorRange {
    fn default() -> Self {
        FloorRange::new(1, 10)
    }
}

/// A floor call waiting in the request queue.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: Floor,
    pub direction: Direction,
}

impl Request {
    pub fn new(floor: Floor, direction: Direction) -> Request {
        Request { floor, direction }
    }
}
