/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{Direction, Floor};

pub const DEFAULT_DIRECTION_PENALTY: u32 = 5;

/// Scores how well a car suits a floor call. Lower is better.
///
/// The score is the floor distance plus `direction_penalty` when the car's
/// direction is set and differs from the requested one. Any car can be
/// scored, busy or not; the current selection policy only ever passes idle
/// ones. The score saturates at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    pub direction_penalty: u32,
}

impl CostModel {
    pub fn new(direction_penalty: u32) -> CostModel {
        CostModel { direction_penalty }
    }

    pub fn cost(&self, elevator: &Elevator, floor: Floor, direction: Direction) -> u32 {
        let distance = elevator.current_floor.abs_diff(floor);
        let penalty = if elevator.direction != Direction::Idle && elevator.direction != direction {
            self.direction_penalty
        } else {
            0
        };

        distance.saturating_add(penalty)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel::new(DEFAULT_DIRECTION_PENALTY)
    }
}
