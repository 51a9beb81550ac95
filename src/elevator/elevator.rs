/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor, Status};

/**
 * A single car in the fleet.
 *
 * Travel is instantaneous, so the car only ever moves through the two-phase
 * transition `assign` -> `arrive`. Between the two calls the car is `Moving`
 * and is skipped by the dispatcher.
 *
 * # Fields
 * - `id`:              Stable identity, 1..=N in fleet order.
 * - `current_floor`:   Floor the car is standing at.
 * - `direction`:       Direction of the last completed trip (`Idle` if it had zero length).
 * - `status`:          `Idle` when available for a new assignment.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elevator {
    pub id: u32,
    pub current_floor: Floor,
    pub direction: Direction,
    pub status: Status,
}

impl Elevator {
    pub fn new(id: u32, current_floor: Floor) -> Elevator {
        Elevator {
            id,
            current_floor,
            direction: Direction::Idle,
            status: Status::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == Status::Idle
    }

    /// First phase: the car has been handed a request.
    pub fn assign(&mut self) {
        self.status = Status::Moving;
    }

    /// Second phase: the car reaches `target` and becomes available again.
    pub fn arrive(&mut self, target: Floor) {
        self.direction = Direction::between(self.current_floor, target);
        self.current_floor = target;
        self.status = Status::Idle;
    }
}
