/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::CostModel;
use crate::elevator::{Elevator, Fleet};
use crate::queue::RequestQueue;
use crate::shared::{Direction, Floor};

/***************************************/
/*               Enums                 */
/***************************************/
/// Outcome of handling one queued request, or of an empty run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SimEvent {
    Assigned {
        request_floor: Floor,
        request_direction: Direction,
        elevator_id: u32,
        new_floor: Floor,
        snapshot: Vec<Elevator>,
    },
    Dropped {
        request_floor: Floor,
        request_direction: Direction,
    },
    Skipped,
}

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Assigns queued floor calls to idle elevators.
 *
 * Each request is handed to the idle car with the lowest cost; ties go to the
 * car earliest in the fleet. Requests that find no idle car are dropped.
 *
 * # Fields
 * - `cost_model`:  Scores candidate cars.
 * - `event_tx`:    Optional observer that receives a copy of every event.
 */
pub struct Dispatcher {
    cost_model: CostModel,
    event_tx: Option<cbc::Sender<SimEvent>>,
}

impl Dispatcher {
    pub fn new(cost_model: CostModel) -> Dispatcher {
        Dispatcher {
            cost_model,
            event_tx: None,
        }
    }

    pub fn with_observer(mut self, event_tx: cbc::Sender<SimEvent>) -> Dispatcher {
        self.event_tx = Some(event_tx);
        self
    }

    /// Index of the cheapest idle car, or `None` when every car is busy.
    pub fn select_elevator(&self, fleet: &Fleet, floor: Floor, direction: Direction) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;

        for (index, elevator) in fleet.iter().enumerate() {
            if !elevator.is_idle() {
                continue;
            }

            let cost = self.cost_model.cost(elevator, floor, direction);
            match best {
                Some((_, min_cost)) if cost >= min_cost => {}
                _ => best = Some((index, cost)),
            }
        }

        best.map(|(index, _)| index)
    }

    /// Handles the request at the head of the queue. `None` if the queue is empty.
    pub fn step(&self, fleet: &mut Fleet, queue: &mut RequestQueue) -> Option<SimEvent> {
        let request = queue.dequeue().ok()?;

        let selected = self.select_elevator(fleet, request.floor, request.direction);
        let event = match selected.and_then(|index| fleet.get_mut(index)) {
            Some(elevator) => {
                elevator.assign();
                elevator.arrive(request.floor);
                let elevator_id = elevator.id;

                info!(
                    "Request at floor {} (dir {}) assigned to elevator {}",
                    request.floor, request.direction, elevator_id
                );

                SimEvent::Assigned {
                    request_floor: request.floor,
                    request_direction: request.direction,
                    elevator_id,
                    new_floor: request.floor,
                    snapshot: fleet.snapshot(),
                }
            }
            None => {
                warn!(
                    "No idle elevator available for request at floor {} (dir {}), request dropped",
                    request.floor, request.direction
                );

                SimEvent::Dropped {
                    request_floor: request.floor,
                    request_direction: request.direction,
                }
            }
        };

        self.publish(&event);
        Some(event)
    }

    /// Drains the queue. An empty queue gives a single `Skipped` and touches nothing.
    pub fn run_simulation(&self, fleet: &mut Fleet, queue: &mut RequestQueue) -> Vec<SimEvent> {
        if queue.is_empty() {
            info!("Simulation skipped: request queue is empty");
            self.publish(&SimEvent::Skipped);
            return vec![SimEvent::Skipped];
        }

        info!("Starting simulation with {} queued requests", queue.len());
        let mut events = Vec::with_capacity(queue.len());
        while let Some(event) = self.step(fleet, queue) {
            events.push(event);
        }
        info!("Simulation complete");

        events
    }

    fn publish(&self, event: &SimEvent) {
        if let Some(tx) = &self.event_tx {
            if tx.send(event.clone()).is_err() {
                debug!("Event observer disconnected");
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new(CostModel::default())
    }
}
