/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, DispatchError, Floor, FloorRange, Request};

/**
 * Bounded FIFO of pending floor calls.
 *
 * Backed by a ring buffer so slots freed by `dequeue` are reused; the
 * capacity bound is enforced on `submit`.
 *
 * # Fields
 * - `requests`:    Pending requests, head at the front.
 * - `capacity`:    Maximum number of pending requests.
 * - `floors`:      Floors a request may target.
 */
#[derive(Debug, Clone)]
pub struct RequestQueue {
    requests: VecDeque<Request>,
    capacity: usize,
    floors: FloorRange,
}

impl RequestQueue {
    pub fn new(capacity: usize, floors: FloorRange) -> RequestQueue {
        RequestQueue {
            requests: VecDeque::with_capacity(capacity),
            capacity,
            floors,
        }
    }

    /// Validates and appends a floor call. Rejected calls leave the queue untouched.
    pub fn submit(&mut self, floor: Floor, direction: Direction) -> Result<(), DispatchError> {
        if !self.floors.contains(floor) || direction == Direction::Idle {
            warn!("Invalid request ignored: floor {}, direction {}", floor, direction);
            return Err(DispatchError::InvalidRequest { floor, direction });
        }

        if self.requests.len() >= self.capacity {
            warn!("Request queue full, dropping request for floor {}", floor);
            return Err(DispatchError::QueueFull {
                capacity: self.capacity,
            });
        }

        self.requests.push_back(Request::new(floor, direction));
        debug!("Queued request: floor {}, direction {}", floor, direction);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<Request, DispatchError> {
        self.requests.pop_front().ok_or(DispatchError::QueueEmpty)
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn floors(&self) -> FloorRange {
        self.floors
    }
}
