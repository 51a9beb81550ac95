/* Modules */
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod elevator;
pub mod queue;
pub mod shared;

/* Re-exports */
pub use dispatcher::{CostModel, Dispatcher, SimEvent};
pub use elevator::{Elevator, Fleet};
pub use queue::RequestQueue;
pub use shared::{Direction, DispatchError, Floor, FloorRange, Request, Status};
