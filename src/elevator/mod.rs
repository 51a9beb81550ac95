pub mod elevator;
pub mod fleet;

pub use elevator::Elevator;
pub use fleet::Fleet;
pub use fleet::StatusTable;
