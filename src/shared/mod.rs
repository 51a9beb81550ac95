pub mod error;
pub mod macros;
pub mod structs;
pub mod structs_tests;

pub use error::ConfigError;
pub use error::DispatchError;
pub use structs::Direction;
pub use structs::Floor;
pub use structs::FloorRange;
pub use structs::Request;
pub use structs::Status;
