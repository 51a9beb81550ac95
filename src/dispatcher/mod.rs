pub mod cost;
pub mod cost_tests;
pub mod dispatcher;

pub use cost::CostModel;
pub use dispatcher::Dispatcher;
pub use dispatcher::SimEvent;
