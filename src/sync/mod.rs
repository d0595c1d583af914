pub mod poller;
pub mod store;

pub use poller::Poller;
pub use store::ExecutionStore;
