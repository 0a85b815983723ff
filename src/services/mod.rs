pub mod loader;
pub mod reader;

pub use loader::{ErrorPolicy, LoadPhase, LoadPolicy, Loader};
pub use reader::{FeedReader, LoadReport};
