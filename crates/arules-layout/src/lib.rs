pub mod error;
pub mod loader;

pub use error::LayoutError;
pub use loader::{Layout, load_layout};
