pub mod sidebar;

pub use sidebar::{MenuKey, Sidebar};
