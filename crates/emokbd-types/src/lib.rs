pub mod item;
pub mod mark;

pub use item::{GroupBuilder, Item};
pub use mark::Mark;
