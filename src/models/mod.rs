pub mod display;
pub mod item;
pub mod settings;

pub use display::*;
pub use item::*;
pub use settings::*;
