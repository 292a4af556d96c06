mod rendered;
mod state;

pub use rendered::*;
pub use state::*;
