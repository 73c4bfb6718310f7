//! Asset bundle preparation and persistence.

pub mod prepare;
pub mod save;

pub use prepare::prepare_assets;
pub use save::{save_assets, save_trace};
