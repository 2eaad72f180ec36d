mod allclose;
pub use allclose::{all_close, close};

mod linspace;
pub use linspace::{linspace, periodic_grid};
