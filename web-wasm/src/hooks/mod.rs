//! リアクティブなフック

pub mod persistent_state;
pub mod tick_counter;

pub use persistent_state::use_persistent_state;
pub use tick_counter::use_tick_counter;
