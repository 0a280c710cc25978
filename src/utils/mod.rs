pub mod debug;
pub mod timezone;

pub use debug::{debug_enabled, set_debug};
pub use timezone::Timezone;
