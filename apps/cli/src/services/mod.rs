pub mod scaffold;
pub mod utils;
