pub mod config;
pub mod input;
pub mod round;
pub mod sim;
pub mod traits;
pub mod util;
