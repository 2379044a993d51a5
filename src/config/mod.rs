//! Application configuration module
//!
//! Runtime settings come from the environment (and `.env`); limits,
//! defaults and names shared across layers live in `constants`.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
