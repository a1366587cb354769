pub mod builder;
pub mod defaults;
pub mod session;
pub mod traits;
