mod files;
mod health;

pub use files::*;
pub use health::*;
