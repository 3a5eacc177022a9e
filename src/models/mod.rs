// Re-export all model types
pub use self::contact::*;
pub use self::errors::*;
pub use self::menu::*;
pub use self::restaurant::*;

mod contact;
mod errors;
mod menu;
mod restaurant;
