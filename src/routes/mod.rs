pub mod dashboard;
pub mod health;
pub mod home;
pub mod register;
pub mod success;
pub mod users;

pub use dashboard::*;
pub use health::*;
pub use home::*;
pub use register::*;
pub use success::*;
pub use users::*;
