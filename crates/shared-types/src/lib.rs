pub mod common;
pub mod complaint;
pub mod project;
pub mod user;
pub mod verification;

pub use common::*;
pub use complaint::*;
pub use project::*;
pub use user::*;
pub use verification::*;
