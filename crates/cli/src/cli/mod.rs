pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Admin, Files, Login, Logout, Register, Whoami};
