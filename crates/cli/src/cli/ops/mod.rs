pub mod admin;
pub mod files;
pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;

pub use admin::Admin;
pub use files::Files;
pub use login::Login;
pub use logout::Logout;
pub use register::Register;
pub use whoami::Whoami;
