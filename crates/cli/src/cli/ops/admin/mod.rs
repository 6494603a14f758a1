use clap::{Args, Subcommand};

pub mod dashboard;
pub mod files;
pub mod top_users;
pub mod users;

use crate::cli::op::Op;

crate::command_enum! {
    (Dashboard, dashboard::Dashboard),
    (Users, users::Users),
    (User, users::UserInfo),
    (Toggle, users::Toggle),
    (Role, users::SetRole),
    (RmUser, users::RmUser),
    (Files, files::AdminFiles),
    (RmFile, files::RmFile),
    (TopUsers, top_users::TopUsers),
}

// Rename the generated Command to AdminCommand for clarity
pub type AdminCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Admin {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[async_trait::async_trait]
impl Op for Admin {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
