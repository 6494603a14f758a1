use clap::{Args, Subcommand};

pub mod download;
pub mod info;
pub mod ls;
pub mod rename;
pub mod rm;
pub mod upload;

use crate::cli::op::Op;

crate::command_enum! {
    (Ls, ls::Ls),
    (Upload, upload::Upload),
    (Download, download::Download),
    (Rm, rm::Rm),
    (Rename, rename::Rename),
    (Info, info::Info),
}

// Rename the generated Command to FilesCommand for clarity
pub type FilesCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Files {
    #[command(subcommand)]
    pub command: FilesCommand,
}

#[async_trait::async_trait]
impl Op for Files {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
