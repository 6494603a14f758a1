use clap::Args;

use depot_client::validate::{self, ValidationError};
use depot_client::{ApiError, SessionStore};

#[derive(Args, Debug, Clone)]
pub struct Register {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password (min 8 chars, upper + lower + digit)
    #[arg(long)]
    pub password: String,

    /// Repeat the password
    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("registration failed: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Register {
    type Error = RegisterError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        validate::validate_registration(&self.email, &self.password, &self.confirm_password)?;

        let mut session = SessionStore::new(ctx.client.clone());
        let response = session.register(&self.email, &self.password).await?;

        // Registration does not log the user in
        Ok(response.message)
    }
}
