use clap::Args;

use depot_client::validate::{self, ValidationError};
use depot_client::{ApiError, SessionStore};

#[derive(Args, Debug, Clone)]
pub struct Login {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("login failed: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Login {
    type Error = LoginError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // Local validation blocks submission entirely
        validate::validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired.into());
        }

        let mut session = SessionStore::new(ctx.client.clone());
        let user = session.login(&self.email, &self.password).await?;

        Ok(format!("Logged in as {} (role: {})", user.email, user.role))
    }
}
