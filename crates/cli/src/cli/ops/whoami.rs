use clap::Args;

use depot_client::{ApiError, SessionStore};

#[derive(Args, Debug, Clone)]
pub struct Whoami;

#[derive(Debug, thiserror::Error)]
pub enum WhoamiError {
    #[error("state error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Whoami {
    type Error = WhoamiError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = SessionStore::new(ctx.client.clone());

        // Bootstrap path: restore from persisted state, no network call
        session.check_auth()?;

        match &session.session().user {
            Some(user) => {
                let mut lines = vec![
                    format!("email: {}", user.email),
                    format!("id:    {}", user.id),
                    format!("role:  {}", user.role),
                ];
                if let Some(username) = &user.username {
                    lines.insert(1, format!("name:  {}", username));
                }
                Ok(lines.join("\n"))
            }
            None => Ok("Not logged in".to_string()),
        }
    }
}
