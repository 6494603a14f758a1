use clap::Args;

use depot_client::api::admin::TopUsersRequest;
use depot_client::ApiError;

/// `depot admin top-users` — heaviest accounts by stored bytes.
#[derive(Args, Debug, Clone)]
pub struct TopUsers {
    #[arg(long, default_value_t = 10)]
    pub limit: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum TopUsersError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for TopUsers {
    type Error = TopUsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let top = ctx.client.call(TopUsersRequest { limit: self.limit }).await?;

        if top.is_empty() {
            return Ok("No users with stored files".to_string());
        }

        let output = top
            .iter()
            .enumerate()
            .map(|(i, u)| {
                format!(
                    "{:>2}. {}  {} file(s), {} B",
                    i + 1,
                    u.email,
                    u.file_count,
                    u.total_size
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}
