//! Infrastructure implementation of the `ImageRegistry` port over Amazon ECR.

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_ecr::config::Region;

use crate::application::ports::ImageRegistry;

/// ECR-backed `ImageRegistry`. Credentials come from the standard AWS
/// provider chain; the region comes from project configuration.
pub struct EcrRegistry {
    client: aws_sdk_ecr::Client,
}

impl EcrRegistry {
    /// Build a client for `region`.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self {
            client: aws_sdk_ecr::Client::new(&config),
        }
    }
}

impl ImageRegistry for EcrRegistry {
    async fn image_tags(&self, repository: &str) -> Result<Vec<String>> {
        let mut tags = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let page = self
                .client
                .describe_images()
                .repository_name(repository)
                .set_next_token(next_token.take())
                .send()
                .await
                .with_context(|| format!("cannot list images in {repository}"))?;

            for detail in page.image_details() {
                tags.extend(detail.image_tags().iter().cloned());
            }

            match page.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }
        tracing::debug!(repository, count = tags.len(), "listed registry tags");
        Ok(tags)
    }
}
