//! # Farming Advice Service
//!
//! The "Aura" healthy-living assistant: chat advice and crop-image
//! analysis, behind a trait seam.
//!
//! ## Degradation Policy
//! The assistant is a nice-to-have. When the backing model is down the
//! [`Advisor`] swallows the failure, logs it, and answers with a canned
//! fallback line; neither chat nor image analysis ever surfaces a raw
//! error to the shopper.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::ServiceError;

/// Reply used whenever the assistant backend fails.
pub const FALLBACK_ADVICE: &str = "I'm sorry, I couldn't help with that right now. \
     How about I suggest a healthy farm-fresh recipe instead?";

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of the advice conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// The advice backend seam.
#[async_trait]
pub trait AdviceClient: Send + Sync {
    /// Answers a prompt given the prior conversation.
    async fn advise(&self, prompt: &str, history: &[ChatTurn]) -> Result<String, ServiceError>;

    /// Analyzes a crop/produce photo (base64 JPEG) against a question.
    async fn analyze_image(&self, image_b64: &str, prompt: &str) -> Result<String, ServiceError>;
}

/// Wraps an [`AdviceClient`] with the fallback policy.
pub struct Advisor {
    client: Box<dyn AdviceClient>,
}

impl Advisor {
    pub fn new(client: Box<dyn AdviceClient>) -> Self {
        Advisor { client }
    }

    /// Chat advice; never fails, falls back to [`FALLBACK_ADVICE`].
    pub async fn advise(&self, prompt: &str, history: &[ChatTurn]) -> String {
        match self.client.advise(prompt, history).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => FALLBACK_ADVICE.to_string(),
            Err(err) => {
                warn!(%err, "advice backend failed, using fallback reply");
                FALLBACK_ADVICE.to_string()
            }
        }
    }

    /// Image analysis; same fallback policy as [`Advisor::advise`].
    pub async fn analyze_image(&self, image_b64: &str, prompt: &str) -> String {
        match self.client.analyze_image(image_b64, prompt).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => FALLBACK_ADVICE.to_string(),
            Err(err) => {
                warn!(%err, "image analysis failed, using fallback reply");
                FALLBACK_ADVICE.to_string()
            }
        }
    }
}
