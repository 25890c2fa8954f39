// Provider error taxonomy
use crate::application::quicksight_repository::RemoteError;

/// Remote error code marking an account whose subscription tier does not
/// support anonymous embedding.
const PRICING_PLAN_CODE: &str = "UnsupportedPricingPlanException";

/// Errors surfaced by the provider services.
///
/// A closed set: each variant maps to one HTTP status at the presentation
/// layer (404 for NotFound, 403 for PricingPlan, 500 for the rest).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Local lookup exhausted without a match.
    #[error("no {resource} found where {field} matches {value:?}")]
    NotFound {
        resource: &'static str,
        field: String,
        value: String,
    },

    /// The account's pricing plan does not allow anonymous embedding.
    #[error("this account's pricing plan does not support anonymous embedding")]
    PricingPlan,

    /// Embed-URL generation failed, or a local precondition was violated.
    #[error("embedding URL generation failed: {0}")]
    Embedding(String),

    /// User list or describe call failed.
    #[error("user lookup failed: {0}")]
    User(String),

    /// Any other untranslated remote failure.
    #[error("quicksight request failed: {0}")]
    Remote(#[from] RemoteError),
}

impl ProviderError {
    /// Translate a failed embed-URL call into its outward category.
    pub fn from_embed_failure(err: RemoteError) -> Self {
        let pricing_plan = err
            .code
            .as_deref()
            .is_some_and(|code| code.contains(PRICING_PLAN_CODE));
        if pricing_plan {
            ProviderError::PricingPlan
        } else {
            ProviderError::Embedding(err.message)
        }
    }
}
