use serde::{Deserialize, Serialize};

/// Security type marker for common shares in the ISS directory
pub const TYPE_COMMON_SHARE: &str = "common_share";
/// Security type marker for preferred shares in the ISS directory
pub const TYPE_PREFERRED_SHARE: &str = "preferred_share";

/// One match from the security directory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySearchResult {
    /// Trading symbol (ISS `secid`)
    pub ticker: Option<String>,
    /// Short display name
    pub name: Option<String>,
    /// Full registered name
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    /// Security type, `common_share` or `preferred_share`
    #[serde(rename = "type")]
    pub security_type: String,
    /// Whether the security is currently traded
    #[serde(rename = "isTraded")]
    pub is_traded: bool,
}

/// Result of a search request.
///
/// An upstream failure is folded into the payload the same way as for
/// history: empty result list plus an `error` message, as a 200 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches in upstream order, capped at 20 entries
    pub results: Vec<SecuritySearchResult>,
    /// Failure message when the upstream fetch did not succeed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
