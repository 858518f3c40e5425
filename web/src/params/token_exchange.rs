use domain::TokenExchangeRequest;
use serde::Deserialize;
use utoipa::ToSchema;

/// JSON body of `POST /auth/{provider}/token`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TokenExchangeParams {
    /// Authorization code returned to the client's redirect URI.
    pub code: Option<String>,
    /// The redirect URI used when requesting the code.
    pub redirect_uri: Option<String>,
    /// PKCE verifier; required by the social provider only.
    pub code_verifier: Option<String>,
}

impl From<TokenExchangeParams> for TokenExchangeRequest {
    fn from(params: TokenExchangeParams) -> Self {
        TokenExchangeRequest {
            code: params.code,
            redirect_uri: params.redirect_uri,
            code_verifier: params.code_verifier,
        }
    }
}
