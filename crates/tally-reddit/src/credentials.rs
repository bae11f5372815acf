use std::fmt;

use secrecy::SecretString;

use crate::error::CredentialsError;

/// Variable names tried for each credential, in order.
const CLIENT_ID_VARS: &[&str] = &["client_id", "REDDIT_CLIENT_ID"];
const CLIENT_SECRET_VARS: &[&str] = &["client_secret", "REDDIT_CLIENT_SECRET"];
const USER_AGENT_VARS: &[&str] = &["user_agent", "REDDIT_USER_AGENT"];

/// Script-app credentials for app-only OAuth.
pub struct Credentials {
    pub client_id: String,
    pub client_secret: SecretString,
    pub user_agent: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            user_agent: user_agent.into(),
        }
    }

    /// Read credentials from the process environment. Load a `.env` file
    /// beforehand to have it considered.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let find = |names: &[&'static str]| {
            names
                .iter()
                .find_map(|name| lookup(*name).filter(|value| !value.trim().is_empty()))
                .ok_or(CredentialsError::Missing { name: names[0] })
        };
        Ok(Self::new(
            find(CLIENT_ID_VARS)?,
            find(CLIENT_SECRET_VARS)?,
            find(USER_AGENT_VARS)?,
        ))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
