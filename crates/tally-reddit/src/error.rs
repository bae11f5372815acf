/// Errors loading Reddit API credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("missing credential `{name}` (set it in the environment or a .env file)")]
    Missing { name: &'static str },
}
