use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail transport not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Mail relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Mail relay rejected message with status {0}")]
    Rejected(u16),
}
