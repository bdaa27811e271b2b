pub type CardwrightResult<T> = Result<T, CardwrightError>;

#[derive(thiserror::Error, Debug)]
pub enum CardwrightError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("blend error: {0}")]
    Blend(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardwrightError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn theme(msg: impl Into<String>) -> Self {
        Self::Theme(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn blend(msg: impl Into<String>) -> Self {
        Self::Blend(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
