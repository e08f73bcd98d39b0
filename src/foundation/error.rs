pub type SundriftResult<T> = Result<T, SundriftError>;

#[derive(thiserror::Error, Debug)]
pub enum SundriftError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SundriftError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SundriftError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            SundriftError::animation("x")
                .to_string()
                .contains("animation error:")
        );
        assert!(
            SundriftError::lifecycle("x")
                .to_string()
                .contains("lifecycle error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SundriftError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
