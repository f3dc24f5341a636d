#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error {}: {}", message, source)]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

pub(crate) trait WithMessage<T> {
    fn with_message(self, message: &str) -> Result<T, RepositoryError>;
}

impl<T> WithMessage<T> for Result<T, sea_orm::DbErr> {
    fn with_message(self, message: &str) -> Result<T, RepositoryError> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_message_is_kept() {
        let result: Result<(), _> =
            Err(sea_orm::DbErr::Custom("refused".to_string()))
                .with_message("in database connect");

        let message = result.unwrap_err().to_string();

        assert!(message.contains("in database connect"));
        assert!(message.contains("refused"));
    }
}
