use resumate_service::ServiceError;
use resumate_types::Notification;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("No file selected")]
    MissingFile,

    #[error("Requirements are empty")]
    MissingRequirements,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl FormError {
    /// True when the request never left the client
    pub fn is_validation(&self) -> bool {
        !matches!(self, FormError::Service(_))
    }

    /// What the user gets to see; service failures all collapse into one message
    pub fn notification(&self) -> Notification {
        match self {
            FormError::MissingFile | FormError::MissingRequirements => Notification::validation(),
            FormError::AlreadySubmitting => Notification::busy(),
            FormError::Service(_) => Notification::failure(),
        }
    }
}
