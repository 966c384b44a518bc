use thiserror::Error;

use crate::session::{IntakeTicket, RequestId};

#[derive(Debug, Error)]
pub enum MediPlantError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Analysis request {request} was superseded")]
    Superseded { request: RequestId },

    #[error("{ticket} was superseded")]
    StaleIntake { ticket: IntakeTicket },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Timer error: {0}")]
    Timer(String),
}

impl From<MediPlantError> for String {
    fn from(err: MediPlantError) -> Self {
        err.to_string()
    }
}
