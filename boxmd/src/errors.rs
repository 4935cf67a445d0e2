use crate::Trajectory;

#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Got an invalid parameter value in a function, or an invalid initial
    /// configuration
    InvalidParameter(String),
    /// Error while serializing/deserializing data
    Json(serde_json::Error),
    /// The simulation produced NaN or infinite positions or velocities
    NonFinite {
        /// index (starting at 0) of the step where non-finite values appeared
        step: usize,
        /// index of the last frame containing only finite values, or `None`
        /// if the very first step already diverged
        last_valid_frame: Option<usize>,
        /// frames recorded before the simulation diverged
        trajectory: Box<Trajectory>,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidParameter(e) => write!(f, "invalid parameter: {}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
            Error::NonFinite { step, last_valid_frame, .. } => {
                write!(f, "non-finite positions or velocities at step {}", step)?;
                match last_valid_frame {
                    Some(frame) => write!(f, ", last valid frame is {}", frame),
                    None => write!(f, ", no valid frame was recorded"),
                }
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidParameter(_) |
            Error::NonFinite { .. } => None,
            Error::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::Json(error)
    }
}
