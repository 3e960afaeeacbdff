use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("Decode error: {0}")]
    Decode(String),
}

impl Serialize for BlueprintError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type BlueprintResult<T> = Result<T, BlueprintError>;
