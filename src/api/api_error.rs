use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    EmptyBody,
    JsonParse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::EmptyBody => write!(f, "Feed returned an empty body"),
            ApiError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for ApiError {}
