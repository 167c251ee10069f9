use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error("Unusable image payload")]
    UnusableImage,

    #[error("Recognition request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed recognition response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Recognition response carried no answer")]
    EmptyResponse,
}
