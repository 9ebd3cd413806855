//! Generation domain module.
//!
//! The request a paying user submits and the (mocked) result they get back.

mod request;
mod result;

pub use request::GenerationRequest;
pub use result::{
    GenerationResult, GenerationStatus, TrackVersion, MOCK_TASK_PREFIX, PLACEHOLDER_AUDIO_URLS,
};
