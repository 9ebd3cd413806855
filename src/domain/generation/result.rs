//! Mock generation result.
//!
//! No audio is produced. Every verified request receives the same two
//! placeholder tracks under a time-based task id.

use crate::domain::foundation::Timestamp;

/// Prefix of every mock task id.
pub const MOCK_TASK_PREFIX: &str = "mock_task_";

/// Placeholder audio returned as the generated versions, in order.
pub const PLACEHOLDER_AUDIO_URLS: [&str; 2] = [
    "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
    "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
];

/// Status of a generation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Complete,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Complete => "complete",
        }
    }
}

/// One generated rendition of the song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackVersion {
    /// 1-based version number.
    pub version: u32,
    pub audio_url: String,
}

/// Outcome of a generation task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub task_id: String,
    pub status: GenerationStatus,
    pub versions: Vec<TrackVersion>,
}

impl GenerationResult {
    /// The fixed mock result, with a task id derived from `now`.
    pub fn mock(now: Timestamp) -> Self {
        let versions = PLACEHOLDER_AUDIO_URLS
            .iter()
            .zip(1u32..)
            .map(|(url, version)| TrackVersion {
                version,
                audio_url: (*url).to_string(),
            })
            .collect();

        Self {
            task_id: format!("{}{}", MOCK_TASK_PREFIX, now.as_unix_millis()),
            status: GenerationStatus::Complete,
            versions,
        }
    }

    pub fn versions_included(&self) -> usize {
        self.versions.len()
    }
}
