//! Session recording and playback.
//!
//! A recording is the ordered list of UI events a user produced, stored as
//! JSON so a session can be replayed against a fresh storefront.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::SessionId;

/// Errors reading or writing recordings.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Recording was written by an incompatible version.
    #[error("Unsupported recording version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// An event could not be encoded or decoded.
    #[error("Invalid recorded event #{seq}: {source}")]
    InvalidEvent {
        seq: u64,
        #[source]
        source: serde_json::Error,
    },

    /// The recording itself is malformed.
    #[error("Malformed recording: {0}")]
    Json(#[from] serde_json::Error),
}

/// One recorded event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordedEvent {
    /// Position in the session, starting at 0.
    pub seq: u64,
    /// Microseconds from recording start.
    pub elapsed_us: u64,
    /// The event payload.
    pub event: serde_json::Value,
}

/// A complete recording of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recording {
    /// Recording format version.
    pub version: u32,
    /// Session that produced the events.
    pub session_id: SessionId,
    /// When the recording was finalized (RFC 3339).
    pub timestamp: String,
    /// Events in the order they were dispatched.
    pub events: Vec<RecordedEvent>,
}

impl Recording {
    /// Current recording format version.
    pub const VERSION: u32 = 1;

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON, rejecting other format versions.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let recording: Recording = serde_json::from_str(json)?;
        if recording.version != Self::VERSION {
            return Err(ReplayError::UnsupportedVersion {
                found: recording.version,
                expected: Self::VERSION,
            });
        }
        Ok(recording)
    }
}

/// Records events as they are dispatched.
#[derive(Debug)]
pub struct SessionRecorder {
    session_id: SessionId,
    events: Vec<RecordedEvent>,
    start_time: std::time::Instant,
}

impl SessionRecorder {
    /// Create a new recorder for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            events: Vec::new(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Record an event.
    pub fn record<T: Serialize>(&mut self, event: &T) -> Result<(), ReplayError> {
        let seq = self.events.len() as u64;
        let event = serde_json::to_value(event)
            .map_err(|source| ReplayError::InvalidEvent { seq, source })?;
        self.events.push(RecordedEvent {
            seq,
            elapsed_us: self.start_time.elapsed().as_micros() as u64,
            event,
        });
        Ok(())
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Finalize the recording.
    pub fn finalize(self, timestamp: impl Into<String>) -> Recording {
        Recording {
            version: Recording::VERSION,
            session_id: self.session_id,
            timestamp: timestamp.into(),
            events: self.events,
        }
    }
}

/// Plays back a recorded session.
#[derive(Debug)]
pub struct SessionPlayer {
    recording: Recording,
}

impl SessionPlayer {
    /// Load a recording.
    pub fn new(recording: Recording) -> Self {
        Self { recording }
    }

    /// Load from JSON.
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        Ok(Self::new(Recording::from_json(json)?))
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Decode every event, in order.
    pub fn events<T: DeserializeOwned>(&self) -> Result<Vec<T>, ReplayError> {
        self.recording
            .events
            .iter()
            .map(|recorded| {
                serde_json::from_value(recorded.event.clone()).map_err(|source| {
                    ReplayError::InvalidEvent {
                        seq: recorded.seq,
                        source,
                    }
                })
            })
            .collect()
    }
}
