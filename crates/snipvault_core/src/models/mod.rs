//! Data models shared by storage and the GUI.

/// Snippet rows and request payloads.
pub mod snippet;
