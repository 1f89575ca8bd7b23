//! Frontend Models
//!
//! Data structures matching the backend's JSON shapes. Ids are opaque
//! strings serialized as `_id`.

use serde::{Deserialize, Deserializer, Serialize};

/// Reference to a user inside a workspace (creator or member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Workspace data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub creator: Option<UserRef>,
    #[serde(default)]
    pub members: Vec<UserRef>,
}

/// Video data structure (matches backend)
///
/// `comments` stays `None` until the backend has answered, so views can
/// tell "still fetching" apart from "no comments yet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub workspace: Option<String>,
    #[serde(rename = "isPublic", default)]
    pub is_public: bool,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// A timestamped note on a video. Append-only, insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub text: String,
    #[serde(deserialize_with = "timestamp_seconds")]
    pub timestamp: f64,
}

/// The backend historically stored timestamps as stringified floats;
/// accept both a JSON number and a numeric string.
fn timestamp_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    let seconds = match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom)?,
    };
    Ok(seconds.max(0.0))
}

// ========================
// Wire Wrappers
// ========================

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// `GET /api/video?workspaceId=..` envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// `POST /api/video/upload` envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub video: Video,
}

/// Error body shape; the backend puts human-readable text in `message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Resolve a workspace record by id from a fetched list
pub fn workspace_by_id<'a>(workspaces: &'a [Workspace], id: &str) -> Option<&'a Workspace> {
    workspaces.iter().find(|ws| ws.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_list_uses_underscore_id() {
        let list: Vec<Workspace> =
            serde_json::from_str(r#"[{"_id":"1","name":"A"},{"_id":"2","name":"B"}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(workspace_by_id(&list, "2").unwrap().name, "B");
        assert!(workspace_by_id(&list, "3").is_none());
    }

    #[test]
    fn comment_timestamp_accepts_number_and_string() {
        let num: Comment =
            serde_json::from_str(r#"{"name":"Alice","text":"nice cut","timestamp":12.34}"#).unwrap();
        let text: Comment =
            serde_json::from_str(r#"{"name":"Alice","text":"nice cut","timestamp":"12.34"}"#)
                .unwrap();
        assert_eq!(num.timestamp, 12.34);
        assert_eq!(text.timestamp, 12.34);
    }

    #[test]
    fn comment_timestamp_clamps_negative() {
        let c: Comment =
            serde_json::from_str(r#"{"name":"n","text":"t","timestamp":-3.0}"#).unwrap();
        assert_eq!(c.timestamp, 0.0);
    }

    #[test]
    fn video_defaults() {
        let v: Video =
            serde_json::from_str(r#"{"_id":"v1","title":"Cut 3","url":"http://x/v.mp4"}"#).unwrap();
        assert!(!v.is_public);
        assert!(v.comments.is_none());
        assert!(v.workspace.is_none());
    }

    #[test]
    fn video_list_envelope_defaults_to_empty() {
        let r: VideoListResponse = serde_json::from_str("{}").unwrap();
        assert!(r.videos.is_empty());
    }
}
