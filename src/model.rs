//! Persisted entities and API body types. Responses use camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account row. The password never leaves the server.
#[derive(FromRow, Serialize, Clone, Debug)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Incoming signup/login/add-user body.
#[derive(Deserialize, Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// File metadata row.
#[derive(FromRow, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub id: i32,
    pub file_name: String,
    pub file_path: String,
    pub size: i64,
}

/// Incoming file registration body.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FileInfoBody {
    pub file_name: String,
    pub file_path: String,
    pub size: i64,
}

/// Stored photo row. `file_path` points at the uploaded bytes on disk.
#[derive(FromRow, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub name: String,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Photo projection for listings: the download URL is computed per request.
/// The thumbnail URL equals the full URL; no thumbnails are generated.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PhotoView {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl PhotoView {
    pub fn new(photo: &Photo, base_url: &str) -> Self {
        let url = format!("{}/api/photos/{}/download", base_url, photo.id);
        PhotoView {
            id: photo.id,
            name: photo.name.clone(),
            thumbnail_url: url.clone(),
            url,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct Greeting {
    pub id: i64,
    pub content: String,
}

impl Greeting {
    pub fn new(content: impl Into<String>) -> Self {
        Greeting {
            id: 1,
            content: content.into(),
        }
    }
}

/// FTP relay request: one remote endpoint and one local/remote path pair.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub server: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub local_path: String,
    pub remote_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_omits_password() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "username": "alice"}));
    }

    #[test]
    fn file_info_uses_camel_case_keys() {
        let info = FileInfo {
            id: 3,
            file_name: "notes.txt".into(),
            file_path: "/data/notes.txt".into(),
            size: 42,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["fileName"], "notes.txt");
        assert_eq!(json["filePath"], "/data/notes.txt");
        assert_eq!(json["size"], 42);
    }

    #[test]
    fn photo_view_builds_download_url() {
        let photo = Photo {
            id: 9,
            name: "cat.png".into(),
            file_path: "uploads/abc.png".into(),
            uploaded_at: Utc::now(),
        };
        let view = PhotoView::new(&photo, "http://localhost:8080");
        assert_eq!(view.url, "http://localhost:8080/api/photos/9/download");
        assert_eq!(view.thumbnail_url, view.url);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("thumbnailUrl").is_some());
    }

    #[test]
    fn transfer_request_accepts_camel_case() {
        let req: TransferRequest = serde_json::from_value(serde_json::json!({
            "server": "ftp.example.com",
            "port": 21,
            "user": "u",
            "pass": "p",
            "localPath": "/tmp/a.bin",
            "remotePath": "/inbox/a.bin"
        }))
        .unwrap();
        assert_eq!(req.local_path, "/tmp/a.bin");
        assert_eq!(req.port, 21);
    }

    #[test]
    fn greeting_id_is_fixed() {
        assert_eq!(Greeting::new("Hello, World!").id, 1);
    }
}
