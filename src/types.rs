//! Request and response shapes for the 115 Open Platform API.
//!
//! Field names and optionality follow the vendor's documented schema. The
//! vendor is loose with scalar types (numbers arrive as strings and vice
//! versa depending on endpoint), so ids, sizes and timestamps are modeled
//! with [`NumOrString`] and responses keep unknown-shape corners as
//! [`serde_json::Value`] rather than failing to parse.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scalar the vendor serves as either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumOrString {
    Num(i64),
    Str(String),
}

impl NumOrString {
    /// Numeric view, parsing the string form when necessary.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(s) => s.parse().ok(),
        }
    }
}

impl std::fmt::Display for NumOrString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => n.fmt(f),
            Self::Str(s) => s.fmt(f),
        }
    }
}

/// The vendor's success flag: a bool on some endpoints, 0/1 on others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateFlag {
    Bool(bool),
    Num(i64),
}

impl StateFlag {
    pub fn is_ok(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::Num(n) => n != 0,
        }
    }
}

/// The standard response envelope: `{ state, message, code, data }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub state: Option<StateFlag>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<NumOrString>,
    #[serde(default)]
    pub data: Option<T>,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Device authorization request (form-encoded).
#[derive(Debug, Serialize)]
pub struct DeviceCodeRequest {
    pub client_id: String,
    pub code_challenge: String,
    pub code_challenge_method: String,
}

/// Device code + QR payload. `qrcode` is the string the third-party client
/// renders as a QR code for the 115 app to scan; `uid`, `time` and `sign`
/// feed the status long-poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceCodePayload {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub qrcode: Option<String>,
    #[serde(default)]
    pub sign: Option<String>,
}

pub type DeviceCodeResponse = ApiResponse<DeviceCodePayload>;

/// Inner payload of the QR-code status long-poll. Only present once the user
/// has scanned or entered the device code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeStatus {
    #[serde(default)]
    pub msg: Option<String>,
    /// 1: scanned, waiting for confirmation; 2: confirmed, stop polling.
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub version: Option<String>,
}

/// QR-code status response. Not wrapped in the standard envelope; `state` is
/// the polling control flag (0: QR code invalid, stop polling; 1: keep going).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeStatusResponse {
    #[serde(default)]
    pub state: Option<i64>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<QrCodeStatus>,
}

/// Token request using a device code plus the attempt's code verifier.
#[derive(Debug, Serialize)]
pub struct DeviceTokenRequest {
    pub uid: String,
    pub code_verifier: String,
}

/// Refresh-token request.
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token response. The vendor has served the tokens both at the top level
/// and inside `data`, so both spots are modeled and
/// [`AccessTokenResponse::access_token`] checks them in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub state: Option<StateFlag>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<NumOrString>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access-token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errno: Option<i64>,
}

impl AccessTokenResponse {
    /// The granted access token, wherever the vendor put it.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .or_else(|| self.data.as_ref()?.get("access_token")?.as_str())
    }

    /// The granted refresh token, wherever the vendor put it.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token
            .as_deref()
            .or_else(|| self.data.as_ref()?.get("refresh_token")?.as_str())
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// One space figure, in bytes and human-formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceSize {
    #[serde(default)]
    pub size: Option<NumOrString>,
    #[serde(default)]
    pub size_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceInfo {
    #[serde(default)]
    pub all_total: Option<SpaceSize>,
    #[serde(default)]
    pub all_remain: Option<SpaceSize>,
    #[serde(default)]
    pub all_use: Option<SpaceSize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VipInfo {
    #[serde(default)]
    pub level_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfoPayload {
    #[serde(default)]
    pub user_id: Option<NumOrString>,
    #[serde(default)]
    pub rt_space_info: Option<SpaceInfo>,
    #[serde(default)]
    pub vip_info: Option<VipInfo>,
}

pub type UserInfoResponse = ApiResponse<UserInfoPayload>;

// ---------------------------------------------------------------------------
// Upload ticketing
// ---------------------------------------------------------------------------

/// OSS upload credential set. Key names are the vendor's (OSS-style casing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCredential {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default, rename = "AccessKeyId")]
    pub access_key_id: Option<String>,
    #[serde(default, rename = "AccessKeySecret")]
    pub access_key_secret: Option<String>,
    #[serde(default, rename = "SecurityToken")]
    pub security_token: Option<String>,
    #[serde(default, rename = "Expiration")]
    pub expiration: Option<String>,
}

pub type UploadGetTokenResponse = ApiResponse<Vec<UploadCredential>>;

/// Resumable-upload initialization request.
#[derive(Debug, Clone, Serialize)]
pub struct UploadInitRequest {
    pub file_name: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Upload target convention string.
    pub target: String,
    /// SHA-1 of the whole file.
    pub fileid: String,
    /// SHA-1 of the first 128 KiB, for instant-upload matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preid: Option<String>,
    /// Upload task key from a previous scheduling response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_code: Option<String>,
    /// Folder-scheduling marker (0: single file, 1/2: folder task phases).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topupload: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadCallback {
    #[serde(default)]
    pub callback: Option<String>,
    #[serde(default)]
    pub callback_var: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadInitPayload {
    /// Upload task key, used to resume.
    #[serde(default)]
    pub pick_code: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    /// OSS object id.
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub callback: Option<Value>,
}

pub type UploadInitResponse = ApiResponse<Vec<UploadInitPayload>>;

/// Resumable-upload continuation request.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResumeRequest {
    pub file_size: u64,
    pub target: String,
    pub fileid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResumePayload {
    #[serde(default)]
    pub pick_code: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub callback: Option<Value>,
}

pub type UploadResumeResponse = ApiResponse<Vec<UploadResumePayload>>;

// ---------------------------------------------------------------------------
// Folders
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FolderAddRequest {
    /// Parent directory id; the root is `"0"`.
    pub pid: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderAddPayload {
    #[serde(default)]
    pub file_id: Option<NumOrString>,
    #[serde(default)]
    pub file_name: Option<String>,
}

pub type FolderAddResponse = ApiResponse<FolderAddPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderPathEntry {
    #[serde(default)]
    pub file_id: Option<NumOrString>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderInfoPayload {
    /// Number of contained files.
    #[serde(default)]
    pub count: Option<NumOrString>,
    #[serde(default)]
    pub size: Option<NumOrString>,
    #[serde(default)]
    pub folder_count: Option<NumOrString>,
    /// Video duration in seconds; -1 while the vendor is still counting.
    #[serde(default)]
    pub play_long: Option<i64>,
    #[serde(default)]
    pub show_play_long: Option<i64>,
    #[serde(default)]
    pub ptime: Option<NumOrString>,
    #[serde(default)]
    pub utime: Option<NumOrString>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub pick_code: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub file_id: Option<NumOrString>,
    #[serde(default)]
    pub is_mark: Option<NumOrString>,
    #[serde(default)]
    pub open_time: Option<i64>,
    /// 1: file; 0: folder.
    #[serde(default)]
    pub file_category: Option<NumOrString>,
    #[serde(default)]
    pub paths: Option<Vec<FolderPathEntry>>,
}

pub type FolderInfoResponse = ApiResponse<FolderInfoPayload>;

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Query parameters for the file-list endpoint. The caller drives paging via
/// `limit`/`offset`; no looping happens client-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileListQuery {
    /// Area id: 1 normal, 7 recycle bin, 120 purged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aid: Option<i64>,
    /// Directory id; the root is 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<i64>,
    /// Coarse type filter: 1 document, 2 image, 3 music, 4 video,
    /// 5 archive, 6 application.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// 1: ascending, 0: descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asc: Option<i64>,
    /// Sort field: `file_name`, `file_size`, `user_utime`, `file_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_order: Option<i64>,
    /// 1: include folders, 0: files only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdir: Option<i64>,
    /// 1: starred entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_dir: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_open_time: Option<bool>,
    /// Restrict to the current folder only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cur: Option<bool>,
}

/// One file-list entry. The terse key names are the vendor's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// File id.
    #[serde(default)]
    pub fid: Option<NumOrString>,
    /// Area id: 1 normal, 7 recycle bin, 120 purged.
    #[serde(default)]
    pub aid: Option<NumOrString>,
    /// Parent directory id.
    #[serde(default)]
    pub pid: Option<NumOrString>,
    /// 0: folder, 1: file.
    #[serde(default)]
    pub fc: Option<NumOrString>,
    /// File or folder name.
    #[serde(default, rename = "fn")]
    pub name: Option<String>,
    /// Folder cover.
    #[serde(default)]
    pub fco: Option<String>,
    /// 1: starred.
    #[serde(default)]
    pub ism: Option<NumOrString>,
    /// 1: hidden/private.
    #[serde(default)]
    pub isp: Option<NumOrString>,
    /// Pick code.
    #[serde(default)]
    pub pc: Option<String>,
    /// Modification time.
    #[serde(default)]
    pub upt: Option<NumOrString>,
    #[serde(default)]
    pub uet: Option<NumOrString>,
    /// Upload time.
    #[serde(default)]
    pub uppt: Option<NumOrString>,
    /// File note.
    #[serde(default)]
    pub fdesc: Option<String>,
    /// Labels.
    #[serde(default)]
    pub fl: Option<Value>,
    #[serde(default)]
    pub sha1: Option<String>,
    /// File size.
    #[serde(default)]
    pub fs: Option<NumOrString>,
    /// Upload state: 1 complete, 0/2 incomplete.
    #[serde(default)]
    pub fta: Option<NumOrString>,
    /// Suffix.
    #[serde(default)]
    pub ico: Option<String>,
    /// 1: video.
    #[serde(default)]
    pub isv: Option<i64>,
    /// Audio/video duration.
    #[serde(default)]
    pub play_long: Option<Value>,
    /// Video still.
    #[serde(default)]
    pub v_img: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumb: Option<String>,
    /// Original image URL.
    #[serde(default)]
    pub uo: Option<String>,
}

/// One ancestor in the file-list breadcrumb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListPathEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub aid: Option<NumOrString>,
    #[serde(default)]
    pub cid: Option<NumOrString>,
    #[serde(default)]
    pub pid: Option<NumOrString>,
    #[serde(default)]
    pub isp: Option<NumOrString>,
    #[serde(default)]
    pub p_cid: Option<NumOrString>,
}

/// File-list response. This endpoint does not use the standard envelope; it
/// carries its own state/error fields next to the echoed query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub data: Vec<FileEntry>,
    /// Breadcrumb from the root to the listed directory.
    #[serde(default)]
    pub path: Vec<FileListPathEntry>,
    /// Total entries in the directory.
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub sys_count: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub aid: Option<NumOrString>,
    #[serde(default)]
    pub cid: Option<NumOrString>,
    #[serde(default)]
    pub is_asc: Option<i64>,
    #[serde(default)]
    pub star: Option<i64>,
    #[serde(default, rename = "type")]
    pub file_type: Option<i64>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub cur: Option<i64>,
    #[serde(default)]
    pub fields: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub fc_mix: Option<i64>,
    #[serde(default)]
    pub state: Option<StateFlag>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errno: Option<i64>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileSearchQuery {
    /// The search keyword (or a pick code, see `pick_code`).
    pub search_value: String,
    /// "1": treat `search_value` as a pick code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_label: Option<String>,
    /// -1 suppresses the listing entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    /// Lower bound of the match window, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte_day: Option<String>,
    /// Upper bound of the match window, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_day: Option<String>,
    /// 1: folders only, 2: files only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fc: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub file_id: Option<NumOrString>,
    #[serde(default)]
    pub user_id: Option<NumOrString>,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<NumOrString>,
    #[serde(default)]
    pub user_ptime: Option<NumOrString>,
    #[serde(default)]
    pub user_utime: Option<NumOrString>,
    #[serde(default)]
    pub pick_code: Option<String>,
    #[serde(default)]
    pub parent_id: Option<NumOrString>,
    #[serde(default)]
    pub area_id: Option<NumOrString>,
    #[serde(default)]
    pub is_private: Option<i64>,
    /// 1: file, 0: folder.
    #[serde(default)]
    pub file_category: Option<NumOrString>,
    #[serde(default)]
    pub ico: Option<String>,
}

/// Search response: the standard envelope plus top-level paging fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSearchResponse {
    #[serde(default)]
    pub state: Option<StateFlag>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<NumOrString>,
    #[serde(default)]
    pub data: Vec<SearchItem>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FileCopyRequest {
    /// Destination directory id.
    pub pid: String,
    /// Comma-joined source ids.
    pub file_id: String,
    /// "1": refuse duplicates in the destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodupli: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FileMoveRequest {
    /// Comma-joined ids to move.
    pub file_ids: String,
    /// Destination directory id; the root is `"0"`.
    pub to_cid: String,
}

#[derive(Debug, Serialize)]
pub struct DownUrlRequest {
    pub pick_code: String,
}

/// One URL candidate inside a download-URL entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadUrl {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub client: Option<i64>,
    #[serde(default)]
    pub desc: Option<Value>,
    #[serde(default)]
    pub isp: Option<Value>,
    #[serde(default)]
    pub oss_id: Option<String>,
    #[serde(default)]
    pub ooid: Option<String>,
}

/// Download info for one file; the response keys these by file id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadInfo {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<NumOrString>,
    #[serde(default)]
    pub pick_code: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub url: Option<DownloadUrl>,
}

pub type DownUrlResponse = ApiResponse<HashMap<String, DownloadInfo>>;

#[derive(Debug, Serialize)]
pub struct FileUpdateRequest {
    /// Comma-joined ids to update.
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// "1": star, "0": unstar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileUpdatePayload {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub star: Option<NumOrString>,
}

pub type FileUpdateResponse = ApiResponse<FileUpdatePayload>;

#[derive(Debug, Serialize)]
pub struct FileDeleteRequest {
    /// Comma-joined ids to delete.
    pub file_id: String,
    /// Parent directory of the deleted entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

pub type FileDeleteResponse = ApiResponse<Vec<NumOrString>>;

// ---------------------------------------------------------------------------
// Recycle bin
// ---------------------------------------------------------------------------

/// One recycle-bin entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecycleBinEntry {
    /// Recycle-bin id (distinct from the original file id).
    #[serde(default)]
    pub id: Option<NumOrString>,
    #[serde(default)]
    pub file_name: Option<String>,
    /// "1": file, "2": directory.
    #[serde(default, rename = "type")]
    pub entry_type: Option<NumOrString>,
    #[serde(default)]
    pub file_size: Option<NumOrString>,
    /// Deletion time.
    #[serde(default)]
    pub dtime: Option<NumOrString>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    /// -1 while a restore is in progress, 0 otherwise.
    #[serde(default)]
    pub status: Option<NumOrString>,
    /// Original parent directory id.
    #[serde(default)]
    pub cid: Option<NumOrString>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub pick_code: Option<String>,
}

/// Recycle-bin listing data: fixed paging fields plus one key per entry,
/// keyed by recycle-bin id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RbListData {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub count: Option<NumOrString>,
    /// Whether a recycle-bin password is set.
    #[serde(default)]
    pub rb_pass: Option<i64>,
    #[serde(flatten)]
    pub entries: HashMap<String, RecycleBinEntry>,
}

pub type RbListResponse = ApiResponse<RbListData>;

/// Restore/delete request; `tld` is the comma-joined recycle-bin ids.
#[derive(Debug, Serialize)]
pub struct RbRequest {
    pub tld: String,
}

/// Per-entry restore outcome, keyed by recycle-bin id in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbRevertResult {
    #[serde(default)]
    pub state: Option<StateFlag>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errno: Option<i64>,
    #[serde(default)]
    pub file_id: Option<Value>,
}

pub type RbRevertResponse = ApiResponse<HashMap<String, RbRevertResult>>;

pub type RbDelResponse = ApiResponse<Vec<NumOrString>>;

// ---------------------------------------------------------------------------
// VIP
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VipQrUrlPayload {
    #[serde(default)]
    pub qrcode_url: Option<String>,
}

pub type VipQrUrlResponse = ApiResponse<VipQrUrlPayload>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_accepts_bool_and_numeric_state() {
        let bool_state: ApiResponse<Value> =
            serde_json::from_value(json!({"state": true, "message": "", "code": 0})).unwrap();
        assert!(bool_state.state.unwrap().is_ok());

        let num_state: ApiResponse<Value> =
            serde_json::from_value(json!({"state": 0, "message": "err", "code": "40140125"}))
                .unwrap();
        assert!(!num_state.state.unwrap().is_ok());
        assert_eq!(num_state.code.unwrap().to_string(), "40140125");
    }

    #[test]
    fn token_response_finds_tokens_at_either_level() {
        let top: AccessTokenResponse = serde_json::from_value(json!({
            "access_token": "at", "refresh_token": "rt", "expires_in": 2592000
        }))
        .unwrap();
        assert_eq!(top.access_token(), Some("at"));
        assert_eq!(top.refresh_token(), Some("rt"));

        let nested: AccessTokenResponse = serde_json::from_value(json!({
            "state": 1,
            "data": {"access_token": "at2", "refresh_token": "rt2", "expires_in": 2592000}
        }))
        .unwrap();
        assert_eq!(nested.access_token(), Some("at2"));
        assert_eq!(nested.refresh_token(), Some("rt2"));
    }

    #[test]
    fn rb_list_data_collects_keyed_entries() {
        let data: RbListData = serde_json::from_value(json!({
            "offset": 0,
            "limit": 30,
            "count": "2",
            "rb_pass": 0,
            "9000001": {"id": "9000001", "file_name": "a.txt", "type": "1", "file_size": "12"},
            "9000002": {"id": "9000002", "file_name": "b", "type": "2"}
        }))
        .unwrap();

        assert_eq!(data.count.unwrap().as_i64(), Some(2));
        assert_eq!(data.entries.len(), 2);
        assert_eq!(
            data.entries["9000001"].file_name.as_deref(),
            Some("a.txt")
        );
    }

    #[test]
    fn file_entry_tolerates_string_and_numeric_ids() {
        let entry: FileEntry = serde_json::from_value(json!({
            "fid": "123", "pid": 0, "fc": "1", "fn": "movie.mkv", "fs": "734003200",
            "pc": "abcdef", "sha1": "DA39A3EE"
        }))
        .unwrap();
        assert_eq!(entry.fid.unwrap().as_i64(), Some(123));
        assert_eq!(entry.name.as_deref(), Some("movie.mkv"));
        assert_eq!(entry.fs.unwrap().as_i64(), Some(734_003_200));
    }

    #[test]
    fn down_url_response_is_keyed_by_file_id() {
        let resp: DownUrlResponse = serde_json::from_value(json!({
            "state": true,
            "message": "",
            "code": 0,
            "data": {
                "2943963141539": {
                    "file_name": "a.zip",
                    "file_size": 1024,
                    "pick_code": "pc1",
                    "url": {"url": "https://cdn.example/a.zip", "client": 1}
                }
            }
        }))
        .unwrap();

        let data = resp.data.unwrap();
        let info = &data["2943963141539"];
        assert_eq!(
            info.url.as_ref().unwrap().url.as_deref(),
            Some("https://cdn.example/a.zip")
        );
    }
}
