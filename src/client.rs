//! The 115 Open Platform client: session state plus one method per endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::endpoints;
use crate::error::Open115Error;
use crate::pkce::PkceChallenge;
use crate::types::*;

/// Configuration for constructing a [`Client`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Open-platform application id.
    pub client_id: String,
    /// API origin; defaults to [`endpoints::DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    /// Bearer token, when one is already held.
    pub token: Option<String>,
    /// Override for the QR-code status endpoint, which lives on its own host.
    pub qrcode_api_url: Option<String>,
}

impl Config {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            base_url: None,
            token: None,
            qrcode_api_url: None,
        }
    }
}

/// A 115 Open Platform API client.
///
/// Holds the session state: base URL, application id, bearer token and the
/// code verifier of the device-auth attempt in flight. Methods that mutate
/// that state take `&mut self`, so concurrent auth attempts on one session
/// do not compile.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    qrcode_api_url: String,
    client_id: String,
    token: Option<String>,
    code_verifier: Option<String>,
}

impl Client {
    /// Construct a new [`Client`] from a [`Config`].
    pub fn new(config: Config) -> Result<Client, Open115Error> {
        let base_url = Url::parse(
            config
                .base_url
                .as_deref()
                .unwrap_or(endpoints::DEFAULT_BASE_URL),
        )?;

        Ok(Client {
            http: reqwest::Client::new(),
            base_url,
            qrcode_api_url: config
                .qrcode_api_url
                .unwrap_or_else(|| endpoints::AUTH_QRCODE_STATUS.to_string()),
            client_id: config.client_id,
            token: config.token,
            code_verifier: None,
        })
    }

    /// Replace the session's bearer token; all subsequent requests carry it.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // -- auth ---------------------------------------------------------------

    /// Start a device-auth attempt: generate a fresh PKCE pair, post the
    /// challenge, and return the device code and QR payload. `data.qrcode`
    /// is rendered as a QR code by the caller for the 115 app to scan;
    /// `uid`/`time`/`sign` feed [`Client::login_qrcode_status`].
    pub async fn auth_device_code(&mut self) -> Result<DeviceCodeResponse, Open115Error> {
        let pkce = PkceChallenge::generate();
        let request = DeviceCodeRequest {
            client_id: self.client_id.clone(),
            code_challenge: pkce.code_challenge,
            code_challenge_method: pkce.code_challenge_method,
        };
        self.code_verifier = Some(pkce.code_verifier);

        self.post_form(endpoints::AUTH_DEVICE_CODE, &request).await
    }

    /// One long-poll of the QR-code status. The server holds the request
    /// until the status changes or its own timeout fires; the caller loops,
    /// stopping when `state != 1` or `data.status == 2`.
    pub async fn login_qrcode_status(
        &self,
        uid: &str,
        time: i64,
        sign: &str,
    ) -> Result<QrCodeStatusResponse, Open115Error> {
        let query = [
            ("uid", uid.to_string()),
            ("time", time.to_string()),
            ("sign", sign.to_string()),
        ];
        self.get(self.qrcode_api_url.as_str(), &query).await
    }

    /// Exchange the device code for an access token, paired with the code
    /// verifier generated by this session's [`Client::auth_device_code`]
    /// call. The verifier is consumed; a granted token is stored on the
    /// session.
    pub async fn auth_device_code_to_token(
        &mut self,
        uid: &str,
    ) -> Result<AccessTokenResponse, Open115Error> {
        let code_verifier = self
            .code_verifier
            .clone()
            .ok_or(Open115Error::MissingCodeVerifier)?;
        let request = DeviceTokenRequest {
            uid: uid.to_string(),
            code_verifier,
        };

        let response: AccessTokenResponse =
            self.post_form(endpoints::AUTH_CODE_TO_TOKEN, &request).await?;
        self.code_verifier = None;
        if let Some(token) = response.access_token() {
            self.token = Some(token.to_string());
        }
        Ok(response)
    }

    /// Refresh the access token. The vendor rate-limits aggressive
    /// refreshing. A granted token overwrites the session token.
    pub async fn auth_refresh_token(
        &mut self,
        refresh_token: &str,
    ) -> Result<AccessTokenResponse, Open115Error> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response: AccessTokenResponse =
            self.post_form(endpoints::AUTH_REFRESH_TOKEN, &request).await?;
        if let Some(token) = response.access_token() {
            self.token = Some(token.to_string());
        }
        Ok(response)
    }

    // -- user ---------------------------------------------------------------

    /// Fetch the user's space usage and VIP level.
    pub async fn user_info(&self) -> Result<UserInfoResponse, Open115Error> {
        self.get(endpoints::USER_INFO, NO_QUERY).await
    }

    // -- upload ticketing ---------------------------------------------------

    /// Fetch OSS upload credentials.
    pub async fn upload_get_token(&self) -> Result<UploadGetTokenResponse, Open115Error> {
        self.get(endpoints::UPLOAD_GET_TOKEN, NO_QUERY).await
    }

    /// Initialize a resumable upload.
    pub async fn upload_init(
        &self,
        request: &UploadInitRequest,
    ) -> Result<UploadInitResponse, Open115Error> {
        self.post_form(endpoints::UPLOAD_INIT, request).await
    }

    /// Resume an interrupted upload by pick code.
    pub async fn upload_resume(
        &self,
        request: &UploadResumeRequest,
    ) -> Result<UploadResumeResponse, Open115Error> {
        self.post_form(endpoints::UPLOAD_RESUME, request).await
    }

    // -- folders ------------------------------------------------------------

    /// Create a folder under `pid` (the root directory id is `"0"`).
    pub async fn folder_add(
        &self,
        pid: &str,
        file_name: &str,
    ) -> Result<FolderAddResponse, Open115Error> {
        let request = FolderAddRequest {
            pid: pid.to_string(),
            file_name: file_name.to_string(),
        };
        self.post_form(endpoints::FOLDER_ADD, &request).await
    }

    /// Fetch folder details.
    pub async fn folder_get_info(&self, file_id: &str) -> Result<FolderInfoResponse, Open115Error> {
        self.get(endpoints::FOLDER_GET_INFO, &[("file_id", file_id)])
            .await
    }

    // -- files --------------------------------------------------------------

    /// List files; the caller supplies paging and filters via the query.
    pub async fn file_list(&self, query: &FileListQuery) -> Result<FileListResponse, Open115Error> {
        self.get(endpoints::FILE_LIST, query).await
    }

    /// Search files and folders by name (or pick code).
    pub async fn file_search(
        &self,
        query: &FileSearchQuery,
    ) -> Result<FileSearchResponse, Open115Error> {
        self.get(endpoints::FILE_SEARCH, query).await
    }

    /// Batch-copy files into `pid`.
    pub async fn file_copy<S: AsRef<str>>(
        &self,
        pid: &str,
        file_ids: &[S],
        nodupli: bool,
    ) -> Result<ApiResponse<Vec<serde_json::Value>>, Open115Error> {
        let request = FileCopyRequest {
            pid: pid.to_string(),
            file_id: join_ids(file_ids),
            nodupli: nodupli.then(|| "1".to_string()),
        };
        self.post_form(endpoints::FILE_COPY, &request).await
    }

    /// Batch-move files into `to_cid`.
    pub async fn file_move<S: AsRef<str>>(
        &self,
        file_ids: &[S],
        to_cid: &str,
    ) -> Result<ApiResponse<Vec<serde_json::Value>>, Open115Error> {
        let request = FileMoveRequest {
            file_ids: join_ids(file_ids),
            to_cid: to_cid.to_string(),
        };
        self.post_form(endpoints::FILE_MOVE, &request).await
    }

    /// Resolve download URLs from a pick code. The response data is keyed
    /// by file id.
    pub async fn file_down_url(&self, pick_code: &str) -> Result<DownUrlResponse, Open115Error> {
        let request = DownUrlRequest {
            pick_code: pick_code.to_string(),
        };
        self.post_form(endpoints::FILE_DOWN_URL, &request).await
    }

    /// Batch-rename and/or star files. `star`: `Some(true)` stars,
    /// `Some(false)` unstars, `None` leaves it alone.
    pub async fn file_update<S: AsRef<str>>(
        &self,
        file_ids: &[S],
        file_name: Option<&str>,
        star: Option<bool>,
    ) -> Result<FileUpdateResponse, Open115Error> {
        let request = FileUpdateRequest {
            file_id: join_ids(file_ids),
            file_name: file_name.map(str::to_string),
            star: star.map(|s| if s { "1".to_string() } else { "0".to_string() }),
        };
        self.post_form(endpoints::FILE_UPDATE, &request).await
    }

    /// Batch-delete files and folders.
    pub async fn file_delete<S: AsRef<str>>(
        &self,
        file_ids: &[S],
        parent_id: Option<&str>,
    ) -> Result<FileDeleteResponse, Open115Error> {
        let request = FileDeleteRequest {
            file_id: join_ids(file_ids),
            parent_id: parent_id.map(str::to_string),
        };
        self.post_form(endpoints::FILE_DELETE, &request).await
    }

    // -- recycle bin --------------------------------------------------------

    /// List recycle-bin contents. `limit` defaults to 30 server-side and is
    /// capped at 200.
    pub async fn rb_list(&self, offset: i64, limit: i64) -> Result<RbListResponse, Open115Error> {
        let query = [
            ("offset", offset.to_string()),
            ("limit", limit.to_string()),
        ];
        self.get(endpoints::RB_LIST, &query).await
    }

    /// Restore recycle-bin entries.
    pub async fn rb_revert<S: AsRef<str>>(
        &self,
        tld: &[S],
    ) -> Result<RbRevertResponse, Open115Error> {
        let request = RbRequest { tld: join_ids(tld) };
        self.post_form(endpoints::RB_REVERT, &request).await
    }

    /// Delete recycle-bin entries; an empty slice clears the whole bin.
    pub async fn rb_del<S: AsRef<str>>(&self, tld: &[S]) -> Result<RbDelResponse, Open115Error> {
        let request = RbRequest { tld: join_ids(tld) };
        self.post_form(endpoints::RB_DEL, &request).await
    }

    // -- vip ----------------------------------------------------------------

    /// Fetch the VIP product-list QR jump URL for a device.
    pub async fn vip_qr_url(
        &self,
        open_device: &str,
        default_product_id: Option<&str>,
    ) -> Result<VipQrUrlResponse, Open115Error> {
        let query = [
            ("open_device", open_device),
            ("default_product_id", default_product_id.unwrap_or("")),
        ];
        self.get(endpoints::VIP_QR_URL, &query).await
    }

    // -- request plumbing ---------------------------------------------------

    fn url_for(&self, path: &str) -> Result<Url, Open115Error> {
        if path.starts_with("http://") || path.starts_with("https://") {
            Ok(Url::parse(path)?)
        } else {
            Ok(self.base_url.join(path)?)
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Open115Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        debug!(%url, "GET");
        let response = self
            .apply_auth(self.http.get(url))
            .query(query)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn post_form<T, B>(&self, path: &str, body: &B) -> Result<T, Open115Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        debug!(%url, "POST");
        let response = self
            .apply_auth(self.http.post(url))
            .form(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Unwrap the transport envelope: non-2xx becomes [`Open115Error::Api`]
    /// carrying the vendor's message when the error body parses, and a 2xx
    /// body that does not match the typed shape becomes
    /// [`Open115Error::HandleResponse`].
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, Open115Error> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(%status, "API request failed");
            return Err(Open115Error::Api {
                status,
                message: vendor_message(&body).unwrap_or(body),
            });
        }

        serde_json::from_str(&body).map_err(|err| Open115Error::HandleResponse {
            msg: format!("failed to parse response JSON: {err}"),
        })
    }
}

/// Serializes to no query pairs at all.
const NO_QUERY: &[(&str, &str)] = &[];

/// The vendor's error bodies carry `message` or `error` next to a code.
fn vendor_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
