//! Typed client for the 115 Open Platform REST API.
//!
//! Covers the device-code (QR scan) authentication flow with PKCE, file and
//! folder CRUD, the recycle bin, upload ticketing and download-URL
//! resolution. Every method maps to exactly one HTTP request; paging,
//! polling loops and retries are the caller's business.
//!
//! # Example: authenticate and list files
//!
//! ```no_run
//! use open115::{Client, Config, FileListQuery};
//!
//! # async fn example() -> Result<(), open115::Open115Error> {
//! let mut client = Client::new(Config::new("your-app-id"))?;
//!
//! // Step 1: start a device-auth attempt and show data.qrcode to the user
//! // as a QR code for the 115 app to scan.
//! let device = client.auth_device_code().await?;
//! let data = device.data.expect("device code payload");
//! let (uid, time, sign) = (
//!     data.uid.unwrap_or_default(),
//!     data.time.unwrap_or_default(),
//!     data.sign.unwrap_or_default(),
//! );
//!
//! // Step 2: long-poll until the user confirms in the app.
//! loop {
//!     let status = client.login_qrcode_status(&uid, time, &sign).await?;
//!     if status.state != Some(1) {
//!         break; // QR code expired or was revoked
//!     }
//!     if status.data.and_then(|d| d.status) == Some(2) {
//!         break; // confirmed
//!     }
//! }
//!
//! // Step 3: exchange the device code for a bearer token (stored on the
//! // session) and start making calls.
//! client.auth_device_code_to_token(&uid).await?;
//! let listing = client
//!     .file_list(&FileListQuery {
//!         cid: Some(0),
//!         limit: Some(20),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} entries", listing.data.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
mod error;
pub mod pkce;
pub mod types;

pub use client::{Client, Config};
pub use error::Open115Error;
pub use types::*;
