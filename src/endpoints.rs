//! The 115 Open Platform routing table.
//!
//! Paths are fixed by the vendor and reproduced verbatim; each constant links
//! to the vendor's documentation page for that endpoint.

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.115.com";

/// Request a device code and QR-code payload.
/// <https://www.yuque.com/115yun/open/shtpzfhewv5nag11>
pub const AUTH_DEVICE_CODE: &str = "/open/authDeviceCode";

/// Long-poll the QR-code scan status. Lives on a different host than the
/// API origin, so this is an absolute URL rather than a path.
/// <https://www.yuque.com/115yun/open/shtpzfhewv5nag11>
pub const AUTH_QRCODE_STATUS: &str = "https://qrcodeapi.115.com/get/status";

/// Exchange a device code for an access token.
/// <https://www.yuque.com/115yun/open/shtpzfhewv5nag11>
pub const AUTH_CODE_TO_TOKEN: &str = "/open/deviceCodeToToken";

/// Refresh an access token. The vendor rate-limits aggressive refreshing.
/// <https://www.yuque.com/115yun/open/shtpzfhewv5nag11>
pub const AUTH_REFRESH_TOKEN: &str = "/open/refreshToken";

/// Fetch the user's space usage and VIP level.
/// <https://www.yuque.com/115yun/open/ot1litggzxa1czww>
pub const USER_INFO: &str = "/open/user/info";

/// Fetch OSS upload credentials.
/// <https://www.yuque.com/115yun/open/kzacvzl0g7aiyyn4>
pub const UPLOAD_GET_TOKEN: &str = "/open/upload/get_token";

/// Initialize a resumable upload.
/// <https://www.yuque.com/115yun/open/ul4mrauo5i2uza0q>
pub const UPLOAD_INIT: &str = "/open/upload/init";

/// Resume an interrupted upload.
/// <https://www.yuque.com/115yun/open/tzvi9sbcg59msddz>
pub const UPLOAD_RESUME: &str = "/open/upload/resume";

/// Create a folder.
/// <https://www.yuque.com/115yun/open/qur839kyx9cgxpxi>
pub const FOLDER_ADD: &str = "/open/folder/add";

/// Fetch folder details.
/// <https://www.yuque.com/115yun/open/rl8zrhe2nag21dfw>
pub const FOLDER_GET_INFO: &str = "/open/folder/get_info";

/// List files in a directory.
/// <https://www.yuque.com/115yun/open/kz9ft9a7s57ep868>
pub const FILE_LIST: &str = "/open/ufile/files";

/// Search files and folders by name.
/// <https://www.yuque.com/115yun/open/ft2yelxzopusus38>
pub const FILE_SEARCH: &str = "/open/ufile/search";

/// Batch-copy files.
/// <https://www.yuque.com/115yun/open/lvas49ar94n47bbk>
pub const FILE_COPY: &str = "/open/ufile/copy";

/// Batch-move files.
/// <https://www.yuque.com/115yun/open/vc6fhi2mrkenmav2>
pub const FILE_MOVE: &str = "/open/ufile/move";

/// Resolve a download URL from a pick code.
/// <https://www.yuque.com/115yun/open/um8whr91bxb5997o>
pub const FILE_DOWN_URL: &str = "/open/ufile/downurl";

/// Batch-rename and/or star files.
/// <https://www.yuque.com/115yun/open/gyrpw5a0zc4sengm>
pub const FILE_UPDATE: &str = "/open/ufile/update";

/// Batch-delete files and folders.
/// <https://www.yuque.com/115yun/open/kt04fu8vcchd2fnb>
pub const FILE_DELETE: &str = "/open/ufile/delete";

/// List recycle-bin contents.
/// <https://www.yuque.com/115yun/open/bg7l4328t98fwgex>
pub const RB_LIST: &str = "/open/ufile/rb/list";

/// Restore recycle-bin entries.
/// <https://www.yuque.com/115yun/open/gq293z80a3kmxbaq>
pub const RB_REVERT: &str = "/open/rb/revert";

/// Delete recycle-bin entries (all of them when no ids are given).
/// <https://www.yuque.com/115yun/open/gwtof85nmboulrce>
pub const RB_DEL: &str = "/open/rb/del";

/// Fetch the VIP product-list QR jump URL.
/// <https://www.yuque.com/115yun/open/yifbvxan6szytyng>
pub const VIP_QR_URL: &str = "/open/vip/qr_url";
