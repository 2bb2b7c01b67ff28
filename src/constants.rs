/// Default base URL of the IG demo REST gateway
pub const DEFAULT_BASE_URL: &str = "https://demo-api.ig.com/gateway/deal";
/// User agent string used in HTTP requests to identify this client to the IG Markets API
pub const USER_AGENT: &str = "ig-session/0.1.0";

/// Content type sent when the caller does not override it
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
/// Charset sent when the caller does not override it
pub const DEFAULT_ENCODING: &str = "utf-8";
/// API version used when the caller does not ask for a specific one
pub const DEFAULT_API_VERSION: u8 = 1;

/// Header carrying the application API key
pub const API_KEY_HEADER: &str = "X-IG-API-KEY";
/// Header carrying the requested API version
pub const VERSION_HEADER: &str = "Version";
/// Session security token header, issued by login
pub const SECURITY_TOKEN_HEADER: &str = "X-SECURITY-TOKEN";
/// Client session token header, issued by login
pub const CST_HEADER: &str = "CST";

/// Resource used for login and logout
pub const SESSION_PATH: &str = "session";
/// API version of the login call
pub const LOGIN_API_VERSION: u8 = 2;

/// Default span, in seconds, of a history page
pub const DEFAULT_MAX_SPAN_SECONDS: u32 = 600;
/// Default number of items per history page
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Maximum number of epics accepted by a single multi-market lookup
pub const MAX_EPICS_PER_REQUEST: usize = 50;
/// Date format expected by the history endpoints
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
