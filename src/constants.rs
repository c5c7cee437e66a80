/// Base URL of the Mobbin Supabase project
pub const BASE_URL: &str = "https://ujasntkfphywizsdaapi.supabase.co";
/// Placeholder used when no anon key is configured
pub const DEFAULT_ANON_KEY: &str = "default_anon_key";
/// Origin header sent with every request
pub const ORIGIN: &str = "https://mobbin.com";
/// Referer header sent with every request
pub const REFERER: &str = "https://mobbin.com/";
/// Browser user agent presented to the API
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36 Edg/114.0.1823.67";
/// Client hint brands matching [`USER_AGENT`]
pub const SEC_CH_UA: &str = r#""Not.A/Brand";v="8", "Chromium";v="114", "Microsoft Edge";v="114""#;
/// Client hint platform matching [`USER_AGENT`]
pub const SEC_CH_UA_PLATFORM: &str = r#""macOS""#;
/// Supabase client identification
pub const X_CLIENT_INFO: &str = "supabase-js/1.35.7";
/// Number of apps requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// One-time code request endpoint
pub const OTP_PATH: &str = "/auth/v1/otp";
/// One-time code verification endpoint
pub const VERIFY_PATH: &str = "/auth/v1/verify";
/// Token refresh endpoint
pub const TOKEN_PATH: &str = "/auth/v1/token";
/// Filtered app listing RPC
pub const APPS_RPC_PATH: &str = "/rest/v1/rpc/get_apps_with_preview_screens_filter";
/// Workspace listing endpoint
pub const WORKSPACES_PATH: &str = "/rest/v1/workspaces";
/// Collection creation endpoint
pub const COLLECTIONS_PATH: &str = "/rest/v1/collections";
/// Column selection used when listing workspaces with their collections
pub const WORKSPACES_SELECT: &str = "name,id,type,collections(name,id,updatedAt,createdAt,description)";
