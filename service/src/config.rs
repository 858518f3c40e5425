use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default token endpoint for the video platform (Google / YouTube).
pub const DEFAULT_VIDEO_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Default token endpoint for the chat platform (Discord).
pub const DEFAULT_CHAT_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
/// Default token endpoint for the music platform (Spotify).
pub const DEFAULT_MUSIC_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default token endpoint for the social platform (X / Twitter).
pub const DEFAULT_SOCIAL_TOKEN_URL: &str = "https://api.twitter.com/2/oauth2/token";
/// Default token endpoint for the streaming platform (Twitch).
pub const DEFAULT_STREAMING_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that are allowed to receive server responses.
    /// A `*` entry allows any origin to be echoed back.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    allowed_origins: Vec<String>,

    /// OAuth client ID registered with the video platform.
    #[arg(long, env)]
    video_client_id: Option<String>,

    /// OAuth client secret registered with the video platform.
    #[arg(long, env, hide_env_values = true)]
    video_client_secret: Option<String>,

    /// Token endpoint of the video platform.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_VIDEO_TOKEN_URL)]
    video_token_url: String,

    /// OAuth client ID registered with the chat platform.
    #[arg(long, env)]
    chat_client_id: Option<String>,

    /// OAuth client secret registered with the chat platform.
    #[arg(long, env, hide_env_values = true)]
    chat_client_secret: Option<String>,

    /// Token endpoint of the chat platform.
    #[arg(long, env, default_value = DEFAULT_CHAT_TOKEN_URL)]
    chat_token_url: String,

    /// OAuth client ID registered with the music platform.
    #[arg(long, env)]
    music_client_id: Option<String>,

    /// OAuth client secret registered with the music platform.
    #[arg(long, env, hide_env_values = true)]
    music_client_secret: Option<String>,

    /// Token endpoint of the music platform.
    #[arg(long, env, default_value = DEFAULT_MUSIC_TOKEN_URL)]
    music_token_url: String,

    /// OAuth client ID registered with the social platform.
    #[arg(long, env)]
    social_client_id: Option<String>,

    /// OAuth client secret registered with the social platform.
    #[arg(long, env, hide_env_values = true)]
    social_client_secret: Option<String>,

    /// Token endpoint of the social platform.
    #[arg(long, env, default_value = DEFAULT_SOCIAL_TOKEN_URL)]
    social_token_url: String,

    /// OAuth client ID registered with the streaming platform.
    #[arg(long, env)]
    streaming_client_id: Option<String>,

    /// OAuth client secret registered with the streaming platform.
    #[arg(long, env, hide_env_values = true)]
    streaming_client_secret: Option<String>,

    /// Token endpoint of the streaming platform.
    #[arg(long, env, default_value = DEFAULT_STREAMING_TOKEN_URL)]
    streaming_token_url: String,

    /// Serve the OpenAPI document and RapiDoc UI alongside the API
    #[arg(long, env)]
    pub api_docs: bool,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the configured CORS origins with surrounding whitespace and empty entries removed.
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    pub fn video_client_id(&self) -> Option<&str> {
        self.video_client_id.as_deref()
    }

    pub fn video_client_secret(&self) -> Option<&str> {
        self.video_client_secret.as_deref()
    }

    pub fn video_token_url(&self) -> &str {
        &self.video_token_url
    }

    pub fn chat_client_id(&self) -> Option<&str> {
        self.chat_client_id.as_deref()
    }

    pub fn chat_client_secret(&self) -> Option<&str> {
        self.chat_client_secret.as_deref()
    }

    pub fn chat_token_url(&self) -> &str {
        &self.chat_token_url
    }

    pub fn music_client_id(&self) -> Option<&str> {
        self.music_client_id.as_deref()
    }

    pub fn music_client_secret(&self) -> Option<&str> {
        self.music_client_secret.as_deref()
    }

    pub fn music_token_url(&self) -> &str {
        &self.music_token_url
    }

    pub fn social_client_id(&self) -> Option<&str> {
        self.social_client_id.as_deref()
    }

    pub fn social_client_secret(&self) -> Option<&str> {
        self.social_client_secret.as_deref()
    }

    pub fn social_token_url(&self) -> &str {
        &self.social_token_url
    }

    pub fn streaming_client_id(&self) -> Option<&str> {
        self.streaming_client_id.as_deref()
    }

    pub fn streaming_client_secret(&self) -> Option<&str> {
        self.streaming_client_secret.as_deref()
    }

    pub fn streaming_token_url(&self) -> &str {
        &self.streaming_token_url
    }

    /// The socket address string the server binds to, e.g. `127.0.0.1:4000`.
    pub fn listen_address(&self) -> String {
        format!(
            "{}:{}",
            self.interface.as_deref().unwrap_or("127.0.0.1"),
            self.port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["token_relay"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_allowed_origins_are_split_and_trimmed() {
        let config = parse(&[
            "--allowed-origins",
            "https://sofia.example, https://other.example,,",
        ]);

        assert_eq!(
            config.allowed_origins(),
            vec!["https://sofia.example", "https://other.example"]
        );
    }

    #[test]
    fn test_token_urls_can_be_overridden() {
        let config = parse(&[
            "--video-token-url",
            "http://127.0.0.1:9999/video",
            "--social-token-url",
            "http://127.0.0.1:9999/social",
        ]);

        assert_eq!(config.video_token_url(), "http://127.0.0.1:9999/video");
        assert_eq!(config.social_token_url(), "http://127.0.0.1:9999/social");
    }

    #[test]
    fn test_client_credentials_are_read_from_flags() {
        let config = parse(&[
            "--music-client-id",
            "music-id",
            "--music-client-secret",
            "music-secret",
        ]);

        assert_eq!(config.music_client_id(), Some("music-id"));
        assert_eq!(config.music_client_secret(), Some("music-secret"));
    }

    #[test]
    fn test_listen_address_joins_interface_and_port() {
        let config = parse(&["--interface", "0.0.0.0", "--port", "8080"]);
        assert_eq!(config.listen_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_log_level_filter_parses_uppercase_names() {
        let config = parse(&["--log-level-filter", "DEBUG"]);
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }
}
