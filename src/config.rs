pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";
pub const DEFAULT_SUMMARY_WIDTH: usize = 61;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_SUMMARY_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoresConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub layout: SummaryLayout,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: "Mozilla/5.0".to_string(),
            layout: SummaryLayout::default(),
        }
    }
}

impl ScoresConfig {
    /// Defaults overridden by `NBA_SCORES_*` environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(base) = std::env::var("NBA_SCORES_BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
        {
            cfg.base_url = base;
        }
        cfg.timeout_secs = std::env::var("NBA_SCORES_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .max(1);
        cfg.layout.width = std::env::var("NBA_SCORES_WIDTH")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_SUMMARY_WIDTH)
            .max(MIN_SUMMARY_WIDTH);
        cfg
    }
}

/// Interior width of the bordered summary block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLayout {
    pub width: usize,
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_SUMMARY_WIDTH,
        }
    }
}
