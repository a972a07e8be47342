use std::io::Read;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nasa-apod",
    version,
    about = "Print NASA's Astronomy Picture of the Day",
    after_help = "Environment: NASA_API_KEY, NASA_MCP_BASE_URL, NASA_APOD_LOG"
)]
pub struct Cli {
    #[arg(long, value_name = "KEY", help = "NASA API key; overrides NASA_API_KEY")]
    pub api_key: Option<String>,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        num_args = 0..=1,
        default_missing_value = "",
        conflicts_with_all = ["query", "stdio"],
        help = "Read from the local proxy instead, optionally for one date"
    )]
    pub proxy: Option<String>,

    #[arg(long, conflicts_with = "query", help = "Read the query text from stdin")]
    pub stdio: bool,

    #[arg(help = "Free-text query (not interpreted)")]
    pub query: Vec<String>,
}

impl Cli {
    /// `Some(date)` in proxy mode; an empty date means today.
    pub fn proxy_date(&self) -> Option<Option<&str>> {
        self.proxy
            .as_deref()
            .map(|d| Some(d).filter(|d| !d.is_empty()))
    }

    /// The query text, taken from `input` when `--stdio` is set.
    pub fn query_text<R: Read>(&self, mut input: R) -> std::io::Result<String> {
        if self.stdio {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            return Ok(text.trim().to_string());
        }
        Ok(self.query.join(" "))
    }
}
