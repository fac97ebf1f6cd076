use super::*;

#[derive(Parser)]
#[command(name = "srcfetch", author, version, about = "Fetch external data sources into local storage")]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Mirror CodeCommit repositories into a local directory")]
    Sync(SyncArgs),
    #[command(about = "Query Bybit P2P trading opportunities")]
    P2p(P2pArgs),
    #[command(about = "Print the connection metadata schema")]
    Connection(ConnectionArgs),
}

#[derive(Parser)]
pub(super) struct SyncArgs {
    #[arg(long, help = "CodeCommit region, e.g. eu-west-1")]
    pub(super) region: String,
    #[arg(long, help = "Directory that receives the clones")]
    pub(super) root: PathBuf,
    #[arg(
        long,
        env = "SRCFETCH_ACCESS_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub(super) access_key: String,
    #[arg(
        long,
        env = "SRCFETCH_SECRET_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub(super) secret_key: String,
    #[arg(
        long = "repo",
        required = true,
        help = "Repository name to mirror; repeat for multiple"
    )]
    pub(super) repos: Vec<String>,
    #[arg(long, help = "Per-clone timeout in seconds")]
    pub(super) clone_timeout: Option<u64>,
    #[arg(long, help = "Render a progress line while syncing")]
    pub(super) status: bool,
}

#[derive(Parser)]
pub(super) struct P2pArgs {
    #[arg(long, default_value = "USDT", help = "Cryptocurrency token, e.g. USDT or BTC")]
    pub(super) token: String,
    #[arg(long, default_value = "USD", help = "Fiat currency to filter by")]
    pub(super) currency: String,
    #[arg(long, value_enum, default_value = "sell")]
    pub(super) side: TradeSideValue,
    #[arg(long, default_value_t = 10, help = "Results per page")]
    pub(super) size: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(super) enum TradeSideValue {
    Buy,
    Sell,
}

impl From<TradeSideValue> for TradeSide {
    fn from(value: TradeSideValue) -> Self {
        match value {
            TradeSideValue::Buy => TradeSide::Buy,
            TradeSideValue::Sell => TradeSide::Sell,
        }
    }
}

#[derive(Parser)]
pub(super) struct ConnectionArgs {
    #[arg(long, help = "Print the connection icon instead of the schema")]
    pub(super) icon: bool,
}
