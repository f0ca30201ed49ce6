use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use sen_accounts::accounts::SenAccountsApi;
use sen_accounts::commands;
use sen_accounts::http::ApiClient;

/// sen-accounts - SEN business account API client
///
/// Create and inspect SEN business accounts and their wire instructions.
///
/// Examples:
///   sen-accounts list
///   sen-accounts instructions acct-1 --currency USD
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API host (defaults to the sandbox host; also via SEN_API_URL)
    #[arg(long = "api-url", env = "SEN_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a SEN business account
    Create(CreateArgs),

    /// List SEN business accounts
    List(ListArgs),

    /// Show a SEN business account by id
    Show(ShowArgs),

    /// Show wire instructions for an account
    Instructions(InstructionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Idempotency key for safe retries
    #[arg(value_name = "IDEMPOTENCY_KEY")]
    pub idempotency_key: String,

    /// Bank account number
    #[arg(value_name = "ACCOUNT_NUMBER")]
    pub account_number: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// The account id
    #[arg(value_name = "ACCOUNT_ID")]
    pub account_id: String,
}

#[derive(clap::Args, Debug)]
pub struct InstructionsArgs {
    /// The account id
    #[arg(value_name = "ACCOUNT_ID")]
    pub account_id: String,

    /// Currency filter (omitted entirely when blank)
    #[arg(long, value_name = "CURRENCY")]
    pub currency: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let client = Client::builder().user_agent("sen-accounts-cli").build()?;
    let api = SenAccountsApi::new(ApiClient::new(client, cli.api_url));

    match cli.command {
        Commands::Create(args) => {
            commands::create(&api, args.idempotency_key, args.account_number).await?
        }
        Commands::List(_args) => commands::list(&api).await?,
        Commands::Show(args) => commands::show(&api, &args.account_id).await?,
        Commands::Instructions(args) => {
            commands::instructions(&api, &args.account_id, args.currency).await?
        }
    }
    Ok(())
}
