use anyhow::Context;
use car_market::accounts::NewUserForm;
use car_market::api::{MarketplaceApi, MarketplaceClient};
use car_market::config::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_TOKEN, ENV_API_URL,
    ENV_TIMEOUT_SECS,
};
use car_market::filters::{FilterForm, NumericField, TextField};
use car_market::models::{AccountType, Listing, UserAccount};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "car-market")]
#[command(version, about = "Car marketplace dashboards from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the marketplace API
    #[arg(long, global = true, env = ENV_API_URL, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = ENV_API_TOKEN, hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Log at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage car listings
    #[command(subcommand)]
    Listings(ListingCommands),
    /// Admin user management
    #[command(subcommand)]
    Users(UserCommands),
}

#[derive(Subcommand)]
enum ListingCommands {
    /// Search listings with optional filters
    Search(SearchArgs),
    /// Delete a listing by id
    Delete { id: i64 },
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    make: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    min_price: Option<String>,
    #[arg(long)]
    max_price: Option<String>,
    #[arg(long)]
    min_mileage: Option<String>,
    #[arg(long)]
    max_mileage: Option<String>,
    #[arg(long)]
    transmission: Option<String>,
    #[arg(long)]
    fuel_type: Option<String>,
    /// Only sold listings
    #[arg(long)]
    sold: bool,
    #[arg(long)]
    seller_email: Option<String>,
    /// Restrict to one agent's listings
    #[arg(long)]
    agent_email: Option<String>,
    /// Print raw JSON instead of cards
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Search accounts by name or email
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Show one account
    View { email: String },
    /// Add a new account
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Date of birth as YYYY/MM/DD
        #[arg(long)]
        dob: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// buyer, seller or usedCarAgent
        #[arg(long)]
        account_type: AccountType,
    },
    /// Suspend one or more accounts
    Suspend {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl SearchArgs {
    fn to_form(&self) -> FilterForm {
        let mut form = match &self.agent_email {
            Some(email) => FilterForm::for_agent(email),
            None => FilterForm::new(),
        };

        let text = [
            (TextField::Make, &self.make),
            (TextField::Model, &self.model),
            (TextField::Transmission, &self.transmission),
            (TextField::FuelType, &self.fuel_type),
            (TextField::SellerEmail, &self.seller_email),
        ];
        for (field, value) in text {
            if let Some(value) = value {
                form.set_text(field, value);
            }
        }

        let numeric = [
            (NumericField::Year, &self.year),
            (NumericField::MinPrice, &self.min_price),
            (NumericField::MaxPrice, &self.max_price),
            (NumericField::MinMileage, &self.min_mileage),
            (NumericField::MaxMileage, &self.max_mileage),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                form.set_numeric(field, value);
            }
        }

        form.set_sold(self.sold);
        form
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = ClientConfig::new(&cli.api_url)
        .with_token(cli.token.clone())
        .with_timeout(Duration::from_secs(cli.timeout));
    if config.token.is_none() {
        warn!("No API token configured, requests will be unauthenticated");
    }
    info!("🚗 Car Market - {}", config.base_url);

    let client = MarketplaceClient::new(config)?;

    match cli.command {
        Commands::Listings(ListingCommands::Search(args)) => search_listings(&client, &args).await,
        Commands::Listings(ListingCommands::Delete { id }) => {
            client.delete_listing(id).await?;
            println!("Listing {} deleted", id);
            Ok(())
        }
        Commands::Users(command) => users(&client, command).await,
    }
}

async fn search_listings(client: &impl MarketplaceApi, args: &SearchArgs) -> anyhow::Result<()> {
    let mut form = args.to_form();
    let query = match form.submit() {
        Ok(query) => query,
        Err(errors) => {
            for message in errors.messages() {
                eprintln!("  ✗ {}", message);
            }
            anyhow::bail!("Search filters are invalid");
        }
    };

    let listings = client.search_listings(&query).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("No listings found.");
    }
    for listing in &listings {
        print_listing(listing);
    }
    Ok(())
}

fn print_listing(listing: &Listing) {
    println!("{}", listing.title());
    println!("   Mileage: {} km", listing.mileage);
    println!("   Transmission: {}", listing.transmission);
    println!("   Fuel Type: {}", listing.fuel_type);
    println!("   Price: ${}", listing.price);
    if let Some(description) = &listing.description {
        println!("   {}", description);
    }
    println!("   ID: {}", listing.id);
    println!();
}

fn print_user(user: &UserAccount) {
    let suspended = if user.is_suspended == Some(true) {
        " [suspended]"
    } else {
        ""
    };
    println!(
        "{}  {} {}  {}  {}{}",
        user.email,
        user.first_name,
        user.last_name,
        user.dob,
        user.user_profile.as_deref().unwrap_or("-"),
        suspended
    );
}

async fn users(client: &impl MarketplaceApi, command: UserCommands) -> anyhow::Result<()> {
    match command {
        UserCommands::Search { term } => {
            let users = client.search_users(&term).await?;
            if users.is_empty() {
                println!("No users found");
            }
            users.iter().for_each(print_user);
        }
        UserCommands::View { email } => {
            let user = client.view_user(&email).await?;
            print_user(&user);
        }
        UserCommands::Create {
            first_name,
            last_name,
            dob,
            email,
            password,
            account_type,
        } => {
            let form = NewUserForm {
                first_name,
                last_name,
                dob,
                email,
                password,
                account_type: Some(account_type),
            };
            let user = form.validate().context("Cannot add user")?;
            client.create_user(&user).await?;
            println!("User added successfully!");
        }
        UserCommands::Suspend { ids } => {
            let count = client.suspend_users(&ids).await?;
            println!("{} users have been suspended successfully", count);
        }
    }
    Ok(())
}
