mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use photo_core::config::DEFAULT_API_BASE;
use photo_core::{CloudinaryClient, Credentials};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "photo")]
#[command(about = "Operator tool for device-owned photos on Cloudinary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete a photo if the given device owns it
    Delete {
        /// Public ID of the photo
        public_id: String,

        /// Device ID claiming ownership
        #[arg(short, long)]
        device_id: String,

        #[command(flatten)]
        cloud: CloudArgs,
    },

    /// Show which device owns a photo
    Owner {
        /// Public ID of the photo
        public_id: String,

        #[command(flatten)]
        cloud: CloudArgs,
    },
}

#[derive(Args)]
struct CloudArgs {
    /// Cloudinary cloud name
    #[arg(long, env = "CLOUDINARY_CLOUD_NAME")]
    cloud_name: String,

    /// Cloudinary API key
    #[arg(long, env = "CLOUDINARY_API_KEY")]
    api_key: String,

    /// Cloudinary API secret
    #[arg(long, env = "CLOUDINARY_API_SECRET", hide_env_values = true)]
    api_secret: String,

    /// API base URL
    #[arg(long, env = "CLOUDINARY_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

impl CloudArgs {
    fn client(self) -> CloudinaryClient {
        CloudinaryClient::new(
            Credentials {
                cloud_name: self.cloud_name,
                api_key: self.api_key,
                api_secret: self.api_secret,
            },
            self.api_base,
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photo_cli=info,photo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Delete { public_id, device_id, cloud } => {
            commands::delete::execute(cloud.client(), public_id, device_id).await?;
        }
        Commands::Owner { public_id, cloud } => {
            commands::owner::execute(cloud.client(), public_id).await?;
        }
    }

    Ok(())
}
