use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "days")]
#[command(about = "Days - date arithmetic from the command line or over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start API server
    Serve {
        /// Port to listen on (defaults to DAYS_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Count the days between two dates (DD.MM.YYYY)
    Between {
        /// Start date
        first: String,

        /// End date
        last: String,
    },

    /// Show the weekday of a date (DD.MM.YYYY)
    Weekday {
        /// Date to look up
        date: String,
    },
}
