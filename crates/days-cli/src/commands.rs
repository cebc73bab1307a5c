use anyhow::{anyhow, Result};
use std::sync::Arc;

use crate::cli::Commands;
use days_api::{server, ApiConfig, ApiState};
use days_core::{days_between, parse, weekday_of, Ledger};

pub async fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Serve { port } => {
            let mut config = ApiConfig::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }

            let state = ApiState::new(Arc::new(Ledger::new()));
            server::serve(&config.bind_addr(), state).await?;
        }

        Commands::Between { first, last } => {
            println!("{}", between(&first, &last)?);
        }

        Commands::Weekday { date } => {
            println!("{}", weekday(&date)?);
        }
    }

    Ok(())
}

fn between(first: &str, last: &str) -> Result<i64> {
    let first = parse_date(first)?;
    let last = parse_date(last)?;
    Ok(days_between(first, last))
}

fn weekday(date: &str) -> Result<&'static str> {
    Ok(weekday_of(parse_date(date)?))
}

fn parse_date(input: &str) -> Result<days_core::CalendarDate> {
    parse(input).map_err(|e| {
        tracing::debug!("{}", e);
        anyhow!(e.public_message())
    })
}
