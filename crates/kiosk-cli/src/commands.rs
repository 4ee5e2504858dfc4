use anyhow::Result;

use crate::args::{CatalogCommand, Cli, Commands};
use crate::config::{Config, resolve_backend_url, resolve_config_dir};
use crate::handlers;
use kiosk_client::ApiClient;

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let config = Config::load_from(&config_dir.join("config.toml"))?;
    let backend_url = resolve_backend_url(cli.backend_url.as_deref(), &config);
    let client = ApiClient::new(backend_url);

    let Some(command) = cli.command else {
        show_guidance(&client);
        return Ok(());
    };

    match command {
        // The TUI owns its own runtime and thread topology
        Commands::Tui => handlers::tui::handle(client),

        command => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;

            runtime.block_on(async {
                match command {
                    Commands::Catalog { command } => match command {
                        CatalogCommand::Dates => {
                            handlers::catalog::dates(&client, cli.format).await
                        }
                        CatalogCommand::Prices => {
                            handlers::catalog::prices(&client, cli.format).await
                        }
                        CatalogCommand::Shows => {
                            handlers::catalog::shows(&client, cli.format).await
                        }
                    },
                    Commands::Analytics => handlers::analytics::handle(&client, cli.format).await,
                    Commands::Book {
                        date,
                        tickets,
                        show,
                        pay,
                    } => handlers::book::handle(&client, date, tickets, show, pay, cli.format).await,
                    Commands::Tui => unreachable!("handled above"),
                }
            })
        }
    }
}

fn show_guidance(client: &ApiClient) {
    println!("kiosk - Museum ticket booking client\n");
    println!("Backend: {}\n", client.base_url());
    println!("Quick commands:");
    println!("  kiosk tui                         # Interactive booking screen");
    println!("  kiosk catalog dates               # Available dates");
    println!("  kiosk catalog prices              # Ticket prices");
    println!("  kiosk catalog shows               # Optional shows");
    println!("  kiosk book --date 2024-07-01 --ticket adult=2 --pay");
    println!("  kiosk analytics                   # Booking statistics\n");
    println!("For more commands:");
    println!("  kiosk --help");
}
