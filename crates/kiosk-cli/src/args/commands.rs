use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List what the backend currently offers")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    #[command(about = "Show aggregate booking statistics")]
    Analytics,

    #[command(about = "Book tickets in one shot, optionally paying immediately")]
    Book {
        #[arg(long, help = "Visit date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(
            long = "ticket",
            value_name = "CATEGORY=COUNT",
            help = "Ticket quantity per category; repeatable (e.g. --ticket adult=2)"
        )]
        tickets: Vec<String>,

        #[arg(long, help = "Optional show id to add on")]
        show: Option<String>,

        #[arg(long, help = "Process payment right after booking")]
        pay: bool,
    },

    #[command(about = "Interactive booking screen")]
    Tui,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    #[command(about = "List available booking dates")]
    Dates,

    #[command(about = "List ticket prices by category")]
    Prices,

    #[command(about = "List optional shows")]
    Shows,
}
