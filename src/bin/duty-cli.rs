use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "duty-cli")]
#[command(about = "Admin CLI for a running duty stub server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4567")]
    url: String,

    /// Status path, if the server overrides it.
    #[arg(long, default_value = "/duty/status")]
    status_path: String,

    /// Reset path, if the server overrides it.
    #[arg(long, default_value = "/duty/reset")]
    reset_path: String,

    /// Set path, if the server overrides it.
    #[arg(long, default_value = "/duty/set")]
    set_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server is up
    Status,
    /// Rewind every route to its first response
    Reset,
    /// Point a variable route at the response with the given id
    Set {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = match &cli.command {
        Commands::Status => client.get(format!("{}{}", cli.url, cli.status_path)),
        Commands::Reset => client.get(format!("{}{}", cli.url, cli.reset_path)),
        Commands::Set { name, id } => client
            .get(format!("{}{}", cli.url, cli.set_path))
            .query(&[("name", name), ("id", id)]),
    };

    let res = request.send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if !body.is_empty() {
            eprintln!("Response: {}", body);
        }
        std::process::exit(1);
    }

    println!("{}", status);
    if !body.is_empty() {
        println!("{}", body);
    }
    Ok(())
}
