use analyzer_core::{seeded_store, CoreError, ResourceService};
use api_shared::HealthService;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Inspect the Heart Analyzer dataset as the API would serve it")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report service health
    Health,
    /// List all patients (summary shape)
    Patients,
    /// Show one patient (full shape)
    Patient {
        /// Patient UUID
        id: Uuid,
    },
    /// List attachments (summary shape)
    Attachments {
        /// Only list attachments owned by this patient
        #[arg(long)]
        owner_id: Option<Uuid>,
    },
    /// Show one attachment (full shape)
    Attachment {
        /// Attachment UUID
        id: Uuid,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(service: &ResourceService, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Health => print_json(&HealthService::check_health())?,
        Commands::Patients => print_json(&service.list_patients()?)?,
        Commands::Patient { id } => print_json(&service.get_patient(id)?)?,
        Commands::Attachments { owner_id } => print_json(&service.list_attachments(owner_id)?)?,
        Commands::Attachment { id } => print_json(&service.get_attachment(id)?)?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'analyzer --help' for commands");
        return Ok(());
    };

    let service = ResourceService::new(Arc::new(seeded_store()?));

    match run(&service, command) {
        Ok(()) => {}
        Err(e) => match e.downcast_ref::<CoreError>() {
            Some(CoreError::NotFound { kind, id }) => {
                eprintln!("No {kind} with id {id}");
                std::process::exit(1);
            }
            _ => return Err(e),
        },
    }

    Ok(())
}
