use clap::{Parser, Subcommand};
use rx_core::{CoreConfig, DrugCatalog, DrugId, InteractionService, PrescriptionItem};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "rx")]
#[command(about = "Drug interaction assessment CLI")]
struct Cli {
    /// Drug store base URL (defaults to the seeded in-memory catalog)
    #[arg(long, global = true)]
    drug_service_url: Option<String>,
    /// Remote interaction service used for prescription summaries
    #[arg(long, global = true)]
    interaction_service_url: Option<String>,
    /// Timeout in seconds for remote calls
    #[arg(long, global = true, default_value_t = 5)]
    timeout: u64,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess the interaction risk of two drugs
    Assess {
        /// First drug id
        drug_a: i64,
        /// Second drug id
        drug_b: i64,
    },
    /// Summarize interactions across every pair of a prescription
    Summarize {
        /// Drug ids in prescription order
        #[arg(required = true)]
        drug_ids: Vec<i64>,
    },
    /// List the seeded drug catalog
    Drugs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cfg = CoreConfig::new(
        cli.drug_service_url,
        cli.interaction_service_url,
        Duration::from_secs(cli.timeout),
    )?;

    match cli.command {
        Some(Commands::Assess { drug_a, drug_b }) => {
            let service = InteractionService::from_config(&cfg)?;
            let verdict = service.assess_pair(DrugId(drug_a), DrugId(drug_b));
            println!(
                "{} <-> {}: risk={} score={}",
                verdict.drug_a, verdict.drug_b, verdict.risk_level, verdict.severity_score
            );
            println!();
            println!("{}", verdict.message);
        }
        Some(Commands::Summarize { drug_ids }) => {
            let service = InteractionService::from_config(&cfg)?;
            let items: Vec<PrescriptionItem> = drug_ids
                .into_iter()
                .map(|id| PrescriptionItem::new(id, None))
                .collect();
            println!("{}", service.summarize_prescription(&items));
        }
        Some(Commands::Drugs) => {
            for drug in DrugCatalog::seeded().drugs() {
                println!(
                    "ID: {}, Name: {}, Category: {}, Dosage: {}mg, Side effects: {}",
                    drug.id,
                    drug.name,
                    drug.category.as_deref().unwrap_or("-"),
                    drug.dosage_or_zero(),
                    drug.side_effects
                        .as_deref()
                        .map(|e| e.join(", "))
                        .unwrap_or_default()
                );
            }
        }
        None => {
            println!("Use 'rx --help' for commands");
        }
    }

    Ok(())
}
