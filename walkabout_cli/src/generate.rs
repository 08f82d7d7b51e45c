use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// JSON schema of the itinerary files read by `distance`
    JsonSchema {
        /// Output file, printed to stdout when omitted
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = walkabout_itinerary::json::generate_json_schema()?;

            match out {
                Some(out) => {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)?;
                    }

                    std::fs::write(out, schema)?;
                }
                None => println!("{schema}"),
            }
        }
    }

    Ok(())
}
