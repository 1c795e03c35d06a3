use crate::commands::{Commands, RoadmapCommands, SetupTarget, SprintCommands};
use crate::{AdminResult, Cli, render};

use cf_appwrite::{AppwriteClient, RemoteStore};
use cf_config::Config;
use cf_provision::{ProvisionTarget, Provisioner};
use cf_service::{RoadmapService, SprintService};

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::info;
use serde::Serialize;

impl From<SetupTarget> for ProvisionTarget {
    fn from(target: SetupTarget) -> Self {
        match target {
            SetupTarget::All => ProvisionTarget::All,
            SetupTarget::Database => ProvisionTarget::Database,
            SetupTarget::Collections => ProvisionTarget::Collections,
            SetupTarget::Buckets => ProvisionTarget::Buckets,
        }
    }
}

/// Execute the parsed command and return what should go to stdout.
pub async fn run(cli: &Cli, config: &Config) -> AdminResult<String> {
    let client = AppwriteClient::from_config(&config.appwrite, &config.provisioning)?;

    match &cli.command {
        Commands::Setup { target } => {
            info!(
                "Provisioning {:?} in database '{}' at {}",
                target, config.appwrite.database_id, client.endpoint
            );
            let provisioner = Provisioner::new(
                &client,
                &config.appwrite.database_id,
                config.provisioning.schema_delay(),
            );
            let report = provisioner.run((*target).into()).await?;
            output(cli.json, &report, || render::provision_report(&report))
        }

        Commands::Sprint { action } => {
            let service = SprintService::new(remote_store(client, config));
            match action {
                SprintCommands::Stats { id, today } => {
                    let stats = service.get_sprint_stats(id, day_or_today(*today)).await?;
                    output(cli.json, &stats, || render::sprint_stats(&stats))
                }
                SprintCommands::Burndown { id, today } => {
                    let points = service.get_burndown(id, day_or_today(*today)).await?;
                    output(cli.json, &points, || render::burndown(&points))
                }
            }
        }

        Commands::Roadmap { action } => match action {
            RoadmapCommands::Deps { project_id } => {
                let service = RoadmapService::new(remote_store(client, config));
                let edges = service.infer_dependencies(project_id).await?;
                output(cli.json, &edges, || render::roadmap_dependencies(&edges))
            }
        },
    }
}

fn remote_store(client: AppwriteClient, config: &Config) -> RemoteStore {
    RemoteStore::new(Arc::new(client), &config.appwrite.database_id)
}

fn day_or_today(day: Option<NaiveDate>) -> NaiveDate {
    day.unwrap_or_else(|| Utc::now().date_naive())
}

fn output<T, F>(json: bool, value: &T, text: F) -> AdminResult<String>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text())
    }
}
