use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Create the database, collections and buckets if missing
    Setup {
        #[command(subcommand)]
        target: SetupTarget,
    },

    /// Sprint reports
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Roadmap reports
    Roadmap {
        #[command(subcommand)]
        action: RoadmapCommands,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupTarget {
    /// Database, collections and buckets
    All,
    Database,
    /// Collections with their attributes and indexes
    Collections,
    /// Storage buckets
    Buckets,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SprintCommands {
    /// Progress figures for a sprint
    Stats {
        /// Sprint document ID
        id: String,

        /// Day to report as of (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Daily ideal and actual remaining points
    Burndown {
        /// Sprint document ID
        id: String,

        /// Day to report as of (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum RoadmapCommands {
    /// Dependencies between roadmap items, inferred from task links
    Deps {
        /// Project ID
        project_id: String,
    },
}
