use clap::{Args, Subcommand};

use crate::cli::subcommands::WorkflowCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify one message and print the resulting request, if any.
    Classify(ClassifyArgs),
    /// Interactive chat that turns messages into maintenance requests.
    Chat(ChatArgs),
    /// Submit the tenant request form.
    Request(RequestArgs),
    /// Show a dashboard's tickets and stats.
    Dashboard(DashboardArgs),
    /// Landlord workflow list.
    Workflow {
        #[command(subcommand)]
        action: WorkflowCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `hearth classify`.
#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Message text, as typed into the chat box.
    pub text: String,
    /// Attach a file descriptor: NAME:SIZE:MIME[:URL]. Repeatable.
    #[arg(long)]
    pub attach: Vec<String>,
    /// Id prefix for the generated request (defaults to `requests.id_prefix`).
    #[arg(long)]
    pub id_prefix: Option<String>,
}

/// Arguments for `hearth chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Dashboard whose ticket list receives created requests.
    #[arg(long)]
    pub role: Option<String>,
}

/// Arguments for `hearth request`.
#[derive(Clone, Debug, Args)]
pub struct RequestArgs {
    #[arg(long)]
    pub description: String,
    /// low, medium, high, urgent
    #[arg(long)]
    pub urgency: Option<String>,
    /// plumbing, hvac, electrical, appliances, structural, other
    #[arg(long)]
    pub category: Option<String>,
    /// Photo descriptor: NAME:SIZE:MIME[:URL]
    #[arg(long)]
    pub photo: Option<String>,
}

/// Arguments for `hearth dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// landlord or tenant (defaults to `general.default_role`)
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub urgency: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Mark a ticket resolved before listing. Repeatable.
    #[arg(long)]
    pub resolve: Vec<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Arguments for `hearth schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered type name; omit to list all names.
    pub type_name: Option<String>,
}
