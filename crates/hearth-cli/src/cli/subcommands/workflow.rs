use clap::Subcommand;

/// Landlord workflow list commands. Each applies to the seeded list.
#[derive(Clone, Debug, Subcommand)]
pub enum WorkflowCommands {
    /// List workflow cards.
    List,
    /// Move the card at FROM so it ends up at TO.
    Move { from: usize, to: usize },
    /// Mark a card done.
    Done { id: String },
    /// Remove a card.
    Remove { id: String },
    /// Append a freshly generated lease contract card.
    Contract,
}
