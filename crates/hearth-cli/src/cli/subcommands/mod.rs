mod workflow;

pub use workflow::WorkflowCommands;
