//! Table views of Hearth entities and responses.

use hearth_core::entities::{Attachment, ChatMessage, MaintenanceRequest, WorkflowCard};
use hearth_core::responses::{ClassifyResponse, DashboardResponse};
use hearth_core::state::{ChatOutcome, TicketStats};

use super::table::Table;

/// Something that renders as one or more tables.
pub trait Tabular {
    fn tables(&self) -> Vec<Table>;
}

/// An entity shown as one row of a list.
pub trait TableRow {
    const TITLE: &'static str;
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl<T: TableRow> Tabular for [T] {
    fn tables(&self) -> Vec<Table> {
        let mut table = Table::new(T::HEADERS).titled(T::TITLE);
        for item in self {
            table.push(item.cells());
        }
        vec![table]
    }
}

impl<T: TableRow> Tabular for Vec<T> {
    fn tables(&self) -> Vec<Table> {
        self.as_slice().tables()
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

impl TableRow for MaintenanceRequest {
    const TITLE: &'static str = "Tickets";
    const HEADERS: &'static [&'static str] = &[
        "id",
        "tenant",
        "urgency",
        "category",
        "status",
        "date",
        "description",
        "files",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.tenant.clone().unwrap_or_else(|| "-".to_string()),
            self.urgency.to_string(),
            self.category.label().to_string(),
            self.status.to_string(),
            self.date.to_string(),
            self.description.clone(),
            file_list(self.attachments()),
        ]
    }
}

impl TableRow for WorkflowCard {
    const TITLE: &'static str = "Workflow";
    const HEADERS: &'static [&'static str] =
        &["id", "kind", "priority", "status", "title", "description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.to_string(),
            self.priority.to_string(),
            self.status.map_or_else(|| "-".to_string(), |status| status.to_string()),
            self.title.clone(),
            self.description.clone(),
        ]
    }
}

impl TableRow for ChatMessage {
    const TITLE: &'static str = "Messages";
    const HEADERS: &'static [&'static str] = &["time", "from", "content", "files"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.timestamp.format("%H:%M").to_string(),
            self.kind.to_string(),
            self.content.clone(),
            file_list(self.attachments.as_deref().unwrap_or_default()),
        ]
    }
}

impl TableRow for Attachment {
    const TITLE: &'static str = "Files";
    const HEADERS: &'static [&'static str] = &["id", "kind", "name", "size", "mime_type"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind().to_string(),
            self.name.clone(),
            self.size.to_string(),
            self.mime_type.clone(),
        ]
    }
}

/// `[image] sink.jpg, [file] notes.zip`, or `-` when empty.
fn file_list(attachments: &[Attachment]) -> String {
    if attachments.is_empty() {
        return "-".to_string();
    }
    attachments
        .iter()
        .map(|attachment| format!("[{}] {}", attachment.kind(), attachment.name))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

fn request_fields(request: &MaintenanceRequest) -> Vec<(&'static str, String)> {
    let mut fields = vec![("id", request.id.clone())];
    if let Some(tenant) = &request.tenant {
        fields.push(("tenant", tenant.clone()));
    }
    fields.extend([
        ("description", request.description.clone()),
        (
            "urgency",
            format!("{} ({})", request.urgency, request.urgency.hint()),
        ),
        ("category", request.category.label().to_string()),
        ("status", request.status.to_string()),
        ("date", request.date.to_string()),
        ("files", file_list(request.attachments())),
    ]);
    fields
}

impl Tabular for MaintenanceRequest {
    fn tables(&self) -> Vec<Table> {
        vec![Table::record(request_fields(self))]
    }
}

impl Tabular for Attachment {
    fn tables(&self) -> Vec<Table> {
        std::slice::from_ref(self).tables()
    }
}

impl Tabular for ClassifyResponse {
    fn tables(&self) -> Vec<Table> {
        self.request.as_ref().map_or_else(
            || {
                vec![Table::record(vec![(
                    "is_request",
                    "false: no maintenance keywords found".to_string(),
                )])]
            },
            Tabular::tables,
        )
    }
}

impl Tabular for ChatOutcome {
    fn tables(&self) -> Vec<Table> {
        let mut messages = vec![self.message.clone()];
        messages.extend(self.reply.clone());
        let mut tables = messages.tables();
        if let Some(request) = &self.request {
            tables.extend(request.tables());
        }
        tables
    }
}

impl Tabular for TicketStats {
    fn tables(&self) -> Vec<Table> {
        vec![
            Table::record(vec![
                ("total", self.total.to_string()),
                ("open", self.open.to_string()),
                ("in_progress", self.in_progress.to_string()),
                ("resolved", self.resolved.to_string()),
            ])
            .titled("Stats"),
        ]
    }
}

impl Tabular for DashboardResponse {
    fn tables(&self) -> Vec<Table> {
        let mut tables = self.stats.tables();
        tables.extend(self.requests.tables());
        if let Some(workflow) = &self.workflow {
            tables.extend(workflow.tables());
        }
        tables
    }
}
