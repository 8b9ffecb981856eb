use anyhow::bail;
use hearth_core::entities::{Attachment, MaintenanceRequest};
use hearth_core::enums::Role;
use hearth_core::state::{ChatOutcome, ChatSession, TicketBoard};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::commands::shared::parse::{parse_attachment_spec, parse_enum};
use crate::context::AppContext;
use crate::output::output;

const HELP: &str = "commands: /attach NAME:SIZE:MIME[:URL], /detach ID, /tickets, /quit";

/// What one input line produced.
#[derive(Debug)]
enum Reply {
    Outcome(Box<ChatOutcome>),
    Staged(Attachment),
    Unstaged(Attachment),
    Tickets(Vec<MaintenanceRequest>),
    Quit,
}

/// Chat transcript plus the ticket list that receives created requests.
struct ChatRepl {
    session: ChatSession,
    board: TicketBoard,
}

impl ChatRepl {
    fn new(ctx: &AppContext, role: Role) -> Self {
        Self {
            session: ChatSession::new(ctx.config.chat.welcome_message.clone(), ctx.classifier.clone()),
            board: TicketBoard::seeded(role),
        }
    }

    fn handle_line(&mut self, line: &str) -> anyhow::Result<Reply> {
        let trimmed = line.trim();
        let (command, argument) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(command, rest)| (command, rest.trim()));

        match (command, argument) {
            ("/quit", _) => return Ok(Reply::Quit),
            ("/tickets", _) => return Ok(Reply::Tickets(self.board.requests().to_vec())),
            ("/attach", "") => bail!("usage: /attach NAME:SIZE:MIME[:URL]"),
            ("/detach", "") => bail!("usage: /detach ID"),
            ("/attach", spec) => {
                let attachment = parse_attachment_spec(spec)?;
                return Ok(Reply::Staged(self.session.stage_attachment(attachment).clone()));
            }
            ("/detach", id) => return Ok(Reply::Unstaged(self.session.unstage_attachment(id)?)),
            _ => {}
        }

        let outcome = self.session.submit(line)?;
        if let Some(request) = &outcome.request {
            self.board = std::mem::take(&mut self.board).with_request(request.clone());
        }
        Ok(Reply::Outcome(Box::new(outcome)))
    }
}

/// Handle `hearth chat`: read messages from stdin until EOF or `/quit`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = match args.role.as_deref() {
        Some(raw) => parse_enum::<Role>(raw, "role")?,
        None => ctx.config.general.default_role,
    };
    let mut repl = ChatRepl::new(ctx, role);

    output(repl.session.messages(), flags.format)?;
    if !flags.quiet {
        eprintln!("{}", ctx.config.chat.placeholder);
        eprintln!("{HELP}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match repl.handle_line(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Outcome(outcome)) => output(outcome.as_ref(), flags.format)?,
            Ok(Reply::Staged(attachment) | Reply::Unstaged(attachment)) => {
                output(&attachment, flags.format)?;
            }
            Ok(Reply::Tickets(requests)) => output(&requests, flags.format)?,
            Err(error) => eprintln!("hearth: {error:#}"),
        }
    }

    tracing::info!(
        messages = repl.session.messages().len(),
        tickets = repl.board.requests().len(),
        "chat ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use hearth_config::HearthConfig;
    use hearth_core::enums::{Category, Urgency};
    use pretty_assertions::assert_eq;

    use super::*;

    fn repl() -> ChatRepl {
        ChatRepl::new(&AppContext::new(HearthConfig::default()), Role::Tenant)
    }

    #[test]
    fn request_message_lands_on_board_front() {
        let mut repl = repl();
        let Reply::Outcome(outcome) = repl.handle_line("Kitchen sink is leaking").expect("submit")
        else {
            panic!("expected outcome");
        };
        let request = outcome.request.expect("request");
        assert_eq!(request.urgency, Urgency::Medium);
        assert_eq!(request.category, Category::Plumbing);
        assert_eq!(repl.board.requests()[0].id, request.id);
        assert_eq!(repl.board.requests().len(), 4);
    }

    #[test]
    fn chit_chat_creates_nothing() {
        let mut repl = repl();
        let Reply::Outcome(outcome) = repl.handle_line("Nice weather today").expect("submit")
        else {
            panic!("expected outcome");
        };
        assert!(outcome.request.is_none());
        assert!(outcome.reply.is_none());
        assert_eq!(repl.board.requests().len(), 3);
    }

    #[test]
    fn staged_attachment_rides_on_next_request() {
        let mut repl = repl();
        let Reply::Staged(staged) = repl
            .handle_line("/attach sink.jpg:2048:image/jpeg")
            .expect("attach")
        else {
            panic!("expected staged");
        };
        let Reply::Outcome(outcome) = repl.handle_line("sink is broken").expect("submit") else {
            panic!("expected outcome");
        };
        let request = outcome.request.expect("request");
        assert_eq!(request.attachments(), std::slice::from_ref(&staged));
        assert!(repl.session.staged().is_empty());
    }

    #[test]
    fn detach_unknown_id_is_an_error() {
        let mut repl = repl();
        assert!(repl.handle_line("/detach att-nope").is_err());
    }

    #[test]
    fn bare_commands_report_usage_instead_of_chatting() {
        let mut repl = repl();
        for command in ["/attach", "/detach", "  /attach  "] {
            let err = repl.handle_line(command).expect_err("missing argument");
            assert!(err.to_string().starts_with("usage: "));
        }
        assert_eq!(repl.session.messages().len(), 1);
    }

    #[test]
    fn blank_line_is_rejected() {
        let mut repl = repl();
        assert!(repl.handle_line("   ").is_err());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut repl = repl();
        assert!(matches!(repl.handle_line("/quit"), Ok(Reply::Quit)));
    }
}
