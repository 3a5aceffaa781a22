//! Shared output formatting for kanby CLI commands.

use serde::Serialize;

use crate::board::Projection;
use crate::error::Result;
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "kanby.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&str>,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{human}");
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);
    let hint = next_steps.first().map(|step| step.as_str());
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
            },
            next_steps,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

/// Render the board the way the column view does: three headed columns
/// with counts, priority marker per card
pub fn format_board(projection: &Projection) -> String {
    let mut lines = Vec::new();
    let counts = projection.counts();

    push_column(&mut lines, "TODO", counts.todo, &projection.todo);
    push_column(&mut lines, "DOING", counts.doing, &projection.doing);
    push_column(&mut lines, "DONE", counts.done, &projection.done);

    lines.join("\n")
}

fn push_column(lines: &mut Vec<String>, header: &str, count: usize, tasks: &[Task]) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("{header} ({count})"));
    for task in tasks {
        let marker = match task.priority.rank() {
            1 => "H",
            2 => "M",
            3 => "L",
            _ => "?",
        };
        lines.push(format!("  [{marker}] {}  {}", task.id, task.title));
    }
}

pub fn infer_command_name_from_args() -> String {
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        if arg.starts_with('-') {
            // Skip the value of flags that take one
            if matches!(arg.as_str(), "--data-dir" | "--api-url") {
                args.next();
            }
            continue;
        }
        return arg;
    }

    "kanby".to_string()
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

fn error_next_steps(err: &crate::error::Error) -> Vec<String> {
    use crate::error::Error;

    match err {
        Error::RemoteStatus(_) | Error::RemoteTransport(_) | Error::Startup(_) => {
            vec!["check your connection, then run 'kanby board' to retry".to_string()]
        }
        Error::InvalidConfig(_) => vec!["fix .kanby.toml then retry".to_string()],
        Error::TaskNotFound(_) => vec!["kanby board".to_string()],
        _ => Vec::new(),
    }
}
