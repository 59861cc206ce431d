/*
[INPUT]:  Parsed CLI subcommands and a loaded Workspace
[OUTPUT]: Rendered boards/columns and invoked workspace operations
[POS]:    CLI presentation layer - no sync logic of its own
[UPDATE]: When adding subcommands or changing output
*/

mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use console::style;
use taskboard_adapter::{Board, EntityId, Task, TaskStatus};
use taskboard_sync::{
    AutoConfirm, BoardForm, Confirm, Notification, NotificationLevel, SyncError, TaskForm,
    Workspace,
};
use tokio::sync::mpsc;

use prompt::TerminalConfirm;

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Boards and tasks from the terminal")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
    #[arg(long = "user-id", value_name = "ID")]
    pub user_id: Option<EntityId>,
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List boards
    Boards,
    /// Show a board's tasks by column
    Tasks { board: String },
    /// Create a board
    AddBoard {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit a board's name or description
    EditBoard {
        board: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a board
    RmBoard {
        board: String,
        #[arg(long)]
        yes: bool,
    },
    /// Create a task on a board
    AddTask {
        board: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "todo")]
        status: TaskStatus,
        #[arg(long)]
        assignee: Option<EntityId>,
    },
    /// Edit a task
    EditTask {
        board: String,
        task: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        assignee: Option<EntityId>,
    },
    /// Move a task to another column
    MoveTask {
        board: String,
        task: String,
        status: TaskStatus,
    },
    /// Delete a task
    RmTask {
        board: String,
        task: String,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    command: Command,
    workspace: &mut Workspace,
    notifications: &mut mpsc::UnboundedReceiver<Notification>,
) -> Result<()> {
    workspace.load().await;
    let result = dispatch(command, workspace).await;
    print_notifications(notifications);
    result
}

async fn dispatch(command: Command, workspace: &mut Workspace) -> Result<()> {
    match command {
        Command::Boards => {
            ensure_loaded(workspace.boards().snapshot().last_error)?;
            print_boards(&workspace.boards().boards());
        }
        Command::Tasks { board } => {
            let board = select(workspace, &board).await?;
            ensure_loaded(workspace.tasks().snapshot().last_error)?;
            print_columns(workspace, &board);
        }
        Command::AddBoard { name, description } => {
            workspace.open_create_board();
            submit_board(workspace, &BoardForm::new(name, description)).await?;
            if let Some(board) = workspace.active_board() {
                println!("Active board: {}", style(&board.name).bold());
            }
        }
        Command::EditBoard {
            board,
            name,
            description,
        } => {
            let board = find_board(workspace, &board)?;
            let mut form = BoardForm::from_board(&board);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            workspace.open_edit_board(board);
            submit_board(workspace, &form).await?;
        }
        Command::RmBoard { board, yes } => {
            // Left unselected: the board's tasks are not needed to delete it.
            let board = find_board(workspace, &board)?;
            let confirm = confirmer(yes);
            if !workspace.delete_board(&board.id, confirm.as_ref()).await? {
                println!("{}", style("Cancelled.").yellow());
            }
        }
        Command::AddTask {
            board,
            title,
            description,
            status,
            assignee,
        } => {
            select(workspace, &board).await?;
            workspace.open_create_task()?;
            let mut form = TaskForm::new(title, description).with_status(status);
            form.assignee_id = assignee;
            submit_task(workspace, &form).await?;
        }
        Command::EditTask {
            board,
            task,
            title,
            description,
            status,
            assignee,
        } => {
            select(workspace, &board).await?;
            let task = find_task(workspace, &task)?;
            let mut form = TaskForm::from_task(&task);
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(status) = status {
                form.status = status;
            }
            form.assignee_id = assignee;
            workspace.open_edit_task(task);
            submit_task(workspace, &form).await?;
        }
        Command::MoveTask {
            board,
            task,
            status,
        } => {
            select(workspace, &board).await?;
            let task = find_task(workspace, &task)?;
            workspace.move_task(&task.id, status).await?;
            println!(
                "{} -> {}",
                style(&task.title).bold(),
                style(status.label()).cyan()
            );
        }
        Command::RmTask { board, task, yes } => {
            select(workspace, &board).await?;
            let task = find_task(workspace, &task)?;
            let confirm = confirmer(yes);
            if !workspace.delete_task(&task.id, confirm.as_ref()).await? {
                println!("{}", style("Cancelled.").yellow());
            }
        }
    }
    Ok(())
}

fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(AutoConfirm::yes())
    } else {
        Box::new(TerminalConfirm::new())
    }
}

fn ensure_loaded(last_error: Option<String>) -> Result<()> {
    match last_error {
        Some(message) => Err(anyhow!(message)),
        None => Ok(()),
    }
}

async fn select(workspace: &mut Workspace, key: &str) -> Result<Board> {
    let board = find_board(workspace, key)?;
    workspace.select_board(Some(board.id.clone())).await;
    Ok(board)
}

/// Match on id first, then on exact name.
fn find_board(workspace: &Workspace, key: &str) -> Result<Board> {
    let boards = workspace.boards().boards();
    boards
        .iter()
        .find(|b| b.id.matches(key))
        .or_else(|| boards.iter().find(|b| b.name == key))
        .cloned()
        .with_context(|| format!("no board matches {key:?}"))
}

fn find_task(workspace: &Workspace, key: &str) -> Result<Task> {
    let tasks = workspace.tasks().tasks();
    tasks
        .iter()
        .find(|t| t.id.matches(key))
        .or_else(|| tasks.iter().find(|t| t.slug == key))
        .cloned()
        .with_context(|| format!("no task matches {key:?}"))
}

async fn submit_board(workspace: &mut Workspace, form: &BoardForm) -> Result<()> {
    let result = workspace.submit_board(form).await;
    report_validation(result)
}

async fn submit_task(workspace: &mut Workspace, form: &TaskForm) -> Result<()> {
    let result = workspace.submit_task(form).await;
    report_validation(result)
}

fn report_validation(result: Result<(), SyncError>) -> Result<()> {
    match result {
        Err(SyncError::Validation(errors)) => {
            for error in errors.errors() {
                println!("{} {}", style(format!("{}:", error.field)).red(), error.message);
            }
            Err(anyhow!("input rejected"))
        }
        other => other.map_err(Into::into),
    }
}

fn print_boards(boards: &[Board]) {
    if boards.is_empty() {
        println!("Create your first board to get started");
        return;
    }
    for board in boards {
        println!(
            "{:>6}  {}  {}",
            style(board.id.to_string()).dim(),
            style(&board.name).bold(),
            style(format!("({} tasks)", board.task_count)).dim()
        );
        if !board.description.is_empty() {
            println!("        {}", board.description);
        }
    }
}

fn print_columns(workspace: &Workspace, board: &Board) {
    println!("{}", style(&board.name).bold().cyan());
    for (status, tasks) in workspace.tasks().columns().iter() {
        println!();
        println!(
            "{} ({})  {}",
            style(status.column_title()).bold(),
            tasks.len(),
            style(status.label()).dim()
        );
        for task in tasks {
            println!("  {:>6}  {}", style(task.id.to_string()).dim(), task.title);
        }
    }
}

fn print_notifications(notifications: &mut mpsc::UnboundedReceiver<Notification>) {
    while let Ok(notification) = notifications.try_recv() {
        let line = match notification.level {
            NotificationLevel::Success => style(notification.message).green(),
            NotificationLevel::Warning => style(notification.message).yellow(),
            NotificationLevel::Error => style(notification.message).red(),
        };
        println!("{line}");
    }
}
