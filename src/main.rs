//! taskboard CLI - a three-column kanban board

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use taskboard::board::{DropTarget, Session, Store};
use taskboard::cli::display::{
    display_board, display_history, display_stats, display_task_detail, display_task_list, error,
    success,
};
use taskboard::cli::{Cli, Commands};
use taskboard::models::TaskUpdate;
use taskboard::storage::{BoardLocation, FileBackend};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init_board(cli.global, cli.dir.as_deref()),
        command => {
            let location = BoardLocation::resolve(cli.global, cli.dir.as_deref())?;
            log::debug!("Using board at {:?}", location.board_dir);
            run_board_command(command, Store::open(FileBackend::new(&location.board_dir)))
        }
    }
}

fn init_board(global: bool, dir: Option<&Path>) -> Result<()> {
    let location = match dir {
        Some(dir) => BoardLocation::at(dir),
        None if global => BoardLocation::global()?,
        None => BoardLocation::project_root(&std::env::current_dir()?),
    };

    if location.exists() {
        log::info!("Board directory already exists: {:?}", location.board_dir);
    } else {
        location.ensure_exists()?;
        log::info!("Created board directory: {:?}", location.board_dir);
    }

    Ok(())
}

fn run_board_command(command: Commands, mut store: Store<FileBackend>) -> Result<()> {
    match command {
        Commands::Init => init_board(false, Some(store.persistence().backend().dir()))?,

        Commands::Add {
            title,
            description,
            status,
        } => match store.add_task(&title, description.as_deref(), status) {
            Some(task) => success(&format!(
                "Created #{} in {}: {}",
                task.id,
                task.status.title(),
                task.title
            )),
            None => log::warn!("Task title cannot be empty; nothing added."),
        },

        Commands::Board { search, history } => {
            let mut session = Session::new();
            if let Some(query) = search {
                session.set_filter_query(query);
            }
            if history {
                session.toggle_history();
            }

            display_board(&session.view(&store));
            if session.show_history() {
                println!();
                display_history(store.history());
            }
        }

        Commands::List { status, search } => {
            let mut session = Session::new();
            if let Some(query) = search {
                session.set_filter_query(query);
            }

            let view = session.view(&store);
            let tasks: Vec<_> = view
                .columns
                .iter()
                .filter(|c| status.is_none_or(|s| c.status == s))
                .flat_map(|c| c.tasks.iter().cloned())
                .collect();
            display_task_list(&tasks);
        }

        Commands::Show { id } => {
            let id = store.resolve_id(&id)?;
            if let Some(task) = store.task(&id) {
                display_task_detail(task);
            }
        }

        Commands::Edit {
            id,
            title,
            description,
        } => {
            let id = store.resolve_id(&id)?;
            let update = TaskUpdate { title, description };
            if update == TaskUpdate::default() {
                log::warn!("Nothing to change; pass --title or --description.");
                return Ok(());
            }

            match store.update_task(&id, &update) {
                Some(task) => success(&format!("Updated #{}: {}", task.id, task.title)),
                None => log::warn!("Task title cannot be empty; nothing changed."),
            }
        }

        Commands::Move { id, status } => {
            let id = store.resolve_id(&id)?;
            let from = store
                .task(&id)
                .map(|t| t.status)
                .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;

            match store.move_task(&id, from, status) {
                Some(task) => success(&format!(
                    "Moved #{} to {}: {}",
                    task.id,
                    status.title(),
                    task.title
                )),
                None => log::info!("#{} is already in {}.", id, status.title()),
            }
        }

        Commands::Drop { id, target } => {
            let id = store.resolve_id(&id)?;
            let target = match DropTarget::parse(&target) {
                DropTarget::Task(over) => DropTarget::Task(store.resolve_id(&over)?),
                column => column,
            };

            let mut session = Session::new();
            session.begin_drag(&id);
            if session.end_drag(Some(target), &mut store) {
                display_board(&session.view(&store));
            } else {
                log::info!("Nothing to do for that drop.");
            }
        }

        Commands::Reorder { status, ids } => {
            let ids = ids
                .iter()
                .map(|id| store.resolve_id(id))
                .collect::<Result<Vec<_>, _>>()?;
            store.reorder_tasks(status, &ids);
            success(&format!("Reordered {}", status.title()));
        }

        Commands::Delete { id, force } => {
            let id = store.resolve_id(&id)?;

            if !force {
                let title = store.task(&id).map(|t| t.title.clone()).unwrap_or_default();
                if !confirm(&format!("Delete #{} '{}'?", id, title))? {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            if let Some(task) = store.delete_task(&id) {
                success(&format!("Deleted #{}: {}", task.id, task.title));
            }
        }

        Commands::History => display_history(store.history()),

        Commands::Stats { search } => {
            let mut session = Session::new();
            if let Some(query) = search {
                session.set_filter_query(query);
            }
            display_stats(&store.stats(), &session.view(&store));
        }

        Commands::Reset { force } => {
            if !force && !confirm("Delete every task and all history?")? {
                log::info!("Cancelled.");
                return Ok(());
            }

            store.reset();
            success("Board reset.");
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
