use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, bail};
use std::io::Write;
use std::path::PathBuf;
use taskfile::{Priority, Store, Task, add_task, export, filter, page};

#[derive(Parser)]
#[command(name = "taskfile")]
#[command(about = "Single-user to-do list persisted to a flat JSON file")]
#[command(version)]
struct Cli {
    /// Path to the task file (default: tasks.json in the working directory)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,

        #[arg(short, long, default_value = "Other")]
        category: String,

        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: String,
    },

    /// List tasks, optionally filtered and paginated
    List {
        /// Keep only tasks in this category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Keep only tasks with this priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,

        /// Keep only tasks with this completion state
        #[arg(long)]
        completed: Option<bool>,

        /// Keep only tasks matching this text in title or description
        #[arg(long)]
        search: Option<String>,

        /// Keep only incomplete tasks past their due date
        #[arg(long)]
        overdue: bool,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 5)]
        per_page: usize,
    },

    /// Mark a task as completed
    Done { id: u64 },

    /// Mark a completed task as open again
    Undo { id: u64 },

    /// Remove a task
    Rm { id: u64 },

    /// Delete the task file and everything in it
    Clear,

    /// Export all tasks as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = match &cli.file {
        Some(path) => Store::new(path),
        None => Store::default(),
    };

    match cli.command {
        Commands::Add {
            title,
            description,
            priority,
            category,
            due,
        } => {
            let tasks = store.load()?;
            let tasks = add_task(&tasks, &title, &description, priority, &category, &due);
            store.save(&tasks)?;
            // add_task always appends, so the new task is the last one
            let new = tasks.last().expect("add_task returns a non-empty list");
            println!("Added task {} ({})", new.id, new.title);
        }

        Commands::List {
            category,
            priority,
            completed,
            search,
            overdue,
            page: page_number,
            per_page,
        } => {
            let mut tasks = store.load()?;
            if let Some(category) = category {
                tasks = filter::by_category(&tasks, &category);
            }
            if let Some(priority) = priority {
                tasks = filter::by_priority(&tasks, priority.as_str());
            }
            if let Some(completed) = completed {
                tasks = filter::by_completion(&tasks, completed);
            }
            if let Some(query) = search {
                tasks = filter::search(&tasks, &query);
            }
            if overdue {
                tasks = filter::overdue(&tasks);
            }

            let total_pages = page::num_pages(&tasks, per_page);
            let current = page::paginate(&tasks, page_number, per_page);

            if current.is_empty() {
                println!("No tasks on page {} of {}.", page_number, total_pages);
            } else {
                for task in &current {
                    print_task(task);
                }
                println!(
                    "Page {} of {} ({} task(s) total)",
                    page_number,
                    total_pages,
                    tasks.len()
                );
            }
        }

        Commands::Done { id } => {
            set_completed(&store, id, true)?;
            println!("Task {} completed", id);
        }

        Commands::Undo { id } => {
            set_completed(&store, id, false)?;
            println!("Task {} reopened", id);
        }

        Commands::Rm { id } => {
            let tasks = store.load()?;
            let remaining: Vec<Task> = tasks.into_iter().filter(|t| t.id != id).collect();
            store.save(&remaining)?;
            println!("Task {} removed", id);
        }

        Commands::Clear => {
            store.delete()?;
            println!("All tasks deleted");
        }

        Commands::Export { output } => {
            let tasks = store.load()?;
            let bytes = export::to_csv_bytes(&tasks)?;
            match output {
                Some(path) => std::fs::write(&path, bytes)?,
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
    }

    Ok(())
}

fn set_completed(store: &Store, id: u64, completed: bool) -> Result<()> {
    let mut tasks = store.load()?;
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        bail!("No task with id {}", id);
    };
    task.completed = completed;
    store.save(&tasks)
}

fn print_task(task: &Task) {
    let title = if task.completed {
        task.title.strikethrough().dimmed()
    } else {
        task.title.bold()
    };
    let priority = match task.priority {
        Priority::High => task.priority.as_str().red(),
        Priority::Medium => task.priority.as_str().yellow(),
        Priority::Low => task.priority.as_str().green(),
    };

    println!("{:>4}  {}", task.id, title);
    if !task.description.is_empty() {
        println!("      {}", task.description);
    }
    println!(
        "      due {} | {} | {}",
        task.due_date, priority, task.category
    );
}
