use super::render::{print_messages, render_todo_list};
use super::session::run_session;
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use todolist::api::{ConfigAction, TodoApi};
use todolist::error::Result;
use todolist::init::initialize;
use todolist::store::fs::FileStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { text }) => handle_add(&mut ctx, text.join(" ")),
        Some(Commands::Toggle { ids }) => handle_toggle(&mut ctx, ids),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Session) => handle_session(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global)?;
    Ok(AppContext { api: ctx.api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_todos()?;
    print!("{}", render_todo_list(&result.listed_todos));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: String) -> Result<()> {
    let result = ctx.api.add_todo(text)?;
    print_messages(&result.messages);
    save(ctx)
}

fn handle_toggle(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_todos(ids.as_slice())?;
    print_messages(&result.messages);
    save(ctx)
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_todos(ids.as_slice())?;
    print_messages(&result.messages);
    save(ctx)
}

fn save(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.save()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = std::io::stdout();
    run_session(&mut ctx.api, stdin.lock(), &mut stdout, prompt)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
