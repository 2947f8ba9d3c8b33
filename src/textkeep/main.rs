use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::Read;
use std::path::PathBuf;
use textkeep::api::{
    CmdMessage, CmdResult, ConfigAction, ExportFormat, MessageLevel, TextkeepApi,
};
use textkeep::commands;
use textkeep::config::TextkeepConfig;
use textkeep::error::{Result, TextkeepError};
use textkeep::model::Bookmark;
use textkeep::store::fs::FileStore;
use textkeep::template::Template;
use textkeep::text::TextOperation;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TextkeepApi<FileStore>,
    root: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { file }) => handle_show(&mut ctx, &file),
        Some(Commands::Save { file, no_backup }) => handle_save(&mut ctx, &file, !no_backup),
        Some(Commands::Create { file }) => print_result(&ctx.api.create_file(&file)?),
        Some(Commands::Delete { file }) => print_result(&ctx.api.delete_file(&file)?),
        Some(Commands::Search {
            file,
            term,
            case_sensitive,
        }) => handle_search(&mut ctx, &file, &term, case_sensitive),
        Some(Commands::Process { file, operation }) => handle_process(&mut ctx, &file, &operation),
        Some(Commands::Template {
            file,
            template,
            send,
        }) => handle_template(&mut ctx, &file, &template, send),
        Some(Commands::Diff { old, new }) => handle_diff(&mut ctx, &old, &new),
        Some(Commands::Export { file, format }) => handle_export(&mut ctx, &file, &format),
        Some(Commands::Bookmark { file, line, name }) => {
            handle_bookmark(&mut ctx, &file, line, name.as_deref())
        }
        Some(Commands::Bookmarks { file }) => handle_bookmarks(&ctx, &file),
        Some(Commands::Backups { file }) => handle_backups(&ctx, &file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TEXTKEEP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }
    if let Some(home) = std::env::var_os("TEXTKEEP_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "textkeep", "textkeep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TextkeepError::NotFound("data directory for this platform".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = resolve_root(cli)?;
    let config = TextkeepConfig::load(&root)?;
    let api = TextkeepApi::open(FileStore::new(&root), config)?;
    Ok(AppContext { api, root })
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    print_files(&result.files);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_files()?;
    print_files(&result.files);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, file: &str) -> Result<()> {
    let result = ctx.api.load_file(file)?;
    print_content(&result);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, file: &str, make_backup: bool) -> Result<()> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    let result = ctx.api.save(file, &content, make_backup)?;
    for path in &result.paths {
        println!("{} {}", "backup:".dimmed(), path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

/// Loads `file` and returns its content.
fn load(ctx: &mut AppContext, file: &str) -> Result<String> {
    Ok(ctx.api.load_file(file)?.content.unwrap_or_default())
}

fn handle_search(ctx: &mut AppContext, file: &str, term: &str, case_sensitive: bool) -> Result<()> {
    let content = load(ctx, file)?;
    let result = ctx.api.search(&content, term, case_sensitive)?;
    print_content(&result);
    Ok(())
}

fn handle_process(ctx: &mut AppContext, file: &str, operation: &str) -> Result<()> {
    let op: TextOperation = operation.parse().map_err(|e| {
        eprintln!("Operations: {}", join_names(TextOperation::ALL.iter().map(|o| o.name())));
        e
    })?;
    let content = load(ctx, file)?;
    print_content(&ctx.api.process(&content, op));
    Ok(())
}

fn handle_template(ctx: &mut AppContext, file: &str, template: &str, send: bool) -> Result<()> {
    let template: Template = template.parse().map_err(|e| {
        eprintln!("Templates: {}", join_names(Template::ALL.iter().map(|t| t.name())));
        e
    })?;
    let content = load(ctx, file)?;
    let result = ctx.api.format_prompt(&content, template);
    if send {
        let prompt = result.content.unwrap_or_default();
        print_messages(&ctx.api.send_to_chat(&prompt).messages);
    } else {
        print_content(&result);
    }
    Ok(())
}

fn handle_diff(ctx: &mut AppContext, old: &str, new: &str) -> Result<()> {
    let old_content = load(ctx, old)?;
    let new_content = load(ctx, new)?;
    print_content(&ctx.api.diff(&old_content, &new_content));
    Ok(())
}

fn handle_export(ctx: &mut AppContext, file: &str, format: &str) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let content = load(ctx, file)?;
    print_result(&ctx.api.export(&content, format)?)
}

fn handle_bookmark(
    ctx: &mut AppContext,
    file: &str,
    line: usize,
    name: Option<&str>,
) -> Result<()> {
    let content = load(ctx, file)?;
    print_result(&ctx.api.add_bookmark(&content, line, name)?)
}

fn handle_bookmarks(ctx: &AppContext, file: &str) -> Result<()> {
    let result = ctx.api.bookmarks(file)?;
    print_bookmarks(&result.bookmarks);
    print_messages(&result.messages);
    Ok(())
}

fn handle_backups(ctx: &AppContext, file: &str) -> Result<()> {
    let result = ctx.api.backups(file)?;
    if result.paths.is_empty() {
        println!("{}", format!("No backups of {}", file).dimmed());
    }
    for path in &result.paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = commands::config::run(&ctx.root, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn print_content(result: &CmdResult) {
    if let Some(content) = &result.content {
        println!("{}", content);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_files(files: &[String]) {
    if files.is_empty() {
        println!("No files found.");
        return;
    }
    for file in files {
        println!("{}", file);
    }
}

const LINE_WIDTH: usize = 80;

fn print_bookmarks(bookmarks: &[Bookmark]) {
    for bm in bookmarks {
        let prefix = format!("{:>5}  ", bm.line);
        let label = if bm.preview.is_empty() {
            bm.name.clone()
        } else {
            format!("{}  {}", bm.name, bm.preview.trim())
        };
        let available = LINE_WIDTH.saturating_sub(prefix.width());
        println!("{}{}", prefix.yellow(), truncate_to_width(&label, available));
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
