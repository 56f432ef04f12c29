//! # CLI Layer
//!
//! The **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Uses `std::process::exit`
//! - Installs the log subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: via [`Cli`] (clap derive)
//! 2. **Logging**: `tracing-subscriber` on stderr, `-v`/`-vv` or `RUST_LOG`
//! 3. **Context Setup**: [`initialize`] resolves the data dir and config
//! 4. **Dispatch**: one handler per subcommand, all going through the API
//! 5. **Output**: human rendering or `--json`

use super::render;
use super::setup::{Cli, Commands, DraftCommands};
use clap::Parser;
use ideainboxapp::commands::{CmdMessage, CmdResult};
use ideainboxapp::config::InboxConfig;
use ideainboxapp::error::Result;
use ideainboxapp::handoff::HandoffMethod;
use ideainboxapp::init::{initialize, InboxContext};
use ideainboxapp::model::Settings;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let force_local = matches!(
        &cli.command,
        Some(Commands::Process { local: true, .. }) | Some(Commands::Send { local: true, .. })
    );
    let mut ctx = initialize(cli.data.clone(), force_local)?;
    let json = cli.json;

    match cli.command {
        None => handle_draft(&mut ctx, None, json),
        Some(Commands::Process { text, .. }) => handle_process(&mut ctx, &text, json),
        Some(Commands::Send { text, via, dir, .. }) => {
            handle_send(&mut ctx, &text, via.into(), dir, json)
        }
        Some(Commands::Draft { action }) => handle_draft(&mut ctx, action, json),
        Some(Commands::Settings { collection, path }) => {
            handle_settings(&mut ctx, collection, path, json)
        }
        Some(Commands::Config { template }) => handle_config(&ctx, template, json),
    }
}

/// Warnings by default; `-v` debug and `-vv` trace for our crates.
/// `RUST_LOG` directives apply on top of the default.
fn init_logging(verbose: u8) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let level = match verbose {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };
    if let Some(level) = level {
        for target in ["ideainbox", "ideainboxapp"] {
            if let Ok(directive) = format!("{}={}", target, level).parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Text from arguments, else from piped stdin. `None` means "use the draft".
fn read_input(args: &[String]) -> Result<Option<String>> {
    if !args.is_empty() {
        return Ok(Some(args.join(" ")));
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok(Some(buf).filter(|text| !text.trim().is_empty()))
}

/// Saves new input as the draft right away; a CLI run has no typing pause
/// to wait for.
fn save_input_as_draft(ctx: &mut InboxContext, args: &[String]) -> Result<()> {
    if let Some(text) = read_input(args)? {
        ctx.api.edit_draft(text, Instant::now());
        ctx.api.flush_draft()?;
    }
    Ok(())
}

fn handle_process(ctx: &mut InboxContext, args: &[String], json: bool) -> Result<()> {
    save_input_as_draft(ctx, args)?;
    let result = ctx.api.process_draft()?;
    print_result(&result, json)
}

fn handle_send(
    ctx: &mut InboxContext,
    args: &[String],
    method: HandoffMethod,
    dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    save_input_as_draft(ctx, args)?;
    let processed = ctx.api.process_draft()?;

    let sink = ctx.handoff(method, dir);
    let mut result = ctx.api.sync(sink.as_ref())?;
    result.source = processed.source;
    result.prepend_messages(processed.messages);

    if result.has_errors() {
        print_result(&result, json)?;
        std::process::exit(1);
    }

    ctx.api.discard()?;
    print_result(&result, json)
}

fn handle_draft(ctx: &mut InboxContext, action: Option<DraftCommands>, json: bool) -> Result<()> {
    let result = match action {
        None | Some(DraftCommands::Show) => ctx.api.show_draft(),
        Some(DraftCommands::Set { text }) => {
            let text = read_input(&text)?.unwrap_or_default();
            ctx.api.edit_draft(text, Instant::now());
            ctx.api.flush_draft()?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success("Draft saved"));
            result
        }
        Some(DraftCommands::Clear) => ctx.api.discard()?,
        Some(DraftCommands::Path) => {
            let path = ctx.api.draft_location();
            if json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path);
            }
            return Ok(());
        }
    };
    print_result(&result, json)
}

fn handle_settings(
    ctx: &mut InboxContext,
    collection: Option<String>,
    path: Option<String>,
    json: bool,
) -> Result<()> {
    if collection.is_none() && path.is_none() {
        return print_result(&ctx.api.show_settings(), json);
    }

    let current = ctx.api.settings().clone();
    let settings = Settings::new(
        collection.unwrap_or(current.collection_name),
        path.unwrap_or(current.sub_path),
    );
    let result = ctx.api.save_settings(settings)?;
    print_result(&result, json)
}

fn handle_config(ctx: &InboxContext, template: bool, json: bool) -> Result<()> {
    if template {
        print!("{}", InboxConfig::template());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    } else {
        print!("{}", render::render_config(&ctx.config, &ctx.data_dir));
    }
    Ok(())
}

fn print_result(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    let (out, err) = render::render_result(result);
    print!("{}", out);
    eprint!("{}", err);
    Ok(())
}
