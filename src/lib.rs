//! admin-nav: navigation trees for an administrative back-office.
//!
//! Menus are composed bottom-up and serialized top-down:
//!
//! - [`menu::MenuItem`]: a navigable leaf with icon, badge, visibility and metadata
//! - [`menu::MenuGroup`]: ordered, optionally collapsible list of items
//! - [`menu::MenuSection`]: top-level collapsible container of items and groups
//! - [`menu::Menu`]: the ordered root, serialized to JSON for the presentation layer
//! - [`menu::UserMenu`]: the account-dropdown customization hook
//!
//! Collapsible containers carry a stable state identifier derived from their
//! label (`menu_section_*` / `menu_group_*`) so the front end can persist
//! expand/collapse state.
//!
//! # Examples
//!
//! ```bash
//! # Render a TOML navigation file as JSON
//! admin-nav render nav.toml --attr admin=true --user-menu
//!
//! # Show the identifier a section label maps to
//! admin-nav state-id "Tëst Ünïcödé"
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: errors, request context, TOML config, resolution and output
//! - [`menu`]: the tree types

pub mod core;
pub mod menu;

mod cli;

use crate::cli::{Cli, Command, ContainerKindArg, RenderCli};
use crate::core::context::RequestContext;
use crate::core::navigation::{self, ResolveOptions};
use crate::core::{config, error, output};
use crate::menu::{UserMenu, state_id};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub use crate::core::error::NavError;

const LOG_ENV: &str = "ADMIN_NAV_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<(), error::NavError> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => run_render(args),
        Command::StateId { label, kind } => {
            let prefix = match kind {
                ContainerKindArg::Section => state_id::SECTION_PREFIX,
                ContainerKindArg::Group => state_id::GROUP_PREFIX,
            };
            println!("{}", state_id::derive_state_id(prefix, &label));
            Ok(())
        }
    }
}

fn build_context(args: &RenderCli) -> Result<RequestContext, error::NavError> {
    let mut ctx = RequestContext::new();
    if let Some(path) = &args.path {
        ctx = ctx.with_path(path.as_str());
    }
    for raw in &args.attrs {
        let (key, value) = RequestContext::parse_attr(raw).ok_or_else(|| {
            error::NavError::invalid(format!("invalid --attr '{}': expected key=value", raw))
        })?;
        ctx.attributes.insert(key, value);
    }
    Ok(ctx)
}

fn run_render(args: RenderCli) -> Result<(), error::NavError> {
    let cfg = config::load_nav_config(&args.file)?;
    let menu = cfg.build_menu()?;
    let user_menu = if args.user_menu {
        cfg.user_menu()?
    } else {
        UserMenu::new()
    };
    let ctx = build_context(&args)?;

    let payload = navigation::resolve_navigation(
        &menu,
        &user_menu,
        &ctx,
        ResolveOptions {
            include_hidden: args.all,
        },
    )?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "text" => {
            println!("{}", output::render_tree(&payload.menu));
            if let Some(user) = &payload.user_menu {
                println!();
                println!("{}", "User menu".bright_cyan().bold());
                println!("{}", output::render_tree(user));
            }
        }
        other => {
            return Err(error::NavError::invalid(format!(
                "unknown format '{}': expected 'json' or 'text'",
                other
            )));
        }
    }
    Ok(())
}
