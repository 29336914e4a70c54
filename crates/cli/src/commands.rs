//! Argument parsing and command dispatch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use featureboard_client::{FeatureBoard, LocalTransport, MonthFilter, VoterRatings};
use featureboard_core::{FeatureId, FeatureInput, Link};
use featureboard_executor::Board;
use featureboard_storage::FileKv;

use crate::format;

/// Data directory used when `--data` is not given.
pub const DEFAULT_DATA_DIR: &str = "featureboard-data";

/// Build the command-line interface.
pub fn build() -> Command {
    Command::new("featureboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, vote on and curate a feature catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .default_value(DEFAULT_DATA_DIR)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the board, its config and voter state"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print JSON instead of text"),
        )
        .subcommand(
            Command::new("list")
                .about("List features chronologically")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .default_value("all")
                        .help("Month name, or 'all'"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .action(ArgAction::Append)
                        .help("Only these categories (repeatable)"),
                )
                .arg(
                    Arg::new("tag")
                        .long("tag")
                        .action(ArgAction::Append)
                        .help("Only features with one of these tags (repeatable)"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Case-insensitive text search"),
                ),
        )
        .subcommand(Command::new("show").about("Show one feature").arg(id_arg()))
        .subcommand(field_args(
            Command::new("add")
                .about("Create a feature")
                .arg(Arg::new("title").long("title").required(true)),
        ))
        .subcommand(field_args(
            Command::new("edit")
                .about("Edit a feature")
                .arg(id_arg())
                .arg(Arg::new("title").long("title")),
        ))
        .subcommand(Command::new("delete").about("Delete a feature").arg(id_arg()))
        .subcommand(Command::new("upvote").about("Upvote a feature").arg(id_arg()))
        .subcommand(
            Command::new("rate")
                .about("Rate a feature from 1 to 5; rating again revises your vote")
                .arg(id_arg())
                .arg(
                    Arg::new("rating")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                ),
        )
        .subcommand(Command::new("star").about("Toggle the star on a feature").arg(id_arg()))
        .subcommand(Command::new("months").about("List months that have features"))
}

fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Feature id")
}

fn field_args(cmd: Command) -> Command {
    let text = [
        ("date", "Release date, e.g. \"August 7th\""),
        ("icon", "Icon or emoji"),
        ("status", "Release status"),
        ("description", "Long description"),
        ("tldr", "One-line summary"),
        ("category", "Category"),
        ("image", "Image URL"),
    ];
    let cmd = text.into_iter().fold(cmd, |cmd, (name, help)| {
        cmd.arg(Arg::new(name).long(name).help(help))
    });
    cmd.arg(
        Arg::new("tag")
            .long("tag")
            .action(ArgAction::Append)
            .help("Tag (repeatable; replaces existing tags)"),
    )
    .arg(
        Arg::new("link")
            .long("link")
            .action(ArgAction::Append)
            .help("Link as URL or TITLE|URL (repeatable; replaces existing links)"),
    )
}

/// Open the board in `dir` and load it into a client container.
pub fn open(dir: &Path) -> Result<FeatureBoard<LocalTransport>> {
    let board = Board::open(dir).with_context(|| format!("opening board in {}", dir.display()))?;
    let voter_path = dir.join(&board.executor().config().voter_file);
    let kv = FileKv::open(&voter_path)
        .with_context(|| format!("opening voter state {}", voter_path.display()))?;
    let mut client = FeatureBoard::new(
        LocalTransport::new(board.executor().clone()),
        VoterRatings::new(Arc::new(kv)),
    );
    client.refresh()?;
    Ok(client)
}

/// Run the selected subcommand and return what to print.
pub fn run(board: &mut FeatureBoard<LocalTransport>, matches: &ArgMatches, json: bool) -> Result<String> {
    let Some((name, m)) = matches.subcommand() else {
        return Err(anyhow!("no command given"));
    };
    match name {
        "list" => {
            let filters = board.filters_mut();
            if let Some(month) = m.get_one::<String>("month") {
                filters.month = month.parse::<MonthFilter>().map_err(|e| anyhow!(e))?;
            }
            filters.categories = strings(m, "category");
            filters.tags = strings(m, "tag");
            filters.search = m.get_one::<String>("search").cloned().unwrap_or_default();
            format::features(&board.filtered(), json)
        }
        "show" => {
            let id = feature_id(m);
            let view = board
                .get(&id)
                .ok_or_else(|| anyhow!("feature not found: {}", id))?;
            format::detail(view, json)
        }
        "add" => {
            let view = board.add(&feature_input(m))?;
            format::detail(&view, json)
        }
        "edit" => {
            let view = board.update(&feature_id(m), &feature_input(m))?;
            format::detail(&view, json)
        }
        "delete" => {
            let id = feature_id(m);
            board.delete(&id)?;
            Ok(format!("Deleted {}", id))
        }
        "upvote" => {
            let view = board.upvote(&feature_id(m))?;
            format::detail(&view, json)
        }
        "rate" => {
            let rating = m
                .get_one::<f64>("rating")
                .copied()
                .ok_or_else(|| anyhow!("rating is required"))?;
            let view = board.rate(&feature_id(m), rating)?;
            format::detail(&view, json)
        }
        "star" => {
            let view = board.toggle_star(&feature_id(m))?;
            format::detail(&view, json)
        }
        "months" => format::months(&board.available_months(), json),
        other => Err(anyhow!("unknown command '{}'", other)),
    }
}

fn feature_id(m: &ArgMatches) -> FeatureId {
    m.get_one::<String>("id")
        .map(|s| FeatureId::from(s.as_str()))
        .unwrap_or_else(|| FeatureId::from(""))
}

fn strings(m: &ArgMatches, name: &str) -> Vec<String> {
    m.get_many::<String>(name)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn feature_input(m: &ArgMatches) -> FeatureInput {
    let text = |name: &str| m.get_one::<String>(name).cloned();
    let mut input = FeatureInput {
        title: text("title"),
        date: text("date"),
        icon: text("icon"),
        status: text("status"),
        description: text("description"),
        tldr: text("tldr"),
        category: text("category"),
        image: text("image"),
        ..FeatureInput::default()
    };
    if m.get_many::<String>("tag").is_some() {
        input = input.with_tags(strings(m, "tag"));
    }
    if m.get_many::<String>("link").is_some() {
        input = input.with_links(strings(m, "link").iter().map(|raw| parse_link(raw)));
    }
    input
}

fn parse_link(raw: &str) -> Link {
    match raw.split_once('|') {
        Some((title, url)) => Link {
            title: title.trim().to_string(),
            url: url.trim().to_string(),
        },
        None => Link {
            title: String::new(),
            url: raw.trim().to_string(),
        },
    }
}
