use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use concierge::config::{DialogConfig, load_record};
use concierge::dialog::{ActionDialog, SubmitOutcome};
use concierge::frame_json::frame_to_json;
use concierge::presets::preset;
use concierge::terminal::Printer;
use concierge::theme::Theme;
use concierge::validation::{CustomValidators, ValidationSummary};
use concierge::value::Value;
use concierge::{action_style::ActionType, validators};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "concierge")]
#[command(version, about = "Preview booking action dialogs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a dialog, apply edits and print the rendered frame
    Preview(PreviewArgs),
}

#[derive(clap::Args)]
struct PreviewArgs {
    /// Dialog definition (.yaml, .yml or .json)
    #[arg(required_unless_present = "preset", conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in dialog instead of a file: check-in, check-out, cancel, confirm
    #[arg(long)]
    preset: Option<String>,

    /// Data snapshot used to seed the form
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// Field edit applied after opening, as name=value (repeatable)
    #[arg(long = "set", short = 's', value_name = "NAME=VALUE")]
    edits: Vec<String>,

    /// Press the submit button after applying edits
    #[arg(long)]
    submit: bool,

    /// Render as if the caller reported a submission in progress
    #[arg(long)]
    loading: bool,

    /// Server error to show in the banner
    #[arg(long)]
    error: Option<String>,

    /// Print the frame as JSON instead of styled text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
    }
}

fn parse_edit(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => bail!("invalid edit `{raw}`, expected NAME=VALUE"),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let (mut ctx, options) = match (&args.config, &args.preset) {
        (Some(path), _) => {
            let config = DialogConfig::load(path)
                .with_context(|| format!("loading dialog from {}", path.display()))?;
            (config.context(), config.options)
        }
        (None, Some(name)) => (preset(ActionType::from(name.as_str())), Default::default()),
        (None, None) => bail!("either a config file or --preset is required"),
    };

    if let Some(path) = &args.data {
        let data = load_record(path)
            .with_context(|| format!("loading data from {}", path.display()))?;
        ctx = ctx.with_data(data);
    }

    let submitted = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&submitted);
    let validators: CustomValidators = validators::for_schema(&ctx.fields);
    let mut dialog = ActionDialog::new(
        move |values| {
            *sink.borrow_mut() = Some(values.clone());
        },
        || tracing::info!("close requested"),
    )
    .with_options(options)
    .with_validators(validators);

    dialog.sync(ctx.opened());
    for raw in &args.edits {
        let (name, value) = parse_edit(raw)?;
        dialog
            .edit(name, Value::text(value))
            .with_context(|| format!("editing `{name}`"))?;
    }

    if args.submit {
        match dialog.submit() {
            SubmitOutcome::Submitted(values) => {
                tracing::info!(fields = values.len(), "submitted");
            }
            SubmitOutcome::Invalid(errors) => {
                let summary = ValidationSummary::from_errors(&errors, Some(&dialog.context().fields));
                tracing::warn!("{}", summary.message);
            }
            SubmitOutcome::Blocked(reason) => tracing::warn!(?reason, "submit blocked"),
        }
    }

    let mut next = dialog.context().clone().with_loading(args.loading);
    next.error = args.error.clone();
    dialog.sync(next);

    let frame = dialog.render(&Theme::default());
    if args.json {
        let mut out = serde_json::json!({ "frame": frame_to_json(&frame) });
        if let Some(values) = submitted.borrow().as_ref() {
            out["submitted"] = serde_json::to_value(values)?;
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        Printer::stdout().print_frame(&frame)?;
    }
    Ok(())
}
