use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, trace};

use fieldmap_cli::TerminalDialog;
use fieldmap_cli::logging::redact_value;
use fieldmap_cli::mappings::{load_mappings, mappings_from_pairs};
use fieldmap_core::{TransferOptions, Workbench};
use fieldmap_model::{FieldMapping, OpenSourceResponse, PreviewRequest, PreviewResponse};
use fieldmap_output::OutputFormat;

use crate::cli::{FieldsArgs, OutputFormatArg, PreviewArgs, TransferArgs};
use crate::summary::{print_fields, print_preview, print_transfer};

pub fn run_fields(args: &FieldsArgs) -> Result<i32> {
    let workbench = Workbench::default();
    let mut dialog = TerminalDialog::stdio(args.source.clone(), None);
    let Some(response) = workbench.open_source(&mut dialog) else {
        eprintln!("Open was canceled.");
        return Ok(0);
    };
    if args.json {
        print_json(&response)?;
    }
    match &response {
        OpenSourceResponse::Opened(source) => {
            if !args.json {
                print_fields(source);
            }
            Ok(0)
        }
        OpenSourceResponse::Failed { error } => {
            if !args.json {
                eprintln!("error: {error}");
            }
            Ok(1)
        }
    }
}

pub fn run_preview(args: &PreviewArgs) -> Result<i32> {
    let span = info_span!("preview", field = %args.field);
    let _guard = span.enter();
    let request = PreviewRequest::new(&args.source, &args.field);
    let response = Workbench::default().preview_field(&request);
    if args.json {
        print_json(&response)?;
    }
    match &response {
        PreviewResponse::Data { data } => {
            for value in data {
                trace!(value = redact_value(&value.to_string()), "preview value");
            }
            if !args.json {
                print_preview(&args.field, data);
            }
            Ok(0)
        }
        PreviewResponse::Failed { error } => {
            if !args.json {
                eprintln!("error: {error}");
            }
            Ok(1)
        }
    }
}

pub fn run_transfer(args: &TransferArgs) -> Result<i32> {
    let mappings = resolve_mappings(args)?;
    let span = info_span!("transfer", mappings = mappings.len());
    let _guard = span.enter();
    for mapping in &mappings {
        debug!(
            source = mapping.source_field(),
            dest = mapping.dest_field(),
            "mapping"
        );
    }

    let workbench = Workbench::new(transfer_options(args));
    let mut dialog = TerminalDialog::stdio(None, args.output.clone());
    let response = workbench.run_transfer(&mappings, &mut dialog);
    info!(success = response.is_success(), "transfer finished");

    if args.json {
        print_json(&response)?;
    } else {
        print_transfer(&response);
    }
    Ok(if response.is_success() || response.is_cancelled() {
        0
    } else {
        1
    })
}

fn resolve_mappings(args: &TransferArgs) -> Result<Vec<FieldMapping>> {
    if let Some(path) = &args.mappings {
        return load_mappings(path);
    }
    let Some(source) = &args.source else {
        bail!("--source is required with --map");
    };
    mappings_from_pairs(source, &args.map).context("read --map pairs")
}

fn transfer_options(args: &TransferArgs) -> TransferOptions {
    let mut options = TransferOptions::new();
    if let Some(name) = &args.default_name {
        options = options.with_default_output_name(name);
    }
    if let Some(format) = args.format {
        options = options.with_format(match format {
            OutputFormatArg::Xlsx => OutputFormat::Xlsx,
            OutputFormatArg::Csv => OutputFormat::Csv,
        });
    }
    options
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize response")?;
    println!("{json}");
    Ok(())
}
