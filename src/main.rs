//! readeck-shortcuts entry point.
//! Resolves options, loads the template, runs the synthesizer and writes
//! the generated configuration.

use readeck_shortcuts::{
    cli::{get_args, Args},
    config::Options,
    error::{default_error_handler, Result},
    loader::load_template,
    synthesizer::Synthesizer,
    writer::write_config,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn labels_summary(options: &Options) -> Option<String> {
    if options.custom_labels.is_empty() {
        return None;
    }
    let labels: Vec<&str> = options
        .custom_labels
        .iter()
        .map(|spec| spec.label.as_str())
        .collect();
    Some(labels.join(", "))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves options from the config file or inline flags
/// 2. Reads the template
/// 3. Synthesizes the configuration
/// 4. Writes it to the output path
fn run(args: Args) -> Result<()> {
    let options = args.resolve_options()?;
    log::debug!(
        "Resolved options: server '{}', default label '{}', {} custom label(s).",
        options.server_url,
        options.default_label,
        options.custom_labels.len()
    );

    let template = load_template(&args.template)?;
    let config = Synthesizer::new().synthesize(&template, &options)?;
    write_config(&config, &args.output)?;

    println!(
        "✅ Configuration generated successfully: {}",
        args.output.display()
    );
    println!("📊 Generated {} shortcuts", config.shortcut_count());
    if let Some(labels) = labels_summary(&options) {
        println!("🏷️  Custom labels: {labels}");
    }
    Ok(())
}
