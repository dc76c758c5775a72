//! Girder demo application.
//!
//! Main entry point showing the full bootstrap: configuration, logging,
//! extension loading, hook dispatch, and handler resolution. Renders a
//! greeting through whichever output handler ends up active.

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{EnvFilter, fmt};

use girder_core::config::FrameworkConfig;
use girder_core::error::FrameworkError;
use girder_core::result::FrameworkResult;
use girder_extend::app::{App, OUTPUT_INTERFACE};
use girder_extend::hooks::context::{ArgSpec, HookContext};
use girder_extend::hooks::points;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Application error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> FrameworkResult<FrameworkConfig> {
    let env = std::env::var("GIRDER_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = FrameworkConfig::load(&env)?;

    // The demo ships with both bundled extensions enabled unless the
    // configuration names its own set.
    if config.extensions.enable.is_empty() {
        config.extensions.enable = vec![
            ext_toml_config::EXTENSION_ID.to_string(),
            ext_json_output::EXTENSION_ID.to_string(),
        ];
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &FrameworkConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main application run function
async fn run(config: FrameworkConfig) -> FrameworkResult<()> {
    tracing::info!("Starting Girder demo v{}", env!("CARGO_PKG_VERSION"));

    let app = App::new(config);
    app.register_extension(ext_toml_config::EXTENSION_ID, ext_toml_config::extension)
        .await;
    app.register_extension(ext_json_output::EXTENSION_ID, ext_json_output::extension)
        .await;

    app.setup().await?;

    // The argument list was assembled during post_setup; turn it into a
    // real parser and let flags override the configured output handler.
    let args = app.args().await;
    let matches = build_cli(&app.config().core.label, &args).get_matches();
    let output_label = select_output_label(app.config(), &args, &matches);

    let mut ctx = HookContext::new(points::PRE_RUN);
    ctx.set("command", serde_json::json!("greet"));
    app.run_hooks(points::PRE_RUN, &mut ctx).await?;

    let handler = app.handlers().get(OUTPUT_INTERFACE, &output_label).await?;
    let renderer = handler.as_output().ok_or_else(|| {
        FrameworkError::internal(format!("handler '{output_label}' cannot render output"))
    })?;

    let extensions: Vec<String> = app
        .extensions()
        .await
        .iter()
        .map(|e| format!("{} {}", e.id, e.version))
        .collect();
    let payload = serde_json::json!({
        "app": app.config().core.label,
        "extensions": extensions,
        "output_handler": output_label,
    });
    println!("{}", renderer.render(&payload)?);

    let mut ctx = HookContext::new(points::POST_RUN);
    ctx.set("command", serde_json::json!("greet"));
    app.run_hooks(points::POST_RUN, &mut ctx).await?;

    app.close().await
}

/// Build the CLI parser from the argument specs hooks contributed.
fn build_cli(label: &str, args: &[ArgSpec]) -> Command {
    let mut cmd = Command::new(label.to_string()).about("Girder demo application");

    for spec in args {
        let id = spec.long.trim_start_matches('-').to_string();
        let arg = Arg::new(id.clone())
            .long(id)
            .help(spec.help.clone())
            .action(if spec.takes_value {
                ArgAction::Set
            } else {
                ArgAction::SetTrue
            });
        cmd = cmd.arg(arg);
    }

    cmd
}

/// Pick the output handler label: configuration default, overridden by
/// whichever output-selecting flag was passed.
fn select_output_label(
    config: &FrameworkConfig,
    args: &[ArgSpec],
    matches: &ArgMatches,
) -> String {
    let mut label = config.handlers.output.clone();

    for spec in args.iter().filter(|s| s.name == "output_handler") {
        let id = spec.long.trim_start_matches('-');
        if spec.takes_value {
            if let Some(value) = matches.get_one::<String>(id) {
                label = value.clone();
            }
        } else if matches.get_flag(id) {
            if let Some(value) = &spec.value_of {
                label = value.clone();
            }
        }
    }

    label
}
