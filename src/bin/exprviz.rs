//! Command-line interface for exprviz
//! This binary renders the display tree of the built-in sample expressions.
//!
//! Usage:
//!   exprviz show `<sample>` [--format `<format>`] [--config `<file>`] [--max-depth `<n>`]
//!   exprviz list-samples                                       - List sample expressions
//!   exprviz list-formats                                       - List output formats

use clap::{value_parser, Arg, Command};
use exprviz::exprviz::config::{ExprvizConfig, Loader};
use exprviz::exprviz::formats::FormatRegistry;
use exprviz::exprviz::testing::{sample, sample_names};
use exprviz::exprviz::TreeBuilder;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("exprviz")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render expression trees as labeled display trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Render a sample expression")
                .arg(
                    Arg::new("sample")
                        .help("Name of the sample (see list-samples)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'labels', 'json')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .help("Depth at which nodes are truncated")
                        .value_parser(value_parser!(i64).range(1..)),
                ),
        )
        .subcommand(Command::new("list-samples").about("List the sample expressions"))
        .subcommand(Command::new("list-formats").about("List the available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("show", show_matches)) => {
            let name = show_matches
                .get_one::<String>("sample")
                .map(String::as_str)
                .unwrap_or_default();
            let config = load_config(
                show_matches.get_one::<String>("config"),
                show_matches.get_one::<i64>("max-depth").copied(),
            )
            .unwrap_or_else(|e| fail(e));
            let format = show_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone());
            handle_show_command(name, &format, &config);
        }
        Some(("list-samples", _)) => {
            for name in sample_names() {
                println!("{}", name);
            }
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn load_config(
    path: Option<&String>,
    max_depth: Option<i64>,
) -> Result<ExprvizConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(depth) = max_depth {
        loader = loader.set_override("build.max_depth", depth)?;
    }
    loader.build()
}

/// Handle the show command
fn handle_show_command(name: &str, format: &str, config: &ExprvizConfig) {
    let expression = sample(name).unwrap_or_else(|| fail(format!("Unknown sample '{}'", name)));
    let tree = TreeBuilder::new(config.build_options()).build(&expression, None);
    let registry = FormatRegistry::with_treeviz_options(config.treeviz_options());
    match registry.serialize(&tree, format) {
        Ok(output) => print!("{}", output),
        Err(e) => fail(e),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for (name, description) in FormatRegistry::with_defaults().describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
