//! argbind CLI - Miniature extension host
//!
//! Commands:
//! - `argbind list` - List the bundled extensions
//! - `argbind usage [NAME]` - Print generated usage text
//! - `argbind parse -- ARGS...` - Bind arguments and print the configurations

use argbind::LogLevel;
use argbind_cli::commands::{self, Format};
use argbind_cli::host::PluginHost;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "argbind")]
#[command(author, version, about = "Host for argbind extension options", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled extensions
    List,

    /// Print usage text for one extension, or all of them
    Usage {
        /// Root option name, with or without prefix (e.g., Xnamespace)
        name: Option<String>,
    },

    /// Bind extension arguments and print the resulting configurations
    Parse {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Arguments as a code generator would pass them
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    argbind_logging::init_logging(cli.log_level)?;

    let mut host = PluginHost::with_builtin_plugins()?;
    let output = match cli.command {
        Commands::List => commands::list(&host),
        Commands::Usage { name } => commands::usage(&host, name.as_deref())?,
        Commands::Parse { format, args } => commands::parse(&mut host, &args, format)?,
    };
    println!("{output}");

    Ok(())
}
