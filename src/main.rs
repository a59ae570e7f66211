use anyhow::Result;
use clap::{Arg, Command};

// Use modules from the library
use retime::commands;

fn build_cli() -> Command {
    Command::new("retime")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Migrate voice-memo vaults from minute-precision to second-precision timestamps")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("migrate")
                .about("Rename audio files and notes, then rewrite references across the vault")
                .arg(
                    Arg::new("vault")
                        .long("vault")
                        .value_name("PATH")
                        .help("Vault root (overrides the configured vault path)"),
                )
                .arg(
                    Arg::new("manifest")
                        .short('m')
                        .long("manifest")
                        .value_name("FILE")
                        .help("Migration manifest (defaults to retime.toml in the vault root)"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would change without renaming or rewriting anything")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Find legacy-named audio files and propose second-precision timestamps")
                .arg(
                    Arg::new("vault")
                        .long("vault")
                        .value_name("PATH")
                        .help("Vault root (overrides the configured vault path)"),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .value_name("FILE")
                        .help("Write the proposed entries as a migration manifest"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Overwrite an existing manifest without asking")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set configuration values (use 'retime set --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("vault").about("Set the vault root path").arg(
                        Arg::new("path")
                            .help("Path to the vault root")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("audio")
                        .about("Set the audio folder name inside the vault")
                        .arg(
                            Arg::new("name")
                                .help("Folder name holding the voice recordings")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("notes")
                        .about("Set the notes folder name inside the vault")
                        .arg(
                            Arg::new("name")
                                .help("Folder name holding the transcription notes")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Get configuration values (use 'retime get --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("vault").about("Get the vault root path"))
                .subcommand(Command::new("audio").about("Get the audio folder name"))
                .subcommand(Command::new("notes").about("Get the notes folder name")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    retime::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("retime version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("migrate", sub_matches)) => {
            commands::migrate::execute(sub_matches)?;
        }
        Some(("scan", sub_matches)) => {
            commands::scan::execute(sub_matches)?;
        }
        Some(("set", sub_matches)) => {
            commands::config::handle_set(sub_matches)?;
        }
        Some(("get", sub_matches)) => {
            commands::config::handle_get(sub_matches)?;
        }
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut build_cli())?;
        }
        Some(("version", _)) => {
            commands::version::execute()?;
        }
        _ => {
            println!("Welcome to retime!");
            println!("Use 'retime --help' for more information.");
        }
    }

    Ok(())
}
