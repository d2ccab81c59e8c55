//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::loader;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{ConfigTree, SectionConvert, Value};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the parsed command and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".into()));
    };

    let local_dir = cli
        .config_dir
        .clone()
        .or_else(|| std::env::current_dir().ok());
    let settings = Settings::load(local_dir.as_deref())?;
    if !settings.color {
        colored::control::set_override(false);
    }
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Get { path } => cmd_get(&container, cli, path),
        Commands::Has { path } => cmd_has(&container, cli, path),
        Commands::Set { path, value, raw } => cmd_set(&container, cli, path, value, *raw),
        Commands::Remove { path } => cmd_remove(&container, cli, path),
        Commands::Create { path } => cmd_create(&container, cli, path),
        Commands::Dump {
            shallow,
            deep,
            json,
        } => {
            let deep = export_depth(*shallow, *deep, container.settings.shallow);
            cmd_dump(&container, cli, deep, *json)
        }
        Commands::Tree => cmd_tree(&container, cli),
        Commands::Config { command } => cmd_config(&container, command, local_dir),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "cfgtree", &mut io::stdout());
            Ok(exitcode::OK)
        }
    }
}

/// Whether `dump` exports nested sections: flags win, then the `shallow` setting.
pub fn export_depth(shallow: bool, deep: bool, shallow_setting: bool) -> bool {
    match (shallow, deep) {
        (true, _) => false,
        (_, true) => true,
        _ => !shallow_setting,
    }
}

fn document(container: &ServiceContainer, cli: &Cli) -> CliResult<PathBuf> {
    container
        .settings
        .document_or(cli.file.as_deref())
        .ok_or_else(|| {
            CliError::InvalidArgs("no document: pass --file or set `document` in settings".into())
        })
}

#[instrument(level = "debug", skip(container, cli))]
fn cmd_get(container: &ServiceContainer, cli: &Cli, path: &str) -> CliResult<i32> {
    let document = document(container, cli)?;
    match container.documents.get(&document, Some(path))? {
        Some(Value::Scalar(scalar)) => output::info(&scalar),
        Some(Value::Section(section)) => output::info(&section_as_toml(&section)?),
        None => {
            output::absent(path);
            return Ok(exitcode::ABSENT);
        }
    }
    Ok(exitcode::OK)
}

#[instrument(level = "debug", skip(container, cli))]
fn cmd_has(container: &ServiceContainer, cli: &Cli, path: &str) -> CliResult<i32> {
    let document = document(container, cli)?;
    let present = container.documents.has(&document, Some(path))?;
    debug!("has {}: {}", path, present);
    Ok(if present {
        exitcode::OK
    } else {
        exitcode::ABSENT
    })
}

#[instrument(level = "debug", skip(container, cli))]
fn cmd_set(
    container: &ServiceContainer,
    cli: &Cli,
    path: &str,
    value: &str,
    raw: bool,
) -> CliResult<i32> {
    let document = document(container, cli)?;
    let scalar = if raw {
        value.into()
    } else {
        loader::parse_scalar(value)
    };
    container
        .documents
        .set(&document, Some(path), Some(scalar.clone()))?;
    output::changed(path, &format!("= {scalar}"));
    Ok(exitcode::OK)
}

#[instrument(level = "debug", skip(container, cli))]
fn cmd_remove(container: &ServiceContainer, cli: &Cli, path: &str) -> CliResult<i32> {
    let document = document(container, cli)?;
    container.documents.remove(&document, Some(path))?;
    output::changed(path, "removed");
    Ok(exitcode::OK)
}

#[instrument(level = "debug", skip(container, cli))]
fn cmd_create(container: &ServiceContainer, cli: &Cli, path: &str) -> CliResult<i32> {
    let document = document(container, cli)?;
    container.documents.create_section(&document, Some(path))?;
    output::changed(path, "section ready");
    Ok(exitcode::OK)
}

fn cmd_dump(container: &ServiceContainer, cli: &Cli, deep: bool, json: bool) -> CliResult<i32> {
    let document = document(container, cli)?;
    let values = container.documents.values(&document, deep)?;
    let rendered = if json {
        serde_json::to_string_pretty(&values)
            .map_err(|e| CliError::Usage(format!("cannot render JSON: {e}")))?
    } else {
        toml::to_string_pretty(&loader::to_toml(&values))
            .map_err(|e| CliError::Usage(format!("cannot render TOML: {e}")))?
    };
    output::info(rendered.trim_end());
    Ok(exitcode::OK)
}

fn cmd_tree(container: &ServiceContainer, cli: &Cli) -> CliResult<i32> {
    let document = document(container, cli)?;
    let tree = container.documents.load(&document)?;
    output::info(&tree.to_tree_string());
    Ok(exitcode::OK)
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    local_dir: Option<PathBuf>,
) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => output::info(container.settings.to_toml()?.trim_end()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::labelled("global", &path.display()),
                None => output::labelled("global", "<no config directory>"),
            }
            if let Some(dir) = local_dir {
                output::labelled("local", &local_config_path(&dir).display());
            }
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            init_settings(container, &path, *force)?;
            output::action("Created", &path.display());
        }
    }
    Ok(exitcode::OK)
}

/// Write the settings template to `path`, refusing to replace an existing
/// file unless `force` is set.
pub fn init_settings(container: &ServiceContainer, path: &Path, force: bool) -> CliResult<()> {
    if container.fs.exists(path) && !force {
        return Err(CliError::Usage(format!(
            "{} exists, use --force to overwrite",
            path.display()
        )));
    }
    container
        .fs
        .ensure_parent(path)
        .map_err(|e| InfraError::io("create directory for", path, e))?;
    container
        .fs
        .write(path, &Settings::template())
        .map_err(|e| InfraError::io("write", path, e))?;
    debug!("init_settings: wrote {}", path.display());
    Ok(())
}

fn section_as_toml(section: &ConfigTree) -> CliResult<String> {
    toml::to_string_pretty(&loader::to_toml(&section.values(true)))
        .map(|s| s.trim_end().to_string())
        .map_err(|e| CliError::Usage(format!("cannot render TOML: {e}")))
}
