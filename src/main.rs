use depdesk::adapters::outbound::console::{
    ConsoleNavigator, ConsoleNotificationCenter, StderrProgressReporter,
};
use depdesk::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use depdesk::adapters::outbound::npm::{NpmChannel, TimeoutChannel, DEFAULT_REQUEST_TIMEOUT};
use depdesk::application::controllers::{DeleteOutcome, DependencyListController};
use depdesk::application::dto::StoreSettings;
use depdesk::application::use_cases::DependencyStore;
use depdesk::cli::{Args, Command, ListArgs, OutputArgs, OutputFormat};
use depdesk::config::{self, ConfigFile};
use depdesk::dependency_management::domain::{Dependency, DependencyType, SortKey};
use depdesk::ports::inbound::{DependencyStorePort, UpdateOutcome};
use depdesk::ports::outbound::{NotificationPermission, OutputPresenter};
use depdesk::shared::error::{DependencyError, ExitCode};
use depdesk::shared::Result;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

type Channel = TimeoutChannel<NpmChannel>;
type Store = DependencyStore<
    Channel,
    Channel,
    ConsoleNotificationCenter,
    ConsoleNavigator,
    StderrProgressReporter,
>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Settings after merging the config file under the command line
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSettings {
    timeout: Duration,
    npm_command: String,
    notifications: NotificationPermission,
    filter_outdated_dependencies: bool,
    check_outdated_on_startup: bool,
    format: OutputFormat,
}

fn resolve_settings(args: &Args, config: &ConfigFile) -> Result<RunSettings> {
    let format = match config.format.as_deref() {
        Some(format) => format.parse().map_err(anyhow::Error::msg)?,
        None => OutputFormat::Table,
    };

    Ok(RunSettings {
        timeout: args
            .timeout
            .or(config.request_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        npm_command: args
            .npm_command
            .clone()
            .or_else(|| config.npm_command.clone())
            .unwrap_or_else(|| "npm".to_string()),
        notifications: config
            .notifications
            .map(|setting| setting.permission())
            .unwrap_or_default(),
        filter_outdated_dependencies: config.filter_outdated_dependencies.unwrap_or(false),
        check_outdated_on_startup: config.check_outdated_on_startup.unwrap_or(false),
        format,
    })
}

async fn run(args: Args) -> Result<ExitCode> {
    let project_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };
    let settings = resolve_settings(&args, &config)?;

    // Create adapters (Dependency Injection)
    let channel = TimeoutChannel::new(
        NpmChannel::new(&project_path).with_npm_command(settings.npm_command.clone()),
        settings.timeout,
    );
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let store: Arc<Store> = Arc::new(DependencyStore::new(
        channel.clone(),
        channel,
        ConsoleNotificationCenter::new(settings.notifications),
        ConsoleNavigator::new(),
        progress_reporter,
        StoreSettings::new(
            settings.filter_outdated_dependencies,
            settings.check_outdated_on_startup,
        ),
    ));

    store.initialize().await;

    match args.command {
        Command::List(list) => {
            if list.outdated_only {
                store.set_filter_outdated(true);
            }
            store.fetch_dependencies().await?;
            present_list(&store, &list, &settings)
        }
        Command::Outdated(output) => {
            store.set_filter_outdated(true);
            store.fetch_dependencies().await?;
            let list = ListArgs {
                sort: SortKey::Name,
                desc: false,
                outdated_only: true,
                output,
            };
            present_list(&store, &list, &settings)
        }
        Command::Add {
            name,
            dependency_type,
        } => add(&store, &name, dependency_type).await,
        Command::Remove { name, yes } => remove(store, &name, yes).await,
        Command::Update { name } => update(store, &name).await,
    }
}

fn present_list(store: &Arc<Store>, list: &ListArgs, settings: &RunSettings) -> Result<ExitCode> {
    let controller = DependencyListController::new(Arc::clone(store));
    if controller.sort().key != list.sort {
        controller.set_sort(list.sort);
    }
    if list.desc {
        controller.set_sort(list.sort);
    }

    let dependencies = controller.sorted_dependencies();
    render(&dependencies, &controller, &list.output, settings)?;

    let outdated_found = !store.outdated_report().is_empty();
    if list.output.fail_on_outdated && outdated_found {
        return Ok(ExitCode::OutdatedDetected);
    }
    Ok(ExitCode::Success)
}

fn render(
    dependencies: &[Dependency],
    controller: &DependencyListController<Store>,
    output: &OutputArgs,
    settings: &RunSettings,
) -> Result<()> {
    let format = output.format.unwrap_or(settings.format);
    let colored = output.output.is_none() && io::stdout().is_terminal();
    let formatter = format.create_formatter(colored);
    let rendered = formatter.format(dependencies, controller.sort())?;

    let presenter: Box<dyn OutputPresenter> = match &output.output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&rendered)
}

async fn add(store: &Arc<Store>, name: &str, dependency_type: DependencyType) -> Result<ExitCode> {
    store.add_dependency(name, dependency_type).await?;
    Ok(ExitCode::Success)
}

async fn remove(store: Arc<Store>, name: &str, yes: bool) -> Result<ExitCode> {
    store.set_filter_outdated(false);
    store.fetch_dependencies().await?;

    let controller = DependencyListController::new(Arc::clone(&store));
    let dependency = find_declared(&controller, name)?;

    controller.toggle_panel(&dependency);
    controller.request_delete();

    let confirmed = yes || confirm_removal(&dependency).await?;
    if !confirmed {
        controller.close_modal();
        eprintln!("Cancelled, {} was not removed.", dependency.name);
        return Ok(ExitCode::Success);
    }

    match controller.confirm_delete().await? {
        DeleteOutcome::Deleted(_) | DeleteOutcome::Ignored => Ok(ExitCode::Success),
    }
}

async fn update(store: Arc<Store>, name: &str) -> Result<ExitCode> {
    store.set_filter_outdated(false);
    store.fetch_dependencies().await?;

    let controller = DependencyListController::new(Arc::clone(&store));
    let dependency = find_declared(&controller, name)?;

    match controller.request_update(&dependency).await {
        UpdateOutcome::NotSupported => Ok(ExitCode::Success),
    }
}

fn find_declared<S: DependencyStorePort>(
    controller: &DependencyListController<S>,
    name: &str,
) -> Result<Dependency> {
    controller
        .sorted_dependencies()
        .into_iter()
        .find(|dependency| dependency.is_named(name))
        .ok_or_else(|| {
            DependencyError::DependencyNotFound {
                name: name.to_string(),
            }
            .into()
        })
}

/// Asks on the terminal; without one the removal needs `--yes`
async fn confirm_removal(dependency: &Dependency) -> Result<bool> {
    if !io::stdin().is_terminal() {
        anyhow::bail!(
            "Refusing to remove {} without confirmation.\n\n💡 Hint: Pass --yes to remove without a prompt.",
            dependency.name
        );
    }

    let prompt = format!(
        "🗑️  Remove {} ({}) from {}? [y/N] ",
        dependency.name, dependency.version, dependency.dependency_type
    );
    let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
        eprint!("{}", prompt);
        io::stderr().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    })
    .await??;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: String| DependencyError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist".to_string()).into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|e| invalid(format!("Failed to read path metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        )
        .into());
    }

    if !path.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use depdesk::config::NotificationSetting;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }

    #[test]
    fn test_resolve_settings_defaults() {
        let args = Args::try_parse_from(["depdesk", "list"]).unwrap();
        let settings = resolve_settings(&args, &ConfigFile::default()).unwrap();

        assert_eq!(settings.timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(settings.npm_command, "npm");
        assert_eq!(settings.notifications, NotificationPermission::Default);
        assert!(!settings.filter_outdated_dependencies);
        assert!(!settings.check_outdated_on_startup);
        assert_eq!(settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_resolve_settings_command_line_wins() {
        let args = Args::try_parse_from([
            "depdesk",
            "list",
            "--timeout",
            "5",
            "--npm-command",
            "/opt/npm",
        ])
        .unwrap();
        let config = ConfigFile {
            request_timeout_secs: Some(60),
            npm_command: Some("pnpm".to_string()),
            notifications: Some(NotificationSetting::Denied),
            format: Some("json".to_string()),
            check_outdated_on_startup: Some(true),
            ..ConfigFile::default()
        };

        let settings = resolve_settings(&args, &config).unwrap();

        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.npm_command, "/opt/npm");
        assert_eq!(settings.notifications, NotificationPermission::Denied);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.check_outdated_on_startup);
    }
}
