//! Main app runner

use std::process::ExitCode;

use tracing::warn;

use crate::application::ports::{BackendError, ConfigStore};
use crate::application::{ClipboardCoordinator, CoordinatorError, NotificationsUseCase};
use crate::domain::config::AppConfig;
use crate::domain::item::{ItemId, ItemKind, TransferOperation};
use crate::domain::selection::{DeleteIntent, Disposition};
use crate::infrastructure::{FileSessionStore, RestBackend, XdgConfigStore};

use super::args::{ClipboardAction, Commands, NotificationsAction, TargetArgs};
use super::presenter::Presenter;
use super::terminal_view::TerminalView;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Page scraped for the anti-forgery token when none is configured
pub const CSRF_PAGE: &str = "/dashboard/";

type Coordinator = ClipboardCoordinator<RestBackend, FileSessionStore, TerminalView>;

/// Run one dashboard command (everything except `config`)
pub async fn run_command(command: Commands, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let outcome = match command {
        Commands::Copy(target) => stage(&config, presenter, target, TransferOperation::Copy).await,
        Commands::Move(target) => stage(&config, presenter, target, TransferOperation::Move).await,
        Commands::Clipboard { action } => {
            let coordinator = offline_coordinator(&config, TerminalView::new(presenter));
            match action {
                ClipboardAction::Show => coordinator.staged().await.map(|staged| match staged {
                    Some(entry) => presenter.output(&presenter.format_entry(&entry)),
                    None => presenter.info("Clipboard is empty"),
                }),
                ClipboardAction::Clear => coordinator
                    .clear_clipboard()
                    .await
                    .map(|()| presenter.success("Clipboard cleared")),
            }
        }
        Commands::Notifications { action } => {
            return run_notifications(action, &config, presenter).await;
        }
        Commands::Config { .. } => return ExitCode::from(EXIT_USAGE_ERROR),
        online => {
            let backend = match connect(&config, &presenter).await {
                Ok(backend) => backend,
                Err(e) => {
                    presenter.error(&e.user_message());
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            run_online(online, backend, &config, presenter).await
        }
    };

    finish(outcome, &presenter)
}

/// Commands that talk to the backend through the coordinator
async fn run_online(
    command: Commands,
    backend: RestBackend,
    config: &AppConfig,
    presenter: Presenter,
) -> Result<(), CoordinatorError> {
    let session = FileSessionStore::new(config.session_file_or_default());
    let view = TerminalView::new(presenter);

    match command {
        Commands::Paste { into } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            coordinator.paste(into.as_ref()).await.map(|_| ())
        }
        Commands::Rename { target, name } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            match name {
                Some(name) => coordinator.rename(target.kind, &target.id, &name).await,
                None => coordinator.prompt_rename(target.kind, &target.id).await,
            }
        }
        Commands::Favorite(TargetArgs { kind, id }) => {
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            coordinator.toggle_favorite(kind, &id).await.map(|_| ())
        }
        Commands::Archive { id, yes } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view.assume_yes(yes));
            coordinator.archive(&id).await
        }
        Commands::Unarchive { id } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            coordinator.unarchive(&id).await
        }
        Commands::Restore(TargetArgs { kind, id }) => {
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            coordinator.restore(kind, &id).await
        }
        Commands::EmptyBin { yes } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view.assume_yes(yes));
            coordinator.empty_bin().await
        }
        Commands::Delete {
            target,
            permanent,
            yes,
        } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view.assume_yes(yes));
            let intent = DeleteIntent::single(target.kind, target.id, disposition(permanent));
            coordinator.request_delete(intent).await.map(|_| ())
        }
        Commands::BulkDelete {
            documents,
            folders,
            permanent,
            yes,
        } => {
            let checked = checked_items(documents, folders);
            let view = view.with_checked(checked).assume_yes(yes);
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            coordinator
                .delete_selected(disposition(permanent))
                .await
                .map(|_| ())
        }
        Commands::Mkdir { name, parent } => {
            let coordinator = ClipboardCoordinator::new(backend, session, view);
            coordinator.create_folder(&name, parent.as_ref()).await
        }
        Commands::Copy(_)
        | Commands::Move(_)
        | Commands::Clipboard { .. }
        | Commands::Notifications { .. }
        | Commands::Config { .. } => Ok(()),
    }
}

async fn run_notifications(
    action: NotificationsAction,
    config: &AppConfig,
    presenter: Presenter,
) -> ExitCode {
    let backend = match connect(config, &presenter).await {
        Ok(backend) => backend,
        Err(e) => {
            presenter.error(&e.user_message());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let use_case = NotificationsUseCase::new(backend, TerminalView::new(presenter));

    let (result, done) = match action {
        NotificationsAction::Read => (use_case.mark_read().await, "Notifications marked as read"),
        NotificationsAction::Delete { id } => (use_case.delete(&id).await, "Notification deleted"),
        NotificationsAction::Clear => (use_case.clear_all().await, "Notifications cleared"),
    };

    match result {
        Ok(()) => {
            presenter.success(done);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.warn(&e.user_message());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn stage(
    config: &AppConfig,
    presenter: Presenter,
    target: TargetArgs,
    operation: TransferOperation,
) -> Result<(), CoordinatorError> {
    let coordinator = offline_coordinator(config, TerminalView::new(presenter));
    coordinator
        .begin_transfer(target.kind, operation, target.id)
        .await
        .map(|_| ())
}

/// Coordinator for commands that only touch the clipboard
fn offline_coordinator(config: &AppConfig, view: TerminalView) -> Coordinator {
    let session = FileSessionStore::new(config.session_file_or_default());
    ClipboardCoordinator::new(RestBackend::new(config.base_url_or_default()), session, view)
}

/// Build the backend, scraping the anti-forgery token if none is configured
pub async fn connect(config: &AppConfig, presenter: &Presenter) -> Result<RestBackend, BackendError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout_or_default())
        .build()
        .map_err(|e| BackendError::Network(e.to_string()))?;

    let mut backend = RestBackend::with_client(config.base_url_or_default(), client);
    if let Some(ref cookie) = config.session_cookie {
        backend = backend.session_cookie(cookie.clone());
    }

    match config.csrf_token {
        Some(ref token) => backend = backend.csrf_token(token.clone()),
        None => match backend.discover_csrf_token(CSRF_PAGE).await {
            Ok(true) => {}
            Ok(false) => presenter.warn("No anti-forgery token found; requests may be rejected"),
            Err(e) => warn!(error = %e, "could not load page for anti-forgery token"),
        },
    }

    Ok(backend)
}

fn disposition(permanent: bool) -> Disposition {
    if permanent {
        Disposition::HardDelete
    } else {
        Disposition::SoftDelete
    }
}

fn checked_items(documents: Vec<ItemId>, folders: Vec<ItemId>) -> Vec<(ItemKind, ItemId)> {
    documents
        .into_iter()
        .map(|id| (ItemKind::Document, id))
        .chain(folders.into_iter().map(|id| (ItemKind::Folder, id)))
        .collect()
}

/// Map a coordinator outcome to an exit code. Alerts were already shown.
fn finish(outcome: Result<(), CoordinatorError>, presenter: &Presenter) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CoordinatorError::Cancelled) => {
            presenter.warn("Cancelled");
            ExitCode::from(EXIT_ERROR)
        }
        Err(_) => ExitCode::from(EXIT_ERROR),
    }
}

/// Load and merge configuration from file and CLI/env
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < env/cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
