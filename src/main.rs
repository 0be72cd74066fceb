use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use view_counter::aggregate::structs::aggregate_store::AggregateStore;
use view_counter::common::common::{sentry_client_options, setup_logging};
use view_counter::config::structs::configuration::Configuration;
use view_counter::database::structs::database_connector::DatabaseConnector;
use view_counter::http::http::http_service;
use view_counter::http::structs::http_service_data::HttpServiceData;
use view_counter::restore::structs::restore_loader::RestoreLoader;
use view_counter::scheduler::structs::checkpoint_scheduler::CheckpointScheduler;
use view_counter::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.config.as_str(), args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry_client_options(&config.sentry_config)));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let database = match DatabaseConnector::open(&config.database) {
                Ok(database) => Arc::new(database),
                Err(error) => {
                    error!("[DATABASE] Unable to open {}: {error}", config.database.path);
                    exit(1);
                }
            };
            let restore_loader = RestoreLoader::new(database.clone());

            if let Some(file) = args.export_history.as_deref() {
                return match restore_loader.export_history(file) {
                    Ok(_) => Ok(()),
                    Err(error) => {
                        error!("[EXPORT] The history file {file} could not be generated: {error}");
                        exit(1);
                    }
                };
            }

            let aggregate_store = Arc::new(AggregateStore::new());
            match restore_loader.restore_into(&aggregate_store) {
                Ok(true) => {}
                Ok(false) => info!("[RESTORE] No previous data, starting fresh"),
                Err(error) => {
                    error!("[RESTORE] Unable to restore previous data: {error}");
                    exit(1);
                }
            }

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown signal handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let scheduler = Arc::new(CheckpointScheduler::new(
                aggregate_store.clone(),
                database.clone(),
                Duration::from_secs(config.database.persistent_interval),
                config.database.history_key
            ));

            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                let stats_handler = tokio_shutdown.clone();
                let stats_store = aggregate_store.clone();
                let stats_scheduler = scheduler.clone();
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let summary = stats_store.summary();
                                info!(
                                    "[STATS] Pages: {} - Views: {} - Unique views: {} - Checkpoint: {:?}",
                                    summary.pages, summary.views, summary.unique_views, stats_scheduler.state()
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            let (checkpoint_tx, checkpoint_rx) = tokio::sync::watch::channel(false);
            let checkpoint_task = tokio::spawn(scheduler.clone().run(checkpoint_rx));

            let bind_address = config.http_server.bind_address.as_str();
            let address: SocketAddr = match bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[HTTP] Invalid bind address {bind_address}: {error}");
                    exit(1);
                }
            };
            let http_data = Arc::new(HttpServiceData {
                aggregate_store: aggregate_store.clone(),
                http_server_config: Arc::new(config.http_server.clone()),
                stats_password: config.stats_password.clone(),
            });
            let (http_handle, http_future) = match http_service(address, http_data).await {
                Ok(server) => server,
                Err(error) => {
                    error!("[HTTP] Unable to start server on {address}: {error}");
                    exit(1);
                }
            };
            let http_task = tokio::spawn(http_future);

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            http_handle.stop(true).await;
            match http_task.await {
                Ok(Ok(_)) => {}
                Ok(Err(error)) => error!("[HTTP] Server stopped with an error: {error}"),
                Err(error) => error!("[HTTP] Server task failed: {error}"),
            }

            let _ = checkpoint_tx.send(true);
            info!("Saving final data to database...");
            match checkpoint_task.await {
                Ok(Some(report)) if report.is_complete() => info!("[CHECKPOINT] Final checkpoint saved"),
                Ok(_) => warn!("[CHECKPOINT] Final checkpoint incomplete, the last interval may be lost"),
                Err(error) => error!("[CHECKPOINT] Checkpoint task failed: {error}"),
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
