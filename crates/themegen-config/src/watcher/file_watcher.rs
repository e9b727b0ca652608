//! Debounced watcher over a fixed set of files.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use themegen_common::ConfigError;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a set of files and reports which one changed.
pub struct FileWatcher {
    files: Vec<PathBuf>,
}

impl FileWatcher {
    /// Create a watcher for the given files. Missing files are watched for
    /// creation.
    pub fn new(files: Vec<PathBuf>) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Err(ConfigError::WatchError("no files to watch".into()));
        }
        for file in &files {
            if !file.exists() {
                warn!(
                    "{} does not exist yet, will watch for creation",
                    file.display()
                );
            }
        }
        Ok(Self { files })
    }

    /// Files this watcher reports on.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Parent directories to register with `notify`, deduplicated.
    pub(super) fn watch_dirs(&self) -> BTreeSet<PathBuf> {
        self.files
            .iter()
            .map(|f| match f.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            })
            .collect()
    }

    /// The watched file a notify event path refers to, if any.
    pub fn matching_file(&self, changed: &Path) -> Option<PathBuf> {
        matching_file(&self.files, changed)
    }

    /// Run until the notify channel closes, sending each changed file on
    /// `tx` once per 500ms quiet window.
    pub async fn watch(&self, tx: broadcast::Sender<PathBuf>) -> Result<(), ConfigError> {
        let (notify_tx, mut notify_rx) = mpsc::channel::<PathBuf>(32);

        let files = self.files.clone();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    for path in &event.paths {
                        if let Some(file) = matching_file(&files, path) {
                            debug!(file = %file.display(), "change detected");
                            let _ = notify_tx.try_send(file);
                        }
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        for dir in self.watch_dirs() {
            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display()))
                })?;
            info!("watching {}", dir.display());
        }

        while let Some(first) = notify_rx.recv().await {
            let mut pending: HashSet<PathBuf> = HashSet::from([first]);

            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);
            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => match msg {
                        Some(file) => { pending.insert(file); }
                        None => return Ok(()),
                    },
                }
            }

            for file in pending {
                info!(file = %file.display(), "file changed");
                if tx.send(file).is_err() {
                    debug!("no receivers for change signal");
                }
            }
        }

        drop(watcher);
        Ok(())
    }
}

fn matching_file(files: &[PathBuf], changed: &Path) -> Option<PathBuf> {
    let name = changed.file_name()?;
    files.iter().find(|f| f.file_name() == Some(name)).cloned()
}
