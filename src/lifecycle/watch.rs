//! Route file watcher for continuous regeneration.

use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::RewriteConfig;
use crate::error::{RewriteError, RewriteResult};
use crate::lifecycle::report;
use crate::lifecycle::rewrite::{rewrite_file, RewriteOutcome, WriteMode};

/// Quiet period before a burst of change events triggers one rewrite.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// True for events that change the file named `file_name`.
fn touches_file(event: &Event, file_name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

/// Report a rewrite triggered by a change. Returns true if a line was printed.
///
/// `Unchanged` is the echo of the watcher's own write and only goes to the
/// debug log.
fn report_change(path: &Path, result: &RewriteResult<RewriteOutcome>) -> bool {
    if let Ok(RewriteOutcome::Unchanged) = result {
        tracing::debug!(path = %path.display(), "Route file already up to date");
        return false;
    }
    report::report(path, result);
    true
}

/// A watcher that regenerates one route file whenever it changes.
pub struct RouteWatcher {
    path: PathBuf,
    mode: WriteMode,
}

impl RouteWatcher {
    pub fn new(path: &Path, mode: WriteMode) -> Self {
        Self {
            path: path.to_path_buf(),
            mode,
        }
    }

    /// Watch until `stop` resolves, rewriting after every change.
    ///
    /// The parent directory is watched so editors that save by replacing
    /// the file are still seen. Unchanged output is not written, so the
    /// watcher's own writes settle after one extra pass. A failed rewrite
    /// is reported and watching continues.
    pub async fn run<F>(self, config: &RewriteConfig, stop: F) -> RewriteResult<()>
    where
        F: Future<Output = ()>,
    {
        let file_name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| RewriteError::Read {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
            })?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if touches_file(&event, &file_name) {
                        let _ = tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %self.path.display(), "Route watcher started");

        tokio::pin!(stop);

        loop {
            tokio::select! {
                changed = rx.recv() => {
                    if changed.is_none() {
                        break;
                    }
                    tokio::time::sleep(DEBOUNCE).await;
                    while rx.try_recv().is_ok() {}

                    tracing::debug!(path = %self.path.display(), "Route file change detected");
                    let result = rewrite_file(&self.path, config, self.mode).await;
                    report_change(&self.path, &result);
                }
                _ = &mut stop => break,
            }
        }

        tracing::info!(path = %self.path.display(), "Route watcher stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteError;
    use notify::event::{CreateKind, EventKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_only_changes_to_the_route_file_count() {
        let name = OsStr::new("router.js");
        assert!(touches_file(
            &event(EventKind::Modify(ModifyKind::Any), "/app/router.js"),
            name
        ));
        assert!(touches_file(
            &event(EventKind::Create(CreateKind::File), "/app/router.js"),
            name
        ));
        assert!(!touches_file(
            &event(EventKind::Modify(ModifyKind::Any), "/app/other.js"),
            name
        ));
        assert!(!touches_file(
            &event(EventKind::Remove(RemoveKind::File), "/app/router.js"),
            name
        ));
    }

    #[test]
    fn test_unchanged_echo_is_not_printed() {
        let path = Path::new("router.js");
        assert!(!report_change(path, &Ok(RewriteOutcome::Unchanged)));
        assert!(report_change(path, &Ok(RewriteOutcome::Written)));
        assert!(report_change(
            path,
            &Err(RewriteError::from(RouteError::NotASequence { found: "null" }))
        ));
    }
}
