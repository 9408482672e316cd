//! Rebuild the site whenever the dataset changes.

use std::{
    path::Path,
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    time::Duration,
};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{error, info, warn};

use crate::generator::SiteGenerator;

/// Quiet period collapsing a burst of file events into one rebuild.
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Build once, then rebuild on every dataset change until the watcher stops.
///
/// Failed rebuilds are logged and the previous output stays in place.
pub fn watch(generator: &SiteGenerator) -> Result<()> {
    let data_dir = generator.config().data_dir.clone();
    rebuild(generator);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("failed to create file watcher")?;
    watcher
        .watch(&data_dir, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", data_dir.display()))?;
    info!("watching {} for changes", data_dir.display());

    while let Ok(event) = rx.recv() {
        match event {
            Ok(event) if is_dataset_change(&event) => {
                drain(&rx);
                info!("dataset changed, rebuilding");
                rebuild(generator);
            }
            Ok(_) => {}
            Err(err) => warn!("file watcher error: {err}"),
        }
    }
    Ok(())
}

fn rebuild(generator: &SiteGenerator) {
    if let Err(err) = generator.build() {
        error!("build failed: {err:#}");
    }
}

/// Swallow events until the dataset has been quiet for [`DEBOUNCE`].
fn drain(rx: &Receiver<notify::Result<Event>>) {
    loop {
        match rx.recv_timeout(DEBOUNCE) {
            Ok(_) => continue,
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn is_dataset_change(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|path| is_yaml(path))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use std::path::PathBuf;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn only_yaml_writes_trigger_rebuilds() {
        assert!(is_dataset_change(&event(
            EventKind::Modify(ModifyKind::Any),
            "data/weapons/ember-blaze.yaml"
        )));
        assert!(is_dataset_change(&event(
            EventKind::Create(CreateKind::File),
            "data/elf-catalog.yml"
        )));
        assert!(!is_dataset_change(&event(
            EventKind::Modify(ModifyKind::Any),
            "data/weapons/.ember-blaze.yaml.swp"
        )));
        assert!(!is_dataset_change(&event(
            EventKind::Access(AccessKind::Any),
            "data/weapons/ember-blaze.yaml"
        )));
    }
}
