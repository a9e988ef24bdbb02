//! In-memory fakes shared by the unit tests.

use crate::install::{CommandOutput, CommandRunner, StructuredCommand};
use crate::resolution::FileProbe;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ProbeState {
    /// path -> executable bit
    files: HashMap<PathBuf, bool>,
    dirs: HashSet<PathBuf>,
    on_path: HashMap<String, PathBuf>,
    live_checks: usize,
    path_lookups: usize,
}

/// A filesystem that only exists in memory. Clones share state.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryProbe {
    state: Arc<Mutex<ProbeState>>,
}

impl MemoryProbe {
    pub(crate) fn add_file(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().files.insert(path.into(), false);
    }

    pub(crate) fn add_executable(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().files.insert(path.into(), true);
    }

    /// Add an executable and make `which` find it by file name.
    pub(crate) fn add_on_path(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.clone(), true);
        state.on_path.insert(name, path);
    }

    pub(crate) fn remove(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().files.remove(path.as_ref());
    }

    pub(crate) fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().files.contains_key(path.as_ref())
    }

    pub(crate) fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().unwrap().dirs.contains(path.as_ref())
    }

    pub(crate) fn live_checks(&self) -> usize {
        self.state.lock().unwrap().live_checks
    }

    pub(crate) fn path_lookups(&self) -> usize {
        self.state.lock().unwrap().path_lookups
    }
}

impl FileProbe for MemoryProbe {
    fn search_path(&self, name: &str) -> Option<PathBuf> {
        let mut state = self.state.lock().unwrap();
        state.path_lookups += 1;
        let path = state.on_path.get(name)?.clone();
        state.files.contains_key(&path).then_some(path)
    }

    fn is_live(&self, path: &Path) -> bool {
        let mut state = self.state.lock().unwrap();
        state.live_checks += 1;
        state.files.get(path).copied().unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        match state.files.get_mut(path) {
            Some(exec) => {
                *exec = true;
                Ok(())
            }
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.state
            .lock()
            .unwrap()
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

type Handler = dyn Fn(&StructuredCommand) -> io::Result<CommandOutput> + Send + Sync;

/// Records every invocation and answers through a handler.
#[derive(Clone)]
pub(crate) struct FakeRunner {
    calls: Arc<Mutex<Vec<StructuredCommand>>>,
    handler: Arc<Handler>,
}

impl FakeRunner {
    pub(crate) fn new(
        handler: impl Fn(&StructuredCommand) -> io::Result<CommandOutput> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Arc::default(),
            handler: Arc::new(handler),
        }
    }

    /// Every command exits 0 with no output.
    pub(crate) fn succeeding() -> Self {
        Self::new(|_| Ok(CommandOutput::success("")))
    }

    /// Answer `command` without recording it.
    pub(crate) fn handle(&self, command: &StructuredCommand) -> io::Result<CommandOutput> {
        (self.handler)(command)
    }

    pub(crate) fn calls(&self) -> Vec<StructuredCommand> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &StructuredCommand) -> io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(command.clone());
        (self.handler)(command)
    }
}
