//! File watcher for live regeneration.
//!
//! Uses the `notify` crate to watch the config file (and optionally a
//! hand-edited stylesheet), with a 500ms debounce per file.

mod file_watcher;


pub use file_watcher::FileWatcher;
