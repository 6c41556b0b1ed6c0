mod file_history;

pub use file_history::FileHistoryStore;
