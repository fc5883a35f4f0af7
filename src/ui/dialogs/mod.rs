pub mod find;

pub use find::FindPanel;
