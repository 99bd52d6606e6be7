// Adapters layer: concrete implementations for external systems (storage, input decoding).

pub mod decode;
pub mod storage;

pub use storage::LocalStorage;
