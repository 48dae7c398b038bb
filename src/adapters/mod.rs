// Adapters layer: concrete implementations for external systems (stdin, files).

pub mod source;
