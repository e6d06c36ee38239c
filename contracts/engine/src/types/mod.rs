pub mod hop;
