pub mod qr_scanner;

pub use qr_scanner::*;
