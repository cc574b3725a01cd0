//! View state for the console's pages and shared chrome.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with pure transition methods. Pages wrap
//! them in `RwSignal`s and drive them from async callbacks, which keeps the
//! enable/disable and reset rules testable without a browser.

pub mod campaigns;
pub mod injectables;
pub mod ui;
pub mod whitelist;
