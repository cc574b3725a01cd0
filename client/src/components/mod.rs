//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome (sidebar, layout) and the panels the
//! campaign pages are assembled from.

pub mod app_layout;
pub mod campaign_card;
pub mod injectable_form;
pub mod sidebar_menu;
pub mod whitelist_domains;
