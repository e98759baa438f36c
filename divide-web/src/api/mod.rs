//! HTTP API handlers for divide-web

pub mod buildinfo;
pub mod connections;
pub mod directory;
pub mod families;
pub mod health;
pub mod languages;
pub mod location;
pub mod pairs;
pub mod stats;
pub mod ui;

pub use buildinfo::get_build_info;
pub use connections::language_connections;
pub use directory::directory;
pub use families::{family_languages, subfamily_languages};
pub use health::health_routes;
pub use languages::{get_language, list_languages};
pub use location::language_location;
pub use pairs::{language_translation_pairs, list_pairs};
pub use stats::get_stats;
pub use ui::{serve_app_js, serve_index};
