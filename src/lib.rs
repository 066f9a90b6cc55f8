/*!
 * # projdoc - Project document renderer
 *
 * A Rust library that turns a structured project-document form into a
 * styled word-processor document in one of two locales.
 *
 * ## Features
 *
 * - Locale-aware formatting of names, emails, titles and keywords
 * - Word ceilings on the content and abstract blocks
 * - Mentor lists with numbered superscripts when several institutions appear
 * - Right-to-left layout for the primary locale
 * - Export to a `.doc` artifact through a pluggable save sink
 * - Form snapshots persisted as JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `locale`: Locale identifiers and per-locale layout settings
 * - `model`: Document content types
 * - `formatting`: Pure text formatters
 * - `validation`: Word ceilings, required fields and advisory warnings
 * - `render`: Section renderers and the document assembler
 * - `export`: Artifact creation and save sinks
 * - `snapshot`: Persisted form state
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod formatting;
pub mod locale;
pub mod model;
pub mod render;
pub mod snapshot;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, RenderError};
pub use export::{ExportArtifact, ExportSink, Exporter, FileSystemSink, MemorySink};
pub use locale::{Locale, LocaleSettings, LocaleTable, Section};
pub use model::{DocumentContent, ExternalMentor, Institution, Mentor, Student};
pub use render::{DocumentRenderer, RenderedDocument};
pub use snapshot::{FormSnapshot, SnapshotStore};
