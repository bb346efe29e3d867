//! # Petdeck Architecture
//!
//! Petdeck is a **UI-agnostic pet care library**: one persisted document
//! (pets, care reminders, chat log), mutated through whole-document
//! read-modify-write cycles, and re-projected into a full UI state after
//! every write. The CLI binary is just one client of that core.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                   │
//! │  - Parses arguments, prints facets, prompts for            │
//! │    confirmation; the only place that touches the terminal  │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade, one method per user action                 │
//! │  - Generic over store, id generator, and responder         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - One mutator per operation: load → transform → save,     │
//! │    then render the saved document into the result          │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - DocumentStore trait over the single persisted document  │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Save Triggers Render
//!
//! Every mutator ends by saving the full document and rebuilding the
//! complete [`render::UiState`] from a fresh load. The UI can never
//! observe a state the store does not also hold. There is no incremental
//! update path; the documents involved are small and a full rebuild keeps
//! the data flow unidirectional and easy to reason about.
//!
//! ## Permissiveness
//!
//! Input validation deliberately favors availability over strictness:
//! invalid ages coerce to 0, reminders may point at pets that no longer
//! exist (rendered with an "Unknown" owner), and empty chat input is
//! ignored. Only imported documents are validated, and only for shape.
//! Tightening any of this changes observable behavior and should not be
//! done casually.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: One mutator per operation, plus import/export
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Document`, `Pet`, `Reminder`, `ChatMessage`)
//! - [`render`]: Pure projection from document to UI state
//! - [`responder`]: The bot reply collaborator
//! - [`id`]: Opaque identifier generation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod render;
pub mod responder;
pub mod store;
