//! Biblias – a small HTTP service cataloguing editions of the Bible.
//!
//! Each edition has a store-assigned `id` plus three free-form text fields,
//! exchanged as JSON under the names `nome`, `versao` and `idioma`.
//!
//! ## Modules
//! * [`edition`] – The [`edition::Edition`] row and the [`edition::EditionFields`]
//!   request body.
//! * [`persist`] – SQLite record store; creates its table on startup.
//! * [`server`] – The axum router with its four handlers and a permissive CORS layer.
//! * [`settings`] – Listen address and database file, from an optional config file.
//! * [`error`] – [`error::BibliaError`] and its mapping onto HTTP status codes.
//!
//! ## Endpoints
//! | Method | Path            | Answer                          |
//! |--------|-----------------|---------------------------------|
//! | GET    | `/biblias`      | 200 with a JSON array           |
//! | POST   | `/biblias`      | 201, empty body                 |
//! | PUT    | `/biblias/{id}` | 200, empty body                 |
//! | DELETE | `/biblias/{id}` | 200, empty body                 |
//!
//! Updating or deleting an id that does not exist is not an error.
//!
//! ## Quick Start
//! ```
//! use biblias::persist::{Persistor, PersistenceMode};
//! use biblias::edition::EditionFields;
//! let store = Persistor::new(PersistenceMode::InMemory).unwrap();
//! let id = store.insert(&EditionFields::new("NVI", "2011", "pt")).unwrap();
//! assert_eq!(store.list_all().unwrap()[0].id, id);
//! ```

pub mod edition;
pub mod error;
pub mod persist;
pub mod server;
pub mod settings;
