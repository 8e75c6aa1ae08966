pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod selector;
pub mod types;

pub use document::Document;
pub use element::Element;
pub use error::DomError;
pub use event::Event;
pub use selector::Selector;
pub use types::*;
