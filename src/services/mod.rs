pub mod bank_service;
pub mod document_loader;

pub use bank_service::{build_bank, make_bank_id, write_bank_index};
pub use document_loader::{load_all_documents, load_document, Document};
