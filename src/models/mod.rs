pub mod bank;
pub mod question;

pub use bank::{BankIndex, BankIndexEntry, BankIndexMeta, BankMeta, BankPayload};
pub use bank::{ExtractMeta, ExtractPayload};
pub use question::{ParseOutcome, Question, QuestionSource, QuestionType};
