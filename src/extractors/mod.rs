// src/extractors/mod.rs
pub mod fields;
pub mod ministry;
pub mod record;
pub mod splitter;

// Re-export key extraction types for convenience
pub use fields::FieldExtractor;
pub use ministry::MinistryRuleKind;
pub use record::ExtractedRecord;
pub use splitter::split_gazette;
