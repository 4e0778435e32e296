use thiserror::Error as ThisError;

///
/// GenerationError
///
/// The only way generation fails. Everything past the applicability check is
/// accepted as-is.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum GenerationError {
    #[error("codable generation can only be applied to classes")]
    OnlyApplicableToRecordType,
}
