use snafu::Snafu;

#[derive(Snafu, Debug, Clone, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum SchedulerError {
    /// Rating text that matched none of the known labels after the shortcut
    /// suffix was stripped.
    #[snafu(display("unrecognized rating: {text:?}"))]
    InvalidRating { text: String },
    #[snafu(display("unknown stage code: {code}"))]
    InvalidStage { code: u8 },
    InvalidParameters,
    #[snafu(display("missing field: {field}"))]
    MissingField { field: &'static str },
}

pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;
