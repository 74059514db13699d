use thiserror::Error;

/// Malformed input to validation or hinting, such as a candidate whose
/// dimensions do not match the stored solution.
///
/// Distinct from an incorrect answer, which is a normal result, not an error.
#[derive(Error, Debug)]
#[error("invalid input: {}", msg)]
pub struct InvalidInput {
    msg: String,
}

impl InvalidInput {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    pub(crate) fn dimension_mismatch(
        solution: (usize, usize),
        candidate: (usize, usize),
    ) -> Self {
        Self::new(format!(
            "candidate is {}x{} but the solution is {}x{}",
            candidate.0, candidate.1, solution.0, solution.1,
        ))
    }
}
