/// Every way a caller can violate a local contract of this crate.
///
/// Nothing here is retried or defaulted. Classification itself is total once
/// its inputs are valid, so these only surface at the boundaries: decoding
/// keys and labels, checking cardinalities, and drawing from the deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed rank/suit/key/label, wrong number of cards, duplicated or
    /// overlapping known cards, or a zero trial count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// More cards were requested than remain outside the excluded set.
    #[error("insufficient population: requested {requested} of {available} unseen cards")]
    InsufficientPopulation { requested: usize, available: usize },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_condition() {
        let error = Error::InsufficientPopulation {
            requested: 9,
            available: 4,
        };
        assert_eq!(
            error.to_string(),
            "insufficient population: requested 9 of 4 unseen cards"
        );
        let error = Error::invalid("rank 13 outside 0..=12");
        assert_eq!(error.to_string(), "invalid argument: rank 13 outside 0..=12");
    }
}
