use alloc::string::String;

pub type GridResult<T> = Result<T, GridError>;

/// Rejected grid configuration.
///
/// Layout passes and queries never fail; only option changes are validated.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("items_per_row must be at least 1")]
    ZeroItemsPerRow,

    #[error("container_height must be greater than 0")]
    ZeroContainerHeight,

    #[error("base_item_height must be greater than 0")]
    ZeroBaseItemHeight,

    #[error("invalid height policy: {reason}")]
    InvalidHeightPolicy { reason: String },
}

impl GridError {
    pub fn height_policy(reason: impl Into<String>) -> Self {
        Self::InvalidHeightPolicy {
            reason: reason.into(),
        }
    }
}
