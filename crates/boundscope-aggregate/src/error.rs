/// A selection that names data the table does not contain.
///
/// Not a failure of the engine: callers render a "no data" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionMiss {
    /// Returned when the selected dataset is not in the table.
    #[error("no results for dataset \"{dataset}\"")]
    UnknownDataset {
        /// The requested dataset name.
        dataset: String,
    },

    /// Returned when the dataset exists but has no cell for the selected window.
    #[error("no results for dataset \"{dataset}\" at window \"{window}\"")]
    MissingCell {
        /// The requested dataset name.
        dataset: String,
        /// The requested window identifier.
        window: String,
    },
}
