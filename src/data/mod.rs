pub mod table;
pub mod normalize;
pub mod split;

pub use table::{DataTable, DataError};
pub use normalize::{ColumnScale, TableScaler};
pub use split::{Split, split_at_fraction};
