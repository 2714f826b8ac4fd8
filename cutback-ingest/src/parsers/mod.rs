//! Statement parsers producing core `Transaction`s.

pub mod plain_csv;
