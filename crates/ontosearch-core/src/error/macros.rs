//! Error macros for ontosearch

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::OntoError::invalid_value($context, $value))
    };
}

/// Macro for mapping database errors
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::OntoError::db_operation($op, $error)
    };
}

/// Extract a typed column from a row, mapping failures to a field error
#[macro_export]
macro_rules! extract {
    ($row:expr, $idx:expr, $field:expr) => {
        $row.get($idx)
            .map_err(|e| $crate::error::OntoError::field_extraction($field, e))
    };
}
