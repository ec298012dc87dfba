/// Build a [`FieldSet`](crate::FieldSet) from `key => value` pairs.
///
/// Values may be of mixed types; anything convertible into a
/// [`FieldValue`](crate::FieldValue) works.
///
/// # Example
///
/// ```
/// use logseam::fields;
///
/// let fields = fields! { "code" => 404, "cached" => false };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::FieldSet::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::FieldSet::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}

/// Format and emit a debug-level record.
///
/// With no `logger:` argument the record goes through the process-wide
/// default; with `logger: l` it goes through `l`, which may be a
/// [`Logger`](crate::Logger) or an [`Entry`](crate::Entry).
///
/// # Example
///
/// ```
/// use logseam::debugf;
///
/// debugf!("retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::debug(format!($($arg)+))
    };
}

/// Format and emit an info-level record.
///
/// Accepts the same forms as [`debugf!`].
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::info(format!($($arg)+))
    };
}

/// Format and emit a warn-level record.
///
/// Accepts the same forms as [`debugf!`].
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::warn(format!($($arg)+))
    };
}

/// Format and emit an error-level record.
///
/// Accepts the same forms as [`debugf!`].
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::error(format!($($arg)+))
    };
}

/// Format and emit a fatal-level record.
///
/// Accepts the same forms as [`debugf!`]. Whether the backend terminates
/// the process is its own decision; see
/// [`Level::Fatal`](crate::Level::Fatal).
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatal(format!($($arg)+))
    };
}
