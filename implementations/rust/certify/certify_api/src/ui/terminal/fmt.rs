/// Left padding for all terminal output
pub const PADDING: &str = "    ";
/// Left padding for all terminal output that starts with an icon
pub const ICON_PADDING: &str = "  ";

#[macro_export]
macro_rules! fmt_log {
    ($input:expr) => {
        format!("{}{}",
        $crate::terminal::PADDING,
        format!($input))
    };
    ($input:expr, $($args:expr),+) => {
        format!("{}{}",
        $crate::terminal::PADDING,
        format!($input, $($args),+))
    };
}

#[macro_export]
macro_rules! fmt_ok {
    ($input:expr) => {
        format!("{}{} {}",
        $crate::terminal::ICON_PADDING,
        "✔"
            .color($crate::colors::CertifyColor::FmtOKBackground.color())
            .bold(),
        format!($input))
    };
    ($input:expr, $($args:expr),+) => {
        format!("{}{} {}",
        $crate::terminal::ICON_PADDING,
        "✔"
            .color($crate::colors::CertifyColor::FmtOKBackground.color())
            .bold(),
        format!($input, $($args),+))
    };
}

#[macro_export]
macro_rules! fmt_list {
    ($input:expr) => {
        format!("{}{} {}",
        $crate::terminal::ICON_PADDING,
        "│"
            .color($crate::colors::CertifyColor::FmtLISTBackground.color())
            .bold(),
        format!($input))
    };
    ($input:expr, $($args:expr),+) => {
        format!("{}{} {}",
        $crate::terminal::ICON_PADDING,
        "│"
            .color($crate::colors::CertifyColor::FmtLISTBackground.color())
            .bold(),
        format!($input, $($args),+))
    };
}

#[macro_export]
macro_rules! fmt_err {
    ($input:expr) => {
        format!("{}{} {}",
        $crate::terminal::ICON_PADDING,
        "✗"
            .color($crate::colors::CertifyColor::FmtERRORBackground.color())
            .bold(),
        format!($input))
    };
    ($input:expr, $($args:expr),+) => {
        format!("{}{} {}",
        $crate::terminal::ICON_PADDING,
        "✗"
            .color($crate::colors::CertifyColor::FmtERRORBackground.color())
            .bold(),
        format!($input, $($args),+))
    };
}

#[cfg(test)]
mod tests {
    use colorful::Colorful;

    #[test]
    fn icon_macros_keep_the_message() {
        let msg = fmt_ok!("Certificate {} is valid", "SLIIT-001");
        assert!(msg.starts_with(super::ICON_PADDING));
        assert!(msg.contains("✔"));
        assert!(msg.ends_with("Certificate SLIIT-001 is valid"));

        let msg = fmt_err!("Certificate not found");
        assert!(msg.ends_with("Certificate not found"));
    }

    #[test]
    fn log_macro_is_padded() {
        assert_eq!(fmt_log!("Loading..."), format!("{}Loading...", super::PADDING));
    }
}
