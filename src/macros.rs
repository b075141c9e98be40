#[macro_export]
macro_rules! print_to {
    ($out:expr, $fmt:expr) => {{
        $out.write_fmt(format_args!($fmt))?;
    }};
    ($out:expr, $fmt:expr, $($args:tt)*) => {{
        $out.write_fmt(format_args!($fmt, $($args)*))?;
    }};
}
