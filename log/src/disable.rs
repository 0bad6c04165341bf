pub type Level = elog::Level;
// 未开启enable-log时不输出任何级别
pub fn max_level() -> elog::LevelFilter {
    elog::LevelFilter::Off
}

// 丢弃level，只保留对format参数的编译期检查
#[macro_export]
macro_rules! noop {
    ($lvl:ident, $($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}
#[macro_export]
macro_rules! trace{
    ($($arg:tt)+) => ($crate::noop!(Trace, $($arg)+))
}
#[macro_export]
macro_rules! debug{
    ($($arg:tt)+) => ($crate::noop!(Debug, $($arg)+))
}
#[macro_export]
macro_rules! info{
    ($($arg:tt)+) => ($crate::noop!(Info, $($arg)+))
}

#[macro_export]
macro_rules! _warn{
    ($($arg:tt)+) => ($crate::noop!(Warn, $($arg)+));
}
#[macro_export]
macro_rules! error{
    ($($arg:tt)+) => ($crate::noop!(Error, $($arg)+))
}
#[macro_export]
macro_rules! fatal{
    ($($arg:tt)+) => ($crate::noop!(Error, $($arg)+))
}
#[macro_export]
macro_rules! log_enabled{
    ($lvl:expr) => {{
        let _: $crate::Level = $lvl;
        false
    }};
}
