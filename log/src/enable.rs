pub use elog;

pub type Level = elog::Level;
pub fn max_level() -> elog::LevelFilter {
    elog::max_level()
}
#[macro_export]
macro_rules! trace{
    ($($arg:tt)+) => ($crate::elog::log!($crate::elog::Level::Trace, $($arg)+))
}
#[macro_export]
macro_rules! debug{
    ($($arg:tt)+) => ($crate::elog::log!($crate::elog::Level::Debug, $($arg)+))
}
#[macro_export]
macro_rules! info{
    ($($arg:tt)+) => ($crate::elog::log!($crate::elog::Level::Info, $($arg)+))
}

#[macro_export]
macro_rules! _warn{
    ($($arg:tt)+) => ($crate::elog::log!($crate::elog::Level::Warn, $($arg)+));
}
#[macro_export]
macro_rules! error{
    ($($arg:tt)+) => ($crate::elog::log!($crate::elog::Level::Error, $($arg)+))
}
// log crate没有fatal级别，按error输出
#[macro_export]
macro_rules! fatal{
    ($($arg:tt)+) => ($crate::elog::log!($crate::elog::Level::Error, $($arg)+))
}
#[macro_export]
macro_rules! log_enabled{
    ($lvl:expr) => ($crate::elog::log_enabled!($lvl))
}
