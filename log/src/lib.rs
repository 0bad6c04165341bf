// 未开启enable-log时，所有日志宏都是noop，但依然会检查format参数
#[cfg(feature = "enable-log")]
mod enable;
#[cfg(feature = "enable-log")]
pub use enable::*;

#[cfg(not(feature = "enable-log"))]
mod disable;
#[cfg(not(feature = "enable-log"))]
pub use disable::*;

mod init;
pub use init::init;

pub use crate::_warn as warn;
