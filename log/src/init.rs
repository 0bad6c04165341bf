use elog::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use std::io::{Error, ErrorKind, Result};
use std::path::PathBuf;

/// 在`path`目录下创建ringkv.log，`l`为日志级别，未知级别按info处理。
pub fn init(path: &str, l: &str) -> Result<()> {
    std::fs::create_dir_all(path)?;
    let mut file = PathBuf::new();
    file.push(path);
    file.push("ringkv.log");

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "[ringkv] {d} - {l} - {t} - {m}{n}",
        )))
        .build(file)?;

    let level = match l {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" | "fatal" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("build log cfg failed:{:?}", e)))?;

    let _handle = log4rs::init_config(config)
        .map_err(|e| Error::new(ErrorKind::InvalidData, format!("init log failed:{:?}", e)))?;

    Ok(())
}
