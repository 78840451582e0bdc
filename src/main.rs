//! # 图标留白工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码，业务逻辑见 `lib.rs`。

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use icon_safearea::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    let result = cli::run(&cli).and_then(|report| cli::render_report(&report, cli.json));

    match result {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
