//! 命令行参数与运行入口
//!
//! # 设计思路
//!
//! 只做“参数 → `SafeAreaConfig`”的翻译与结果输出，具体处理全部委托 `SafeAreaHandler`。
//! 校验顺序固定：先确认源文件存在，再校验 `--size`，最后 `--scale`。
//!
//! `--size` / `--scale` 允许以负数形式传入，使非法取值走到统一的 `InvalidArgument` 分支，
//! 而不是被解析层当成未知参数拒绝。

use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;
use crate::freshness::is_output_fresh;
use crate::safe_area::{
    CompositeMode, DEFAULT_CANVAS_SIZE, DEFAULT_CONTENT_SCALE, PngCompression, ResizeQuality,
    SafeAreaConfig, SafeAreaError, SafeAreaHandler, SafeAreaReport,
};

/// 生成带安全边距（safe area）的图标源图。
#[derive(Debug, Parser)]
#[command(
    name = "icon-safearea",
    version,
    about = "把图标缩小后居中贴到更大的透明画布上，避免系统图标蒙版让贴边内容显得过大"
)]
pub struct Cli {
    /// 输入 PNG 路径
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// 输出 PNG 路径
    #[arg(long = "out", value_name = "PATH")]
    pub output: PathBuf,

    /// 输出画布尺寸（正方形）
    #[arg(long, default_value_t = i64::from(DEFAULT_CANVAS_SIZE), allow_negative_numbers = true)]
    pub size: i64,

    /// 内容缩放比例（0~1）
    #[arg(long, default_value_t = DEFAULT_CONTENT_SCALE, allow_negative_numbers = true)]
    pub scale: f64,

    /// 缩放滤镜：lanczos3 / catmull-rom / triangle / nearest
    #[arg(long, default_value = "lanczos3", value_parser = ResizeQuality::from_str)]
    pub filter: ResizeQuality,

    /// 贴图混合方式：mask / over
    #[arg(long, default_value = "mask", value_parser = CompositeMode::from_str)]
    pub composite: CompositeMode,

    /// PNG 压缩档位：fast / default / best
    #[arg(long, default_value = "best", value_parser = PngCompression::from_str)]
    pub compression: PngCompression,

    /// 输出文件比源文件新且尺寸一致时跳过生成
    #[arg(long)]
    pub skip_if_fresh: bool,

    /// 画布边长上限（默认不限制）
    #[arg(long, value_name = "PX")]
    pub max_canvas_size: Option<u32>,

    /// 源图像素数上限（默认不限制）
    #[arg(long, value_name = "PIXELS")]
    pub max_source_pixels: Option<u64>,

    /// 源文件体积上限（字节，默认不限制）
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// 以 JSON 输出处理报告
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// 把命令行参数转换为处理配置。
    pub fn to_config(&self) -> Result<SafeAreaConfig, SafeAreaError> {
        let base = SafeAreaConfig::from_raw(self.size, self.scale)?;

        let config = SafeAreaConfig {
            resize_filter: self.filter.filter_type(),
            composite: self.composite,
            compression: self.compression,
            max_canvas_size: self.max_canvas_size,
            max_source_pixels: self.max_source_pixels,
            max_file_size: self.max_file_size,
            ..base
        };
        config.validate()?;
        Ok(config)
    }
}

/// 执行一次留白处理。
pub fn run(cli: &Cli) -> Result<SafeAreaReport, AppError> {
    SafeAreaHandler::ensure_source_exists(&cli.input)?;
    let config = cli.to_config()?;

    if cli.skip_if_fresh && is_output_fresh(&cli.input, &cli.output, config.size)? {
        log::info!("⏭️ 输出已是最新，跳过生成: {}", cli.output.display());
        return Ok(SafeAreaReport::skipped(cli.input.clone(), cli.output.clone()));
    }

    let handler = SafeAreaHandler::new(config);
    log::debug!(
        "⚙️ 配置：size={} scale={} filter={} composite={} compression={}",
        handler.config().size,
        handler.config().scale,
        cli.filter.as_str(),
        handler.config().composite.as_str(),
        handler.config().compression.as_str()
    );

    Ok(handler.process(&cli.input, &cli.output)?)
}

/// 把报告渲染为输出文本：`json` 为真时输出 JSON，否则输出一行摘要。
pub fn render_report(report: &SafeAreaReport, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    if report.skipped {
        return Ok(format!("Up to date → {}", report.destination.display()));
    }

    Ok(format!("Saved PNG → {}", report.destination.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::imageops::FilterType;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["icon-safearea"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn defaults_match_documented_values() {
        let cli = parse(&["--in", "a.png", "--out", "b.png"]);

        assert_eq!(cli.input, PathBuf::from("a.png"));
        assert_eq!(cli.output, PathBuf::from("b.png"));
        assert_eq!(cli.size, 1024);
        assert_eq!(cli.scale, 0.88);
        assert_eq!(cli.filter, ResizeQuality::Lanczos3);
        assert_eq!(cli.composite, CompositeMode::Mask);
        assert_eq!(cli.compression, PngCompression::Best);
        assert!(!cli.skip_if_fresh);
        assert!(!cli.json);
        assert_eq!(cli.max_canvas_size, None);
        assert_eq!(cli.max_source_pixels, None);
        assert_eq!(cli.max_file_size, None);
    }

    #[test]
    fn large_canvas_is_accepted_without_limit() {
        let cli = parse(&["--in", "a.png", "--out", "b.png", "--size", "20000"]);

        assert_eq!(cli.to_config().expect("valid config").size, 20_000);
    }

    #[test]
    fn canvas_limit_is_opt_in() {
        let cli = parse(&[
            "--in",
            "a.png",
            "--out",
            "b.png",
            "--size",
            "20000",
            "--max-canvas-size",
            "16384",
            "--max-source-pixels",
            "1000000",
            "--max-file-size",
            "4096",
        ]);

        assert_eq!(cli.max_source_pixels, Some(1_000_000));
        assert_eq!(cli.max_file_size, Some(4_096));
        assert!(matches!(cli.to_config(), Err(SafeAreaError::ResourceLimit(_))));
    }

    #[test]
    fn in_and_out_are_required() {
        assert!(Cli::try_parse_from(["icon-safearea", "--in", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["icon-safearea", "--out", "b.png"]).is_err());
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let cli = parse(&["--in", "a.png", "--out", "b.png", "--size", "-5", "--scale", "-0.5"]);

        assert_eq!(cli.size, -5);
        assert!(matches!(cli.to_config(), Err(SafeAreaError::InvalidArgument(_))));
    }

    #[test]
    fn to_config_carries_all_options() {
        let cli = parse(&[
            "--in",
            "a.png",
            "--out",
            "b.png",
            "--size",
            "512",
            "--scale",
            "0.5",
            "--filter",
            "nearest",
            "--composite",
            "over",
            "--compression",
            "fast",
        ]);

        let config = cli.to_config().expect("valid config");
        assert_eq!(config.size, 512);
        assert_eq!(config.scale, 0.5);
        assert_eq!(config.resize_filter, FilterType::Nearest);
        assert_eq!(config.composite, CompositeMode::Over);
        assert_eq!(config.compression, PngCompression::Fast);
    }

    #[test]
    fn unknown_filter_is_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "icon-safearea",
            "--in",
            "a.png",
            "--out",
            "b.png",
            "--filter",
            "bicubic",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn render_report_plain_and_json() {
        let report = SafeAreaReport::skipped(PathBuf::from("a.png"), PathBuf::from("b.png"));

        assert_eq!(render_report(&report, false).unwrap(), "Up to date → b.png");

        let json: serde_json::Value =
            serde_json::from_str(&render_report(&report, true).unwrap()).unwrap();
        assert_eq!(json["skipped"], true);
        assert_eq!(json["destination"], "b.png");
        assert!(json["layout"].is_null());
    }
}
