//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `SafeAreaHandler` 只负责流程编排，处理链路固定为：
//! 1. 确认源文件存在
//! 2. 校验配置
//! 3. 读取并解码源图
//! 4. 计算版式并缩放内容
//! 5. 创建透明画布并贴图
//! 6. 编码写出 PNG
//!
//! 每个阶段记录耗时，便于诊断大图处理的瓶颈。

use std::path::Path;
use std::time::Instant;

use super::source::SafeAreaReport;
use super::{SafeAreaConfig, SafeAreaError, SafeAreaLayout};

/// 留白处理器。
pub struct SafeAreaHandler {
    config: SafeAreaConfig,
}

impl SafeAreaHandler {
    pub fn new(config: SafeAreaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SafeAreaConfig {
        &self.config
    }

    /// 处理主入口：读取 `source`，生成带留白的 PNG 写到 `destination`。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use icon_safearea::safe_area::{SafeAreaConfig, SafeAreaHandler};
    /// use std::path::Path;
    ///
    /// let handler = SafeAreaHandler::new(SafeAreaConfig::default());
    /// let report = handler.process(Path::new("icon.png"), Path::new("icons/icon-source.png"))?;
    /// assert_eq!(report.layout.map(|l| l.canvas_size), Some(1024));
    /// # Ok::<(), icon_safearea::safe_area::SafeAreaError>(())
    /// ```
    pub fn process(
        &self,
        source: &Path,
        destination: &Path,
    ) -> Result<SafeAreaReport, SafeAreaError> {
        let config = &self.config;
        let total_start = Instant::now();

        Self::ensure_source_exists(source)?;
        config.validate()?;

        let load_start = Instant::now();
        let raw = self.load_from_file(source, config)?;
        let decoded = self.decode_source(raw, config)?;
        let source_dimensions = decoded.pixels.dimensions();
        let load_elapsed = load_start.elapsed();

        let layout = SafeAreaLayout::compute(config.size, config.scale)?;

        let resize_start = Instant::now();
        let content = self.resize_to_square(&decoded.pixels, layout.target, config.resize_filter);
        let resize_elapsed = resize_start.elapsed();

        let compose_start = Instant::now();
        let mut canvas = Self::new_canvas(layout.canvas_size);
        Self::paste(&mut canvas, &content, layout.offset, config.composite);
        let compose_elapsed = compose_start.elapsed();

        let write_start = Instant::now();
        let output_bytes = self.write_png(&canvas, destination, config.compression)?;
        let write_elapsed = write_start.elapsed();

        log::info!(
            "✅ 留白处理完成 - {}x{} ({}KB) -> 画布 {} 内容 {} 偏移 {} 输出 {}KB | load={}ms resize={}ms compose={}ms write={}ms total={}ms",
            source_dimensions.0,
            source_dimensions.1,
            decoded.file_size / 1024,
            layout.canvas_size,
            layout.target,
            layout.offset,
            output_bytes / 1024,
            load_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            compose_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(SafeAreaReport {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            source_dimensions: Some(source_dimensions),
            layout: Some(layout),
            output_bytes,
            skipped: false,
        })
    }
}
