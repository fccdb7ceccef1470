//! # 查看器配置（ViewerConfig）
//!
//! 缩放范围、滚轮步进、重置方式、文件对话框参数等可调项。
//! 持久化到 runtime.json 的 `"viewer"` 字段；缩放比例和平移量不落盘。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::runtime;
use crate::core::controller::ControllerOptions;
use crate::core::view_state::{ResetMode, ZoomLimits};
use crate::host::DialogRequest;

const FIELD: &str = "viewer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    // ── 缩放 ──
    pub min_scale: f64,
    pub max_scale: f64,
    /// 每格滚轮的缩放增量
    pub scale_step: f64,

    // ── 滚轮 ──
    /// 一格滚轮对应的角度
    pub notch_degrees: f64,
    /// 以像素为单位上报的滚轮（触控板 / 部分平台），多少像素算一格
    pub wheel_points_per_notch: f64,

    /// 窗口尺寸变化、右键释放、载入新图时的重置方式
    pub reset_mode: ResetMode,
    /// 悬停时实时拾取像素灰度；图片很大时可关闭
    pub pixel_tracking: bool,

    // ── 文件对话框 ──
    pub dialog_title: String,
    pub extensions: Vec<String>,
    /// 上次打开图片所在目录
    pub last_directory: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let limits = ZoomLimits::default();
        Self {
            min_scale: limits.min_scale,
            max_scale: limits.max_scale,
            scale_step: limits.step,

            notch_degrees: 15.0,
            wheel_points_per_notch: 50.0,

            reset_mode: ResetMode::Identity,
            pixel_tracking: true,

            dialog_title: "打开图片".to_string(),
            extensions: ["png", "jpg", "jpeg", "bmp"].map(String::from).to_vec(),
            last_directory: None,
        }
    }
}

impl ViewerConfig {
    /// 从 runtime.json 加载，如不存在或非法则返回默认值。
    pub fn load() -> Self {
        Self::from_field(runtime::load_field(FIELD))
    }

    /// 保存到 runtime.json 的 `"viewer"` 字段。
    pub fn save(&self) {
        match serde_json::to_value(self) {
            Ok(v) => {
                if let Err(err) = runtime::merge_field(FIELD, v) {
                    log::warn!("[config] 保存 viewer 配置失败: {err}");
                }
            }
            Err(err) => log::warn!("[config] 序列化 viewer 配置失败: {err}"),
        }
    }

    fn from_field(value: Option<serde_json::Value>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        match serde_json::from_value::<Self>(value) {
            Ok(cfg) => cfg.sanitized(),
            Err(err) => {
                log::warn!("[config] viewer 配置解析失败，使用默认值: {err}");
                Self::default()
            }
        }
    }

    /// 修正非法数值：出问题的字段组回退到默认值
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let limits_ok = self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= self.max_scale;
        if !limits_ok {
            log::warn!(
                "[config] 缩放范围非法 [{}, {}]，使用默认值",
                self.min_scale,
                self.max_scale
            );
            self.min_scale = defaults.min_scale;
            self.max_scale = defaults.max_scale;
        }
        if !(self.scale_step.is_finite() && self.scale_step > 0.0) {
            log::warn!("[config] 缩放步进非法 {}，使用默认值", self.scale_step);
            self.scale_step = defaults.scale_step;
        }
        if !(self.notch_degrees.is_finite() && self.notch_degrees > 0.0) {
            self.notch_degrees = defaults.notch_degrees;
        }
        if !(self.wheel_points_per_notch.is_finite() && self.wheel_points_per_notch > 0.0) {
            self.wheel_points_per_notch = defaults.wheel_points_per_notch;
        }
        if self.extensions.is_empty() {
            self.extensions = defaults.extensions;
        }
        self
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            limits: ZoomLimits {
                min_scale: self.min_scale,
                max_scale: self.max_scale,
                step: self.scale_step,
            },
            notch_degrees: self.notch_degrees,
            reset_mode: self.reset_mode,
            pixel_tracking: self.pixel_tracking,
        }
    }

    pub fn dialog_request(&self) -> DialogRequest {
        DialogRequest {
            title: self.dialog_title.clone(),
            initial_dir: self
                .last_directory
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            extensions: self.extensions.clone(),
        }
    }
}
