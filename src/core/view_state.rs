//! # 视图状态
//!
//! 缩放比例 + 相对容器中心的平移量。显示矩形由它们与容器尺寸、
//! 图片尺寸共同决定，见 [`ViewState::display_rect`]。

use serde::{Deserialize, Serialize};

use super::geometry::{PointF, RectF, SizeF, VectorF};

/// 缩放比例上下限与每格滚轮的增量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.05,
            max_scale: 20.0,
            step: 0.05,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// 重置视图时采用的缩放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMode {
    /// 1:1 原始尺寸
    #[default]
    Identity,
    /// 完整放入容器：`min(容器宽/图宽, 容器高/图高)`
    FitToContainer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    pub pan_offset: VectorF,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewState {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            pan_offset: VectorF::ZERO,
        }
    }

    /// 按重置模式得到初始状态；平移量总是归零
    pub fn reset(mode: ResetMode, container: SizeF, image: SizeF, limits: &ZoomLimits) -> Self {
        let scale = match mode {
            ResetMode::Identity => 1.0,
            ResetMode::FitToContainer if !image.is_empty() => {
                let sx = container.width / image.width;
                let sy = container.height / image.height;
                sx.min(sy)
            }
            ResetMode::FitToContainer => 1.0,
        };
        Self {
            scale: limits.clamp(scale),
            pan_offset: VectorF::ZERO,
        }
    }

    /// 坐标系原点（图片中心）在容器中的位置
    pub fn origin(&self, container: SizeF) -> PointF {
        container.center() + self.pan_offset
    }

    /// 图片当前在容器中占据的矩形
    pub fn display_rect(&self, container: SizeF, image: SizeF) -> RectF {
        RectF::from_center_size(self.origin(container), image * self.scale)
    }
}
