//! # 平面几何值类型
//!
//! 控制器只依赖这里的 f64 类型，不依赖任何 UI 框架的坐标类型。
//! 所有坐标都是容器局部坐标：左上角为原点，x 向右，y 向下。

use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// 容器坐标系中的一个点
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

/// 平移量 / 两点之差
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VectorF {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

/// 轴对齐矩形（左上角 + 尺寸）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vector(self) -> VectorF {
        VectorF::new(self.x, self.y)
    }
}

impl VectorF {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl SizeF {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> PointF {
        PointF::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// 以 `center` 为中心、`size` 为尺寸构造矩形
    pub fn from_center_size(center: PointF, size: SizeF) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn top_left(&self) -> PointF {
        PointF::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// 闭区间判定：右、下边界上的点也算在矩形内
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

// ── 运算符 ──────────────────────────────────────────────────

impl Sub for PointF {
    type Output = VectorF;

    fn sub(self, rhs: PointF) -> VectorF {
        VectorF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<VectorF> for PointF {
    type Output = PointF;

    fn add(self, rhs: VectorF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add for VectorF {
    type Output = VectorF;

    fn add(self, rhs: VectorF) -> VectorF {
        VectorF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for VectorF {
    type Output = VectorF;

    fn sub(self, rhs: VectorF) -> VectorF {
        VectorF::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for VectorF {
    fn add_assign(&mut self, rhs: VectorF) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for VectorF {
    fn sub_assign(&mut self, rhs: VectorF) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for VectorF {
    type Output = VectorF;

    fn mul(self, rhs: f64) -> VectorF {
        VectorF::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for VectorF {
    type Output = VectorF;

    fn div(self, rhs: f64) -> VectorF {
        VectorF::new(self.x / rhs, self.y / rhs)
    }
}

impl Mul<f64> for SizeF {
    type Output = SizeF;

    fn mul(self, rhs: f64) -> SizeF {
        SizeF::new(self.width * rhs, self.height * rhs)
    }
}
