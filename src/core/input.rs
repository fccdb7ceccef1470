//! # 输入事件
//!
//! 与具体 UI 框架无关的输入值类型。`ui::canvas_view` 负责把 egui 的原始事件
//! 转成这里的 `InputEvent`，控制器只消费这些值。

use super::geometry::{PointF, SizeF};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press { pos: PointF, button: MouseButton },
    Release { pos: PointF, button: MouseButton },
    /// 指针移动（按键按下时为拖拽，否则为悬停）
    Move { pos: PointF },
    /// 滚轮：`angle_delta` 以度为单位，正值为向上 / 放大
    Wheel { angle_delta: f64, pos: PointF },
    Resize { size: SizeF },
}
