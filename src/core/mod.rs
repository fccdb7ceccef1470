pub mod controller;
pub mod geometry;
pub mod image;
pub mod input;
pub mod view_state;

use std::path::PathBuf;

/// 图片载入失败。控制器不会收到任何图片，状态保持不变。
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("无法读取文件 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("图片解码失败: {0}")]
    Decode(#[from] ::image::ImageError),

    #[error("图片为空: {0}")]
    EmptyImage(PathBuf),
}
