//! # 宿主容器
//!
//! 选择文件 → 解码 → 交给控制器。选择对话框和解码器都是外部协作者，
//! 以 trait 注入，方便替换和测试。解码失败时控制器状态不变，也不重试。

use std::path::{Path, PathBuf};

use crate::core::LoadError;
use crate::core::controller::DisplayController;
use crate::core::image::PixelImage;

/// 文件选择对话框参数
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    pub title: String,
    pub initial_dir: PathBuf,
    /// 不带点的扩展名，如 `png`
    pub extensions: Vec<String>,
}

pub trait FileSelector {
    /// 模态选择一个文件，取消时返回 `None`
    fn select(&mut self, request: &DialogRequest) -> Option<PathBuf>;
}

pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<PixelImage, LoadError>;
}

/// 基于 rfd 的同步对话框
#[derive(Debug, Default)]
pub struct RfdSelector;

impl FileSelector for RfdSelector {
    fn select(&mut self, request: &DialogRequest) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(&request.title)
            .set_directory(&request.initial_dir)
            .add_filter("图片", request.extensions.as_slice())
            .pick_file()
    }
}

/// 基于 `image` crate 的解码器，统一转换为 RGBA8
#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> Result<PixelImage, LoadError> {
        std::fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::open(path)?;
        let image = PixelImage::from(decoded.to_rgba8());
        if image.is_empty() {
            return Err(LoadError::EmptyImage(path.to_path_buf()));
        }
        Ok(image)
    }
}

#[derive(Debug)]
pub enum PickOutcome {
    Cancelled,
    Loaded { path: PathBuf, width: u32, height: u32 },
    Failed { path: PathBuf, error: LoadError },
}

/// 弹出选择对话框，选中后解码并以重置视图的方式载入控制器
pub fn pick_and_load(
    controller: &mut DisplayController,
    selector: &mut dyn FileSelector,
    decoder: &dyn ImageDecoder,
    request: &DialogRequest,
) -> PickOutcome {
    let Some(path) = selector.select(request) else {
        log::debug!("文件选择已取消");
        return PickOutcome::Cancelled;
    };
    if path.as_os_str().is_empty() {
        return PickOutcome::Cancelled;
    }

    match decoder.decode(&path) {
        Ok(image) => {
            let (width, height) = (image.width(), image.height());
            controller.load_image(image, true);
            log::info!("已载入 {} ({width}x{height})", path.display());
            PickOutcome::Loaded {
                path,
                width,
                height,
            }
        }
        Err(error) => {
            log::warn!("载入 {} 失败: {error}", path.display());
            PickOutcome::Failed { path, error }
        }
    }
}
