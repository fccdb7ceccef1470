//! # 应用路径管理
//!
//! 应用数据目录为 `$XDG_DATA_HOME/pixview/`，未设置时回退到
//! `~/.local/share/pixview/`。首次使用时自动创建。

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 全局单例：应用数据根目录
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

const APP_DIR_NAME: &str = "pixview";

/// 获取应用数据根目录，首次调用时初始化（创建目录）。
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        let dir = resolve_data_dir(
            std::env::var("XDG_DATA_HOME").ok().as_deref(),
            home_dir().as_deref(),
        );
        if let Err(err) = std::fs::create_dir_all(&dir) {
            log::warn!("[storage] 无法创建数据目录 {}: {err}", dir.display());
        }
        dir
    })
}

/// runtime.json 的完整路径
pub fn runtime_json_path() -> PathBuf {
    data_dir().join("runtime.json")
}

// ── 内部实现 ────────────────────────────────────────────────

/// 推算数据根目录
fn resolve_data_dir(xdg_data_home: Option<&str>, home: Option<&Path>) -> PathBuf {
    // 1) 优先使用 $XDG_DATA_HOME/pixview
    if let Some(xdg) = xdg_data_home.filter(|s| !s.is_empty()) {
        let p = PathBuf::from(xdg).join(APP_DIR_NAME);
        if p.parent().map(|d| d.exists()).unwrap_or(false) {
            return p;
        }
    }
    // 2) 回退 ~/.local/share/pixview
    if let Some(home) = home {
        return home.join(".local").join("share").join(APP_DIR_NAME);
    }
    // 3) 极端 fallback：可执行文件旁边
    exe_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}
