//! # runtime.json 通用读写
//!
//! 对 `~/.local/share/pixview/runtime.json` 的读 / 写 / 按字段合并。
//! 配置和对话框目录都通过此接口访问，只改动自己的字段。

use serde_json::{Map, Value};

use super::paths;

/// 读取 runtime.json 的完整内容，文件不存在 / 解析失败返回空对象。
pub fn load() -> Value {
    let path = paths::runtime_json_path();
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_or_empty(&content),
        Err(_) => Value::Object(Map::new()),
    }
}

/// 读取 runtime.json 中指定 key 的值，不存在返回 None。
pub fn load_field(key: &str) -> Option<Value> {
    load().get(key).cloned()
}

/// 将整个 Value 写入 runtime.json（格式化）。
pub fn save(value: &Value) -> Result<(), std::io::Error> {
    let path = paths::runtime_json_path();
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)
}

/// 合并一个字段到 runtime.json 并写入。
pub fn merge_field(key: &str, value: Value) -> Result<(), std::io::Error> {
    let mut root = load();
    merge_into(&mut root, key, value);
    save(&root)
}

fn parse_or_empty(content: &str) -> Value {
    match serde_json::from_str::<Value>(content) {
        Ok(v @ Value::Object(_)) => v,
        Ok(_) | Err(_) => {
            log::warn!("[storage] runtime.json 内容无效，按空配置处理");
            Value::Object(Map::new())
        }
    }
}

/// 插入 / 替换 key；根节点不是对象时整体替换为对象
fn merge_into(root: &mut Value, key: &str, value: Value) {
    if !root.is_object() {
        *root = Value::Object(Map::new());
    }
    if let Some(obj) = root.as_object_mut() {
        obj.insert(key.to_string(), value);
    }
}
