use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::UtilError;

/// 删除文件或整个目录树。路径不存在不算错误；返回是否确实删除了东西。
/// 符号链接只删除链接本身。
pub fn delete_if_exists(path: impl AsRef<Path>) -> Result<bool, UtilError> {
    let path = path.as_ref();
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    log::debug!("已删除 {path:?}");
    Ok(true)
}
