//! tar 归档的安全解压
//!
//! 归档只读取一次到内存，先完整检查一遍所有条目，再从同一份字节解压。
//! 以下任一情况都会拒绝整个归档，此时不会写入任何文件：
//! - 条目路径为绝对路径或含有`..`；
//! - 条目路径经过归档中声明的符号链接；
//! - 链接条目的链接目标为绝对路径、解析后落在目标目录之外，或解析时经过符号链接。

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, EntryType};

use super::error::UtilError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// 将`src`处的 tar 归档（可为 gzip 压缩）解压到`dst`目录，返回解压出的条目数。
///
/// `src`开头的`~`会展开为用户主目录；`dst`不存在时会被创建。
pub fn extract_to(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<usize, UtilError> {
    let src = expand_user(src.as_ref());
    if !src.is_file() {
        return Err(UtilError::FileNotFound(src));
    }
    let dst = std::path::absolute(dst.as_ref())?;
    let bytes = fs::read(&src)?;

    check_entries(&bytes)?;

    fs::create_dir_all(&dst)?;
    let mut extracted = 0;
    for entry in open_archive(&bytes).entries()? {
        if entry?.unpack_in(&dst)? {
            extracted += 1;
        }
    }
    log::info!("已将 {src:?} 解压到 {dst:?}，共 {extracted} 个条目");
    Ok(extracted)
}

/// 展开路径开头的`~`，无法确定主目录时原样返回
pub fn expand_user(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

struct EntryMeta {
    path: PathBuf,
    entry_type: EntryType,
    link_name: Option<PathBuf>,
}

fn check_entries(bytes: &[u8]) -> Result<(), UtilError> {
    let mut entries = Vec::new();
    for entry in open_archive(bytes).entries()? {
        let entry = entry?;
        let path = entry.path()?.into_owned();
        if path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(UtilError::PathTraversal { entry: path });
        }
        entries.push(EntryMeta {
            path,
            entry_type: entry.header().entry_type(),
            link_name: entry.link_name()?.map(|name| name.into_owned()),
        });
    }

    // 先收集全部符号链接，链接在归档中出现的先后不影响检查结果
    let symlinks: HashSet<PathBuf> = entries
        .iter()
        .filter(|meta| meta.entry_type == EntryType::Symlink)
        .map(|meta| relative_to_root(&meta.path))
        .collect();

    for meta in &entries {
        let relative = relative_to_root(&meta.path);
        if !resolves_inside(&relative, &symlinks) {
            return Err(UtilError::PathTraversal {
                entry: meta.path.clone(),
            });
        }
        if let Some(link_name) = &meta.link_name {
            // 符号链接相对于自身所在目录解析，硬链接相对于解压根目录解析
            let link_base = match meta.entry_type {
                EntryType::Symlink => relative.parent().unwrap_or(Path::new("")),
                _ => Path::new(""),
            };
            if !resolves_inside(&link_base.join(link_name), &symlinks) {
                return Err(UtilError::PathTraversal {
                    entry: meta.path.clone(),
                });
            }
        }
    }
    Ok(())
}

/// 逐个分量地解析相对于解压根目录的路径。
///
/// 越过根目录、遇到绝对路径，或在某个符号链接之后还有分量时返回`false`。
fn resolves_inside(path: &Path, symlinks: &HashSet<PathBuf>) -> bool {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        if component == Component::CurDir {
            continue;
        }
        if symlinks.contains(&resolved) {
            return false;
        }
        match component {
            Component::Normal(name) => resolved.push(name),
            Component::ParentDir => {
                if !resolved.pop() {
                    return false;
                }
            }
            _ => return false,
        }
    }
    true
}

fn relative_to_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

fn open_archive(bytes: &[u8]) -> Archive<Box<dyn Read + '_>> {
    let reader: Box<dyn Read + '_> = if bytes.starts_with(&GZIP_MAGIC) {
        Box::new(GzDecoder::new(bytes))
    } else {
        Box::new(bytes)
    };
    Archive::new(reader)
}
