//! Where figures come from.
//!
//! The assembler only sees [`FigureSource`], so decks can be built from the
//! filesystem or from memory in tests.

use crate::common::{Error, Result};
use crate::images::decode::{extension_of, image_dimensions};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One image of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    path: PathBuf,
    file_name: String,
    width: u32,
    height: u32,
}

impl ImageEntry {
    /// The caption is the file name with surrounding whitespace trimmed.
    pub fn new(path: PathBuf, width: u32, height: u32) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().trim().to_string())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            width,
            height,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// A subfolder and the images found directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureGroup {
    pub name: String,
    pub images: Vec<PathBuf>,
}

impl FigureGroup {
    pub fn new(name: impl Into<String>, images: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            images,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Provider of figure groups and image data.
pub trait FigureSource {
    /// Groups in the order they become slides.
    fn list_groups(&self) -> Result<Vec<FigureGroup>>;

    /// Pixel size `(width, height)` of an image.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32)>;

    /// Encoded bytes of an image.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Figure source backed by a directory with one level of subfolders.
#[derive(Debug, Clone)]
pub struct FsFigureSource {
    root: PathBuf,
    extensions: Vec<String>,
    sort_by_name: bool,
}

impl FsFigureSource {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String], sort_by_name: bool) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.iter().map(|ext| ext.to_ascii_lowercase()).collect(),
            sort_by_name,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.extensions.contains(&ext))
    }

    fn walk(&self, dir: &Path, depth: usize) -> WalkDir {
        let walker = WalkDir::new(dir).min_depth(depth).max_depth(depth);
        if self.sort_by_name {
            walker.sort_by_file_name()
        } else {
            walker
        }
    }

    fn list_images(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut images = Vec::new();
        for entry in self.walk(dir, 1) {
            let entry = entry?;
            if entry.file_type().is_file() && self.accepts(entry.path()) {
                images.push(entry.into_path());
            }
        }
        Ok(images)
    }
}

impl FigureSource for FsFigureSource {
    fn list_groups(&self) -> Result<Vec<FigureGroup>> {
        if !self.root.is_dir() {
            return Err(Error::InputNotFound(self.root.clone()));
        }

        let mut groups = Vec::new();
        for entry in self.walk(&self.root, 1) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let images = self.list_images(entry.path())?;
            debug!("group {name}: {} images", images.len());
            groups.push(FigureGroup::new(name, images));
        }
        Ok(groups)
    }

    fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        Ok(image_dimensions(path).map_err(|e| e.with_path(path))?)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn write_png(path: &Path, width: u32, height: u32) {
        GrayImage::new(width, height).save(path).unwrap();
    }

    fn default_extensions() -> Vec<String> {
        ["png", "jpg", "jpeg", "gif"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lists_direct_children_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b_group");
        let a = dir.path().join("a_group");
        std::fs::create_dir_all(b.join("nested")).unwrap();
        std::fs::create_dir(&a).unwrap();
        write_png(&b.join("z.png"), 2, 1);
        write_png(&b.join("A.PNG"), 1, 1);
        write_png(&b.join("nested").join("deep.png"), 1, 1);
        std::fs::write(b.join("notes.txt"), "skip").unwrap();
        std::fs::write(b.join("raw.tif"), "skip").unwrap();
        std::fs::write(dir.path().join("loose.png"), "not a group").unwrap();

        let source = FsFigureSource::new(dir.path(), &default_extensions(), true);
        let groups = source.list_groups().unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "a_group");
        assert!(groups[0].is_empty());
        assert_eq!(groups[1].name, "b_group");
        assert_eq!(groups[1].images, vec![b.join("A.PNG"), b.join("z.png")]);
        assert_eq!(source.dimensions(&b.join("z.png")).unwrap(), (2, 1));
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsFigureSource::new(dir.path().join("absent"), &default_extensions(), true);
        assert!(matches!(source.list_groups(), Err(Error::InputNotFound(_))));
    }

    #[test]
    fn test_image_entry() {
        let entry = ImageEntry::new(PathBuf::from("figs/ cell.png "), 300, 200);
        assert_eq!(entry.file_name(), "cell.png");
        assert_eq!(entry.aspect_ratio(), 1.5);
        assert_eq!(entry.dimensions(), (300, 200));
    }
}
