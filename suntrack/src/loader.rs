//! Frame enumeration and decoding.

use crate::error::{Result, TrackError};
use crate::frame::Frame;
use image::GrayImage;
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// File extensions recognized as input photographs (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Derive a frame identifier from a file path.
///
/// The identifier is the first 10 characters of the file name, which by
/// input convention encode the capture date. Shorter names yield shorter
/// identifiers; no date-format validation is performed.
pub fn frame_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().chars().take(10).collect())
        .unwrap_or_default()
}

/// List the image files of a directory, sorted by derived identifier.
///
/// Non-files and unrecognized extensions are skipped. Directory
/// enumeration order is not chronological on most filesystems, so frames
/// are sorted by identifier (then by file name for a total order) before
/// the continuity-dependent processing loop sees them.
///
/// # Errors
/// Returns `TrackError::Enumerate` if the directory cannot be read.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| TrackError::Enumerate {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TrackError::Enumerate {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let recognized = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false);
        if recognized {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| {
        frame_id(a)
            .cmp(&frame_id(b))
            .then_with(|| a.file_name().cmp(&b.file_name()))
    });
    Ok(paths)
}

/// Decode a photograph into a grayscale frame.
///
/// The image is converted to 8-bit luminance and widened to f32 in the
/// 0..255 domain. Array indices `[y, x]` map to pixel coordinates
/// `(x, y)`.
///
/// # Errors
/// Returns `TrackError::Decode` for unreadable or corrupt files.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let decoded = image::open(path).map_err(|source| TrackError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Frame::new(frame_id(path), gray_to_array(&decoded.to_luma8())))
}

fn gray_to_array(gray: &GrayImage) -> Array2<f32> {
    let (width, height) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((height as usize, width as usize));
    for (x, y, pixel) in gray.enumerate_pixels() {
        data[[y as usize, x as usize]] = f32::from(pixel.0[0]);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_truncates_to_ten_chars() {
        assert_eq!(
            frame_id(Path::new("/data/2020-06-01_130000.png")),
            "2020-06-01"
        );
        assert_eq!(frame_id(Path::new("short.png")), "short.png");
    }

    #[test]
    fn test_list_frames_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let touch = |name: &str| std::fs::write(dir.path().join(name), b"").unwrap();

        touch("2020-06-03_130000.jpg");
        touch("2020-06-01_130000.png");
        touch("2020-06-02_130000.JPEG");
        touch("notes.txt");
        std::fs::create_dir(dir.path().join("2020-06-00_subdir.png")).unwrap();

        let paths = list_frames(dir.path()).unwrap();
        let ids: Vec<String> = paths.iter().map(|p| frame_id(p)).collect();
        assert_eq!(ids, vec!["2020-06-01", "2020-06-02", "2020-06-03"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = list_frames(Path::new("/nonexistent/sun/frames"));
        assert!(matches!(result, Err(TrackError::Enumerate { .. })));
    }

    #[test]
    fn test_load_frame_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2020-06-01_130000.png");

        let mut gray = GrayImage::new(8, 4);
        gray.put_pixel(5, 2, image::Luma([200u8]));
        gray.save(&path).unwrap();

        let frame = load_frame(&path).unwrap();
        assert_eq!(frame.id, "2020-06-01");
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 4);
        assert_eq!(frame.data[[2, 5]], 200.0);
        assert_eq!(frame.data[[0, 0]], 0.0);
    }

    #[test]
    fn test_corrupt_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2020-06-01_bad.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(
            load_frame(&path),
            Err(TrackError::Decode { .. })
        ));
    }
}
